//! End-to-end index build against a real directory through `LocalFileStorage`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use library::MusicIndex;
use platform::storage_local::LocalFileStorage;
use tempfile::TempDir;

fn seed_library(tmp: &TempDir, names: &[&str]) {
    let dir = tmp.path().join("music");
    fs::create_dir(&dir).unwrap();
    for name in names {
        fs::write(dir.join(name), b"not a real wav").unwrap();
    }
}

#[tokio::test]
async fn scan_builds_grouped_catalogue_from_disk() {
    let tmp = TempDir::new().unwrap();
    seed_library(
        &tmp,
        &[
            "Beatles - Abbey Road - Come Together.wav",
            "Beatles - Abbey Road - Something.wav",
            "Eno - Another Green World - Becalmed.wav",
            "field recording.wav",
            "notes.txt",
        ],
    );

    let mut storage = LocalFileStorage::new(tmp.path().to_str().unwrap());
    let mut index = MusicIndex::new();
    index.rebuild(&mut storage, "music").await;

    // .txt filtered out; all four .wav files in the flat listing.
    assert_eq!(index.files().len(), 4);

    let artists: Vec<&str> = index.artists().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(artists, ["Beatles", "Eno"]);

    let beatles: Vec<&str> = index
        .songs_by_artist("Beatles")
        .unwrap()
        .iter()
        .map(|s| s.as_str())
        .collect();
    assert_eq!(beatles, ["Come Together", "Something"]);

    // The unstructured name is playable from the flat listing only.
    assert!(index.files().iter().any(|f| f.as_str() == "field recording.wav"));
    assert!(index.songs().iter().all(|s| s.as_str() != "field recording"));

    // Reverse lookup reconstructs the exact on-disk filename.
    assert_eq!(
        index.resolve_filename("Becalmed").unwrap().as_str(),
        "Eno - Another Green World - Becalmed.wav"
    );
}

#[tokio::test]
async fn scan_of_missing_directory_yields_empty_index() {
    let tmp = TempDir::new().unwrap();
    let mut storage = LocalFileStorage::new(tmp.path().to_str().unwrap());
    let mut index = MusicIndex::new();
    index.rebuild(&mut storage, "music").await;
    assert!(index.files().is_empty());
    assert!(index.artists().is_empty());
}
