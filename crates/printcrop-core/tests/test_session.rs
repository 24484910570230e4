use std::fs;

use tempfile::TempDir;

use printcrop_core::error::PrintcropError;
use printcrop_core::session::Session;

fn touch(dir: &TempDir, name: &str) {
    fs::write(dir.path().join(name), b"x").unwrap();
}

#[test]
fn test_open_filters_and_sorts() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "b.jpg");
    touch(&dir, "a.JPEG");
    touch(&dir, "c.jpeg");
    touch(&dir, "skip.png");
    touch(&dir, "notes.txt");
    fs::create_dir(dir.path().join("nested.jpg")).unwrap(); // dir, not a file

    let session = Session::open(dir.path()).unwrap();
    assert_eq!(session.len(), 3);
    assert_eq!(session.current(), Some("a.JPEG"));
    assert!(dir.path().join("edited").is_dir());
}

#[test]
fn test_empty_folder_is_rejected() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "readme.txt");

    match Session::open(dir.path()) {
        Err(PrintcropError::NoImagesFound(path)) => assert_eq!(path, dir.path()),
        other => panic!("expected NoImagesFound, got {:?}", other.map(|_| ())),
    }

    // No output directory side effect for an empty session.
    assert!(!dir.path().join("edited").exists());
}

#[test]
fn test_paths_for_current_image() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "photo.jpg");

    let session = Session::open(dir.path()).unwrap();
    assert_eq!(session.current_path(), Some(dir.path().join("photo.jpg")));
    assert_eq!(
        session.output_path(),
        Some(dir.path().join("edited").join("photo.jpg"))
    );
}

#[test]
fn test_advance_through_list() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "1.jpg");
    touch(&dir, "2.jpg");
    touch(&dir, "3.jpg");

    let mut session = Session::open(dir.path()).unwrap();
    assert_eq!(session.position(), (1, 3));
    assert!(!session.is_finished());

    assert!(session.advance());
    assert_eq!(session.current(), Some("2.jpg"));
    assert_eq!(session.position(), (2, 3));

    assert!(session.advance());
    assert!(!session.advance());
    assert!(session.is_finished());
    assert_eq!(session.current(), None);
    assert_eq!(session.output_path(), None);

    // Advancing past the end stays finished.
    assert!(!session.advance());
    assert!(session.is_finished());
}
