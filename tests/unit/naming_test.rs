use std::fs;

use assert_matches::assert_matches;
use buster::bust::digest::digest_bytes;
use buster::{bust, plan, BustConfig, BustError};
use tempfile::tempdir;

#[test]
fn test_name_tracks_content_not_path() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    fs::write(a.path().join("app.css"), b"body{}").unwrap();
    fs::write(b.path().join("app.css"), b"body{}").unwrap();

    let first = plan(&BustConfig::new(a.path().join("app.css"))).unwrap();
    let second = plan(&BustConfig::new(b.path().join("app.css"))).unwrap();

    assert_eq!(first.derived.file_name, second.derived.file_name);
    assert_ne!(first.derived.path, second.derived.path);
    assert_eq!(first.derived.digest, digest_bytes(b"body{}"));
}

#[test]
fn test_prefix_is_ignored_with_no_prefix() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("bundle.js");
    fs::write(&file, b"let x = 1;").unwrap();
    let digest = digest_bytes(b"let x = 1;");

    for prefix in ["", "app", "bundle"] {
        let config = BustConfig::new(&file).with_prefix(prefix).with_no_prefix(true);
        let planned = plan(&config).unwrap();
        assert_eq!(planned.derived.file_name, format!("{}.js", digest));
    }
}

#[test]
fn test_dotfile_and_trailing_letters() {
    let tmp = tempdir().unwrap();
    let dotfile = tmp.path().join(".htaccess");
    let lib = tmp.path().join("libbanana.a");
    fs::write(&dotfile, b"").unwrap();
    fs::write(&lib, b"").unwrap();
    let empty = digest_bytes(b"");

    let planned = plan(&BustConfig::new(&dotfile)).unwrap();
    assert_eq!(planned.source.base_name, "");
    assert_eq!(planned.derived.file_name, format!("-{}.htaccess", empty));

    let planned = plan(&BustConfig::new(&lib)).unwrap();
    assert_eq!(planned.derived.file_name, format!("libbanana-{}.a", empty));
}

#[test]
fn test_copy_matches_source_bytes() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("font.woff2");
    let payload: Vec<u8> = (0..50_000u32).map(|i| (i * 31 % 251) as u8).collect();
    fs::write(&file, &payload).unwrap();

    let outcome = bust(&BustConfig::new(&file).with_prefix("f")).unwrap();
    assert_eq!(outcome.bytes_written, payload.len() as u64);
    assert_eq!(fs::read(outcome.path()).unwrap(), payload);
    assert!(outcome.file_name().starts_with("f-"));
}

#[test]
fn test_errors_stop_before_copying() {
    let tmp = tempdir().unwrap();

    assert_matches!(bust(&BustConfig::new("")), Err(BustError::MissingInput));
    assert_matches!(
        bust(&BustConfig::new(tmp.path().join("absent.txt"))),
        Err(BustError::NotFound { .. })
    );
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}
