// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Resolver behavior: invalid handles, unknown extensions and the `.oga`
//! fallback chain.

use polytag::{ChangedFields, ContainerKind, ErrorType, FieldValue, TagKey, TaggedFile, WriteConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a minimal FLAC stream under an arbitrary file name.
fn write_minimal_flac(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut bytes = Vec::with_capacity(42);
    bytes.extend_from_slice(b"fLaC");
    bytes.extend_from_slice(&[0x80, 0x00, 0x00, 0x22]);
    bytes.extend_from_slice(&[0u8; 34]);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_unknown_extension_yields_invalid_handle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "not audio").unwrap();

    let mut file = TaggedFile::resolve(&path);

    assert!(!file.is_valid());
    assert_eq!(file.kind(), None);
    assert_eq!(file.get(TagKey::Comment), FieldValue::Invalid);
    assert!(matches!(
        file.set(TagKey::Comment, "8A"),
        Err(ErrorType::InvalidHandle)
    ));
}

#[test]
fn test_missing_file_yields_invalid_handle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.mp3");

    let file = TaggedFile::resolve(&path);

    assert!(!file.is_valid());
    assert_eq!(file.kind(), Some(ContainerKind::Mpeg));
    assert_eq!(file.get(TagKey::TrackTitle), FieldValue::Invalid);
}

#[test]
fn test_corrupt_file_of_recognized_extension_is_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.flac");
    fs::write(&path, "definitely not a flac stream").unwrap();

    let mut file = TaggedFile::resolve(&path);

    assert!(!file.is_valid());
    assert_eq!(file.kind(), Some(ContainerKind::Flac));
    assert_eq!(file.get(TagKey::Comment), FieldValue::Invalid);
    assert!(matches!(
        file.set(TagKey::Comment, "8A"),
        Err(ErrorType::InvalidHandle)
    ));
}

#[test]
fn test_composite_write_on_invalid_handle_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.spx");
    fs::write(&path, "not an ogg stream").unwrap();
    let bytes_before = fs::read(&path).unwrap();

    let mut file = TaggedFile::resolve(&path);
    let changed = file.write_fields("8A", &WriteConfig::default());

    assert_eq!(changed, ChangedFields::default());
    assert_eq!(fs::read(&path).unwrap(), bytes_before);
}

#[test]
fn test_oga_flac_candidate_accepts_flac_stream() {
    let dir = TempDir::new().unwrap();
    let path = write_minimal_flac(&dir, "stream.oga");

    let mut file = TaggedFile::resolve(&path);

    assert!(file.is_valid());
    assert_eq!(file.kind(), Some(ContainerKind::OggFlac));
    file.set(TagKey::Comment, "8A").unwrap();
    assert_eq!(
        TaggedFile::resolve(&path).get(TagKey::Comment),
        FieldValue::Text("8A".into())
    );
}

#[test]
fn test_oga_exhausting_both_candidates_is_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("neither.oga");
    fs::write(&path, "neither flac nor vorbis").unwrap();

    let file = TaggedFile::resolve(&path);

    assert!(!file.is_valid());
    assert_eq!(file.kind(), Some(ContainerKind::OggFlac));
}

#[test]
fn test_resolution_is_safe_under_concurrent_invocation() {
    let dir = TempDir::new().unwrap();
    let paths: Vec<PathBuf> = (0..8)
        .map(|i| write_minimal_flac(&dir, &format!("file{i}.flac")))
        .collect();

    std::thread::scope(|scope| {
        for path in &paths {
            scope.spawn(move || {
                let file = TaggedFile::resolve(path);
                assert!(file.is_valid());
            });
        }
    });
}
