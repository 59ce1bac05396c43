// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Support for ID3 tags.
//!
//! MPEG, AIFF, WAV and TrueAudio files are all hosted here: they share the
//! ID3v2 frame layout and differ only in how the tag is embedded in the
//! file. MPEG and TrueAudio may additionally carry a legacy ID3v1 tag,
//! which is read when no ID3v2 tag exists but is never written.

use crate::error::{ErrorType, Result};
use crate::tag::{ContainerKind, FieldValue, TagKey};
use id3::frame::Comment;
use id3::{Frame, TagLike};
use std::path::Path;

/// Language code written into normalized comment frames.
const COMMENT_LANGUAGE: &str = "eng";

/// ID3v1 and/or ID3v2 tags of one file.
#[derive(Debug)]
pub(crate) struct Id3Tags {
    /// The container kind hosting the tags.
    kind: ContainerKind,
    /// The ID3v2 tag, if the file carries one.
    v2: Option<id3::Tag>,
    /// The ID3v1 tag, if the file carries one.
    v1: Option<id3::v1::Tag>,
}

/// Map a read result to `None` when the file simply carries no tag.
///
/// Any other error indicates a structurally broken file and is propagated.
fn absent_on_no_tag<T>(result: std::result::Result<T, id3::Error>) -> Result<Option<T>> {
    match result {
        Ok(tag) => Ok(Some(tag)),
        Err(err) if matches!(err.kind, id3::ErrorKind::NoTag) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Get the ID3v2 frame ID for a tag key.
///
/// The comment has no entry here; it lives in `COMM` frames which carry a
/// description and a language and are handled separately.
fn tag_key_to_frame(key: TagKey) -> Option<&'static str> {
    match key {
        TagKey::TrackTitle => Some("TIT2"),
        TagKey::Artist => Some("TPE1"),
        TagKey::Comment => None,
        TagKey::Grouping => Some("TIT1"),
        TagKey::InitialKey => Some("TKEY"),
    }
}

impl Id3Tags {
    /// Read the ID3 tags from the path.
    ///
    /// A file without any ID3 tag is not an error; both tag slots are left
    /// empty and writes will create an ID3v2 tag on demand.
    pub(crate) fn read(path: &Path, kind: ContainerKind) -> Result<Self> {
        let v2 = match kind {
            ContainerKind::Aiff => absent_on_no_tag(id3::Tag::read_from_aiff_path(path))?,
            ContainerKind::Wav => absent_on_no_tag(id3::Tag::read_from_wav_path(path))?,
            _ => absent_on_no_tag(id3::Tag::read_from_path(path))?,
        };
        let v1 = match kind {
            ContainerKind::Mpeg | ContainerKind::TrueAudio => {
                absent_on_no_tag(id3::v1::Tag::read_from_path(path))?
            }
            _ => None,
        };
        Ok(Id3Tags { kind, v2, v1 })
    }

    /// Whether grouping and key have a representable slot in this file.
    ///
    /// ID3v1 has no such fields, and TrueAudio files are limited to the
    /// title/artist/comment subset.
    fn supports_grouping_and_key(&self) -> bool {
        self.kind != ContainerKind::TrueAudio && self.v2.is_some()
    }

    /// First comment text of an ID3v2 tag.
    ///
    /// Frames with an empty description take precedence; they are the shape
    /// most players write and the one [`Id3Tags::set`] normalizes to.
    fn v2_comment(tag: &id3::Tag) -> Option<&str> {
        tag.comments()
            .find(|comment| comment.description.is_empty())
            .or_else(|| tag.comments().next())
            .map(|comment| comment.text.as_str())
    }

    /// Get the string value for the tag key.
    pub(crate) fn get(&self, key: TagKey) -> FieldValue {
        if matches!(key, TagKey::Grouping | TagKey::InitialKey) && !self.supports_grouping_and_key()
        {
            log::debug!("{key:?} has no slot in this {:?} file", self.kind);
            return FieldValue::Unsupported;
        }
        if let Some(tag) = &self.v2 {
            return match key {
                TagKey::Comment => FieldValue::from_slot(Self::v2_comment(tag)),
                key => {
                    let frame_id =
                        tag_key_to_frame(key).expect("all non-comment keys map to a frame");
                    FieldValue::from_slot(
                        tag.get(frame_id).and_then(|frame| frame.content().text()),
                    )
                }
            };
        }
        if let Some(tag) = &self.v1 {
            return match key {
                TagKey::TrackTitle => FieldValue::Text(tag.title.clone()),
                TagKey::Artist => FieldValue::Text(tag.artist.clone()),
                TagKey::Comment => FieldValue::Text(tag.comment.clone()),
                TagKey::Grouping | TagKey::InitialKey => unreachable!(),
            };
        }
        FieldValue::Text(String::new())
    }

    /// Set the string value for the tag key and persist it to the file.
    pub(crate) fn set(&mut self, path: &Path, key: TagKey, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.persist(path)
    }

    /// Apply the value to the in-memory ID3v2 tag.
    ///
    /// Creates the ID3v2 tag when the file has none, except for grouping
    /// and key on ID3v1-only or TrueAudio files. ID3v1 data is never
    /// modified.
    fn apply(&mut self, key: TagKey, value: &str) -> Result<()> {
        if matches!(key, TagKey::Grouping | TagKey::InitialKey) {
            if self.kind == ContainerKind::TrueAudio {
                log::warn!("{:?} files do not support the {key:?} tag", self.kind);
                return Err(ErrorType::UnsupportedField {
                    field: key,
                    kind: self.kind,
                });
            }
            if self.v2.is_none() && self.v1.is_some() {
                log::warn!("ID3v1 does not support the {key:?} tag");
                return Err(ErrorType::UnsupportedField {
                    field: key,
                    kind: self.kind,
                });
            }
        }

        let tag = self.v2.get_or_insert_with(id3::Tag::new);
        match key {
            TagKey::Comment => {
                // Replace every comment frame with an empty description by
                // one normalized frame; consumers expect the empty
                // description and a fixed language code. Frames with a
                // non-empty description belong to other applications and
                // are left alone.
                tag.remove_comment(Some(""), None);
                tag.add_frame(Comment {
                    lang: COMMENT_LANGUAGE.to_string(),
                    description: String::new(),
                    text: value.to_string(),
                });
            }
            key => {
                let frame_id = tag_key_to_frame(key).expect("all non-comment keys map to a frame");
                // Remove-then-add keeps at most one frame per slot, no
                // matter how many duplicates the file arrived with.
                tag.remove(frame_id);
                tag.add_frame(Frame::text(frame_id, value));
            }
        }
        Ok(())
    }

    /// Write the ID3v2 tag back to the file.
    fn persist(&mut self, path: &Path) -> Result<()> {
        let Some(tag) = &self.v2 else {
            return Ok(());
        };
        match self.kind {
            ContainerKind::Aiff => tag.write_to_aiff_path(path, tag.version())?,
            ContainerKind::Wav => tag.write_to_wav_path(path, tag.version())?,
            _ => tag.write_to_path(path, tag.version())?,
        }
        Ok(())
    }
}
