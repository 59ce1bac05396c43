// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Support for FLAC tags.
//!
//! The comment is read and written under the literal `COMMENT` Xiph key.
//! Some taggers store free text under `DESCRIPTION` instead; that field is
//! deliberately not aliased to the comment here, so a file carrying only a
//! description reads as having an empty comment.

use crate::error::{ErrorType, Result};
use crate::tag::{ContainerKind, FieldValue, TagKey};
use std::path::Path;

/// Xiph comment block of a native FLAC file.
pub(crate) struct FlacTags {
    /// The container kind that resolved to this decoder.
    kind: ContainerKind,
    /// The underlying tag data.
    data: metaflac::Tag,
}

/// Get the Xiph field name for a tag key.
fn tag_key_to_field(key: TagKey) -> Option<&'static str> {
    match key {
        TagKey::TrackTitle => Some("TITLE"),
        TagKey::Artist => Some("ARTIST"),
        TagKey::Comment => Some("COMMENT"),
        TagKey::Grouping | TagKey::InitialKey => None,
    }
}

impl FlacTags {
    /// Read the FLAC tag from the path.
    pub(crate) fn read(path: &Path, kind: ContainerKind) -> Result<Self> {
        let data = metaflac::Tag::read_from_path(path)?;
        Ok(FlacTags { kind, data })
    }

    /// Get the string value for the tag key.
    pub(crate) fn get(&self, key: TagKey) -> FieldValue {
        let Some(field) = tag_key_to_field(key) else {
            log::debug!("{key:?} has no slot in {:?} files", self.kind);
            return FieldValue::Unsupported;
        };
        FieldValue::from_slot(
            self.data
                .get_vorbis(field)
                .and_then(|mut values| values.next()),
        )
    }

    /// Set the string value for the tag key and persist it to the file.
    pub(crate) fn set(&mut self, path: &Path, key: TagKey, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.data.write_to_path(path)?;
        Ok(())
    }

    /// Apply the value to the in-memory Xiph comment block.
    fn apply(&mut self, key: TagKey, value: &str) -> Result<()> {
        let Some(field) = tag_key_to_field(key) else {
            log::warn!("{:?} files do not support the {key:?} tag", self.kind);
            return Err(ErrorType::UnsupportedField {
                field: key,
                kind: self.kind,
            });
        };
        self.data.set_vorbis(field, vec![value]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flac_tags(data: metaflac::Tag) -> FlacTags {
        FlacTags {
            kind: ContainerKind::Flac,
            data,
        }
    }

    #[test]
    fn test_description_is_not_aliased_to_comment() {
        let mut data = metaflac::Tag::new();
        data.set_vorbis("DESCRIPTION", vec!["free text"]);
        let tags = flac_tags(data);

        assert_eq!(tags.get(TagKey::Comment), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_comment_is_read_from_comment_field() {
        let mut data = metaflac::Tag::new();
        data.set_vorbis("COMMENT", vec!["8A"]);
        data.set_vorbis("DESCRIPTION", vec!["free text"]);
        let tags = flac_tags(data);

        assert_eq!(tags.get(TagKey::Comment), FieldValue::Text("8A".into()));
    }

    #[test]
    fn test_apply_comment_replaces_value() {
        let mut tags = flac_tags(metaflac::Tag::new());

        tags.apply(TagKey::Comment, "first").unwrap();
        tags.apply(TagKey::Comment, "second").unwrap();

        let values: Vec<&str> = tags.data.get_vorbis("COMMENT").unwrap().collect();
        assert_eq!(values, vec!["second"]);
    }

    #[test]
    fn test_grouping_and_key_are_unsupported() {
        let mut tags = flac_tags(metaflac::Tag::new());

        assert_eq!(tags.get(TagKey::Grouping), FieldValue::Unsupported);
        assert_eq!(tags.get(TagKey::InitialKey), FieldValue::Unsupported);
        assert!(matches!(
            tags.apply(TagKey::InitialKey, "8A"),
            Err(ErrorType::UnsupportedField { .. })
        ));
    }

    #[test]
    fn test_multiple_values_take_the_first() {
        let mut data = metaflac::Tag::new();
        data.set_vorbis("ARTIST", vec!["First", "Second"]);
        let tags = flac_tags(data);

        assert_eq!(tags.get(TagKey::Artist), FieldValue::Text("First".into()));
    }
}
