// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Support for the Xiph comment header of Ogg streams.
//!
//! Vorbis and Speex streams share the same comment header; only the codec
//! headers around it differ. The comment uses the same literal `COMMENT`
//! key convention as FLAC files.

use crate::error::{ErrorType, Result};
use crate::tag::{ContainerKind, FieldValue, TagKey};
use lofty::config::{ParseOptions, WriteOptions};
use lofty::file::AudioFile;
use lofty::ogg::{SpeexFile, VorbisComments, VorbisFile};
use lofty::tag::TagExt;
use std::fs::File;
use std::path::Path;

/// The codec whose headers surround the comment header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OggCodec {
    /// Ogg Vorbis.
    Vorbis,
    /// Ogg Speex.
    Speex,
}

/// Xiph comment header of one Ogg stream.
pub(crate) struct OggTags {
    /// The container kind that resolved to this decoder.
    kind: ContainerKind,
    /// The underlying tag data.
    data: VorbisComments,
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

impl OggTags {
    /// Read the comment header from the path.
    ///
    /// The stream is fully parsed so that structurally broken files are
    /// rejected during resolution rather than on first access.
    pub(crate) fn read(path: &Path, codec: OggCodec) -> Result<Self> {
        let mut file = File::open(path)?;
        let (kind, data) = match codec {
            OggCodec::Vorbis => {
                let parsed = VorbisFile::read_from(&mut file, ParseOptions::new())?;
                (ContainerKind::OggVorbis, parsed.vorbis_comments().clone())
            }
            OggCodec::Speex => {
                let parsed = SpeexFile::read_from(&mut file, ParseOptions::new())?;
                (ContainerKind::OggSpeex, parsed.vorbis_comments().clone())
            }
        };
        Ok(OggTags { kind, data })
    }

    /// Get the string value for the tag key.
    pub(crate) fn get(&self, key: TagKey) -> FieldValue {
        let Some(field) = tag_key_to_field(key) else {
            log::debug!("{key:?} has no slot in {:?} files", self.kind);
            return FieldValue::Unsupported;
        };
        FieldValue::from_slot(self.data.get(field))
    }

    /// Set the string value for the tag key and persist it to the file.
    pub(crate) fn set(&mut self, path: &Path, key: TagKey, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.data.save_to_path(path, WriteOptions::default())?;
        Ok(())
    }

    /// Apply the value to the in-memory comment header.
    fn apply(&mut self, key: TagKey, value: &str) -> Result<()> {
        let Some(field) = tag_key_to_field(key) else {
            log::warn!("{:?} files do not support the {key:?} tag", self.kind);
            return Err(ErrorType::UnsupportedField {
                field: key,
                kind: self.kind,
            });
        };
        self.data.insert(field.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vorbis_tags(data: VorbisComments) -> OggTags {
        OggTags {
            kind: ContainerKind::OggVorbis,
            data,
        }
    }

    #[test]
    fn test_comment_round_trip_in_memory() {
        let mut tags = vorbis_tags(VorbisComments::new());

        tags.apply(TagKey::Comment, "8A").unwrap();

        assert_eq!(tags.get(TagKey::Comment), FieldValue::Text("8A".into()));
    }

    #[test]
    fn test_apply_replaces_existing_values() {
        let mut data = VorbisComments::new();
        data.push(String::from("TITLE"), String::from("one"));
        data.push(String::from("TITLE"), String::from("two"));
        let mut tags = vorbis_tags(data);

        tags.apply(TagKey::TrackTitle, "three").unwrap();

        assert_eq!(tags.data.get_all("TITLE").count(), 1);
    }

    #[test]
    fn test_absent_field_reads_as_empty_text() {
        let tags = vorbis_tags(VorbisComments::new());

        assert_eq!(tags.get(TagKey::Artist), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_grouping_and_key_are_unsupported() {
        let mut tags = vorbis_tags(VorbisComments::new());

        assert_eq!(tags.get(TagKey::Grouping), FieldValue::Unsupported);
        assert!(matches!(
            tags.apply(TagKey::Grouping, "Melodic"),
            Err(ErrorType::UnsupportedField { .. })
        ));
    }
}
