// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Support for APEv2 item lists.
//!
//! Musepack and WavPack both store their metadata as an APEv2 tag at the
//! end of the file. APEv2 has no key slot; key writes are always rejected.

use crate::error::{ErrorType, Result};
use crate::tag::{ContainerKind, FieldValue, TagKey};
use lofty::ape::{ApeItem, ApeTag};
use lofty::config::{ParseOptions, WriteOptions};
use lofty::file::AudioFile;
use lofty::musepack::MpcFile;
use lofty::tag::{ItemValue, TagExt};
use lofty::wavpack::WavPackFile;
use std::fs::File;
use std::path::Path;

/// APEv2 item list of one file.
pub(crate) struct ApeTags {
    /// The container kind that resolved to this decoder.
    kind: ContainerKind,
    /// The underlying tag data.
    data: ApeTag,
}

/// Get the APEv2 item key for a tag key.
///
/// Item keys are matched case-insensitively, following common practice.
fn tag_key_to_item(key: TagKey) -> Option<&'static str> {
    match key {
        TagKey::TrackTitle => Some("Title"),
        TagKey::Artist => Some("Artist"),
        TagKey::Comment => Some("Comment"),
        TagKey::Grouping => Some("GROUPING"),
        TagKey::InitialKey => None,
    }
}

impl ApeTags {
    /// Read the APEv2 tag from the path.
    ///
    /// The audio stream is parsed to establish structural validity; a file
    /// without an APEv2 tag resolves to an empty item list and writes will
    /// create the tag on demand.
    pub(crate) fn read(path: &Path, kind: ContainerKind) -> Result<Self> {
        let mut file = File::open(path)?;
        let data = match kind {
            ContainerKind::WavPack => WavPackFile::read_from(&mut file, ParseOptions::new())?
                .ape()
                .cloned(),
            _ => MpcFile::read_from(&mut file, ParseOptions::new())?
                .ape()
                .cloned(),
        };
        Ok(ApeTags {
            kind,
            data: data.unwrap_or_default(),
        })
    }

    /// Get the string value for the tag key.
    pub(crate) fn get(&self, key: TagKey) -> FieldValue {
        let Some(item_key) = tag_key_to_item(key) else {
            log::debug!("{key:?} has no slot in {:?} files", self.kind);
            return FieldValue::Unsupported;
        };
        FieldValue::from_slot(self.data.get(item_key).and_then(|item| {
            match item.value() {
                ItemValue::Text(text) => Some(text.as_str()),
                // Binary and locator items cannot hold field text.
                _ => None,
            }
        }))
    }

    /// Set the string value for the tag key and persist it to the file.
    pub(crate) fn set(&mut self, path: &Path, key: TagKey, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.data.save_to_path(path, WriteOptions::default())?;
        Ok(())
    }

    /// Apply the value to the in-memory item list.
    ///
    /// Items are replaced rather than accumulated, so a slot holds at most
    /// one value after a write.
    fn apply(&mut self, key: TagKey, value: &str) -> Result<()> {
        let Some(item_key) = tag_key_to_item(key) else {
            log::warn!("{:?} metadata does not support the {key:?} tag", self.kind);
            return Err(ErrorType::UnsupportedField {
                field: key,
                kind: self.kind,
            });
        };
        let item = ApeItem::new(item_key.to_string(), ItemValue::Text(value.to_string()))?;
        self.data.insert(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mpc_tags(data: ApeTag) -> ApeTags {
        ApeTags {
            kind: ContainerKind::Musepack,
            data,
        }
    }

    #[test]
    fn test_grouping_round_trip_in_memory() {
        let mut tags = mpc_tags(ApeTag::new());

        tags.apply(TagKey::Grouping, "Peak Time").unwrap();

        assert_eq!(
            tags.get(TagKey::Grouping),
            FieldValue::Text("Peak Time".into())
        );
    }

    #[test]
    fn test_apply_replaces_existing_item() {
        let mut tags = mpc_tags(ApeTag::new());

        tags.apply(TagKey::Grouping, "one").unwrap();
        tags.apply(TagKey::Grouping, "two").unwrap();

        assert_eq!(tags.get(TagKey::Grouping), FieldValue::Text("two".into()));
    }

    #[test]
    fn test_key_is_always_unsupported() {
        let mut tags = mpc_tags(ApeTag::new());

        assert_eq!(tags.get(TagKey::InitialKey), FieldValue::Unsupported);
        assert!(matches!(
            tags.apply(TagKey::InitialKey, "8A"),
            Err(ErrorType::UnsupportedField {
                field: TagKey::InitialKey,
                ..
            })
        ));
    }

    #[test]
    fn test_absent_item_reads_as_empty_text() {
        let tags = mpc_tags(ApeTag::new());

        assert_eq!(tags.get(TagKey::Comment), FieldValue::Text(String::new()));
    }
}
