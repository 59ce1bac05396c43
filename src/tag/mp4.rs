// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Support for MP4 atom tags.

#![cfg(feature = "mp4")]

use crate::error::{ErrorType, Result};
use crate::tag::{ContainerKind, FieldValue, TagKey};
use mp4ameta::{Data, FreeformIdent};
use std::path::Path;

/// Mean of the freeform atom holding the initial key, as written by
/// iTunes-compatible taggers.
const INITIAL_KEY_MEAN: &str = "com.apple.iTunes";
/// Name of the freeform atom holding the initial key.
const INITIAL_KEY_NAME: &str = "initialkey";

/// iTunes-style atom list of one MP4 file.
pub(crate) struct Mp4Tags {
    /// The underlying tag data.
    data: mp4ameta::Tag,
}

impl Mp4Tags {
    /// Read the MP4 tag from the path.
    pub(crate) fn read(path: &Path) -> Result<Self> {
        let data = mp4ameta::Tag::read_from_path(path)?;
        Ok(Mp4Tags { data })
    }

    /// Get the string value for the tag key.
    ///
    /// Title, artist, comment and grouping live in the well-known `©nam`,
    /// `©ART`, `©cmt` and `©grp` atoms; the initial key has no standard
    /// atom and uses the iTunes freeform convention instead.
    pub(crate) fn get(&self, key: TagKey) -> FieldValue {
        match key {
            TagKey::TrackTitle => FieldValue::from_slot(self.data.title()),
            TagKey::Artist => FieldValue::from_slot(self.data.artist()),
            TagKey::Comment => FieldValue::from_slot(self.data.comment()),
            TagKey::Grouping => FieldValue::from_slot(self.data.grouping()),
            TagKey::InitialKey => {
                let ident = FreeformIdent::new(INITIAL_KEY_MEAN, INITIAL_KEY_NAME);
                let value = self.data.strings_of(&ident).next();
                FieldValue::from_slot(value)
            }
        }
    }

    /// Set the string value for the tag key and persist it to the file.
    pub(crate) fn set(&mut self, path: &Path, key: TagKey, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.data.write_to_path(path)?;
        Ok(())
    }

    /// Apply the value to the in-memory atom list, replacing any existing
    /// data of the target atom.
    fn apply(&mut self, key: TagKey, value: &str) -> Result<()> {
        match key {
            TagKey::TrackTitle => self.data.set_title(value),
            TagKey::Artist => self.data.set_artist(value),
            TagKey::Comment => self.data.set_comment(value),
            TagKey::Grouping => self.data.set_grouping(value),
            TagKey::InitialKey => {
                let ident = FreeformIdent::new(INITIAL_KEY_MEAN, INITIAL_KEY_NAME);
                self.data.set_data(ident, Data::Utf8(value.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mp4_tags() -> Mp4Tags {
        Mp4Tags {
            data: mp4ameta::Tag::default(),
        }
    }

    #[test]
    fn test_grouping_round_trip_in_memory() {
        let mut tags = mp4_tags();

        tags.apply(TagKey::Grouping, "Warmup").unwrap();

        assert_eq!(tags.get(TagKey::Grouping), FieldValue::Text("Warmup".into()));
    }

    #[test]
    fn test_initial_key_uses_freeform_atom() {
        let mut tags = mp4_tags();

        tags.apply(TagKey::InitialKey, "8A").unwrap();

        let ident = FreeformIdent::new(INITIAL_KEY_MEAN, INITIAL_KEY_NAME);
        assert_eq!(tags.data.strings_of(&ident).next(), Some("8A"));
        assert_eq!(tags.get(TagKey::InitialKey), FieldValue::Text("8A".into()));
    }

    #[test]
    fn test_set_data_replaces_previous_key() {
        let mut tags = mp4_tags();

        tags.apply(TagKey::InitialKey, "8A").unwrap();
        tags.apply(TagKey::InitialKey, "12B").unwrap();

        let ident = FreeformIdent::new(INITIAL_KEY_MEAN, INITIAL_KEY_NAME);
        assert_eq!(tags.data.strings_of(&ident).count(), 1);
    }

    #[test]
    fn test_absent_atom_reads_as_empty_text() {
        let tags = mp4_tags();

        assert_eq!(tags.get(TagKey::Comment), FieldValue::Text(String::new()));
    }
}
