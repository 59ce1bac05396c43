// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Tags and tag-related functions.

pub(crate) mod ape;
pub(crate) mod flac;
pub(crate) mod id3;
#[cfg(feature = "mp4")]
pub(crate) mod mp4;
pub(crate) mod ogg;

use crate::error::Result;
use std::path::Path;

/// A tag key describes the kind of information in a generic, format-independent way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKey {
    /// Track Title.
    TrackTitle,
    /// Track Artist Name(s).
    Artist,
    /// Comment.
    Comment,
    /// Content Group.
    Grouping,
    /// Initial key of the track.
    InitialKey,
}

/// The container format of an audio file, as selected by its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// MPEG audio carrying ID3v1 and/or ID3v2 tags.
    Mpeg,
    /// RIFF-AIFF audio with an embedded ID3v2 chunk.
    Aiff,
    /// RIFF-WAV audio with an embedded ID3v2 chunk.
    Wav,
    /// TrueAudio with prepended ID3 tags.
    TrueAudio,
    /// Native FLAC with a Xiph comment block.
    Flac,
    /// Ogg Vorbis with a Xiph comment header.
    OggVorbis,
    /// FLAC-in-Ogg; falls back to Ogg Vorbis when the FLAC candidate is rejected.
    OggFlac,
    /// Ogg Speex with a Xiph comment header.
    OggSpeex,
    /// Musepack with an APEv2 item list.
    Musepack,
    /// WavPack with an APEv2 item list.
    WavPack,
    /// MP4 with an iTunes-style atom list.
    #[cfg(feature = "mp4")]
    Mp4,
}

/// Outcome of reading a logical field.
///
/// Reads never fail. A field that cannot be produced is reported as one of
/// the two "not applicable" cases, which are kept distinguishable so that
/// callers can tell an unsupported field in a valid file apart from a file
/// that failed to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The container has a slot for this field. The contained string may be
    /// empty when the slot exists but holds no value.
    Text(String),
    /// The container kind has no slot for this field.
    Unsupported,
    /// The file handle is invalid.
    Invalid,
}

impl FieldValue {
    /// Returns the field text, if the field was applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Unsupported | FieldValue::Invalid => None,
        }
    }

    /// Build a value from a slot lookup, mapping an absent value to empty text.
    pub(crate) fn from_slot(value: Option<&str>) -> Self {
        FieldValue::Text(value.unwrap_or_default().to_owned())
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Unsupported => f.write_str("(not applicable)"),
            FieldValue::Invalid => f.write_str("(invalid file)"),
        }
    }
}

/// One decoded tag scheme, closed over all supported container kinds.
///
/// Field access dispatches on the variant; each variant's module owns the
/// mapping from [`TagKey`] to its format-specific slot names.
pub(crate) enum Container {
    /// ID3v1 and/or ID3v2 tags (MPEG, AIFF, WAV, TrueAudio).
    Id3(id3::Id3Tags),
    /// Native FLAC Xiph comment block.
    Flac(flac::FlacTags),
    /// Xiph comment header of an Ogg stream (Vorbis, Speex).
    Ogg(ogg::OggTags),
    /// APEv2 item list (Musepack, WavPack).
    Ape(ape::ApeTags),
    /// MP4 atom list.
    #[cfg(feature = "mp4")]
    Mp4(mp4::Mp4Tags),
}

impl Container {
    /// Get the string value for the tag key.
    pub(crate) fn get(&self, key: TagKey) -> FieldValue {
        match self {
            Container::Id3(tags) => tags.get(key),
            Container::Flac(tags) => tags.get(key),
            Container::Ogg(tags) => tags.get(key),
            Container::Ape(tags) => tags.get(key),
            #[cfg(feature = "mp4")]
            Container::Mp4(tags) => tags.get(key),
        }
    }

    /// Set the string value for the tag key and persist it to the file.
    pub(crate) fn set(&mut self, path: &Path, key: TagKey, value: &str) -> Result<()> {
        match self {
            Container::Id3(tags) => tags.set(path, key, value),
            Container::Flac(tags) => tags.set(path, key, value),
            Container::Ogg(tags) => tags.set(path, key, value),
            Container::Ape(tags) => tags.set(path, key, value),
            #[cfg(feature = "mp4")]
            Container::Mp4(tags) => tags.set(path, key, value),
        }
    }
}
