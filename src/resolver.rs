// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Format resolution.
//!
//! The file extension is the sole format-selection hint; there is no
//! content sniffing for unmapped extensions. `.oga` is the one ambiguous
//! case and gets a two-candidate chain: FLAC first, then Ogg Vorbis.

use crate::error::Result;
use crate::tag::ape::ApeTags;
use crate::tag::flac::FlacTags;
use crate::tag::id3::Id3Tags;
#[cfg(feature = "mp4")]
use crate::tag::mp4::Mp4Tags;
use crate::tag::ogg::{OggCodec, OggTags};
use crate::tag::{Container, ContainerKind};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Serializes decoder selection and construction process-wide.
///
/// Held only until structural validity is determined, never during field
/// access. Field operations on distinct resolved handles run unlocked.
static CONSTRUCTION_LOCK: Mutex<()> = Mutex::new(());

/// Get the container kind for a file extension.
///
/// The lookup is case-insensitive. Extensions without an entry (among them
/// `wma`/`asf`, for which no tag decoder is available, and the MP4 family
/// when the `mp4` feature is disabled) select no decoder at all.
pub(crate) fn container_kind_for_extension(extension: &str) -> Option<ContainerKind> {
    match extension.to_ascii_lowercase().as_str() {
        "mp3" => Some(ContainerKind::Mpeg),
        "aif" | "aiff" => Some(ContainerKind::Aiff),
        "wav" => Some(ContainerKind::Wav),
        "ogg" => Some(ContainerKind::OggVorbis),
        "oga" => Some(ContainerKind::OggFlac),
        "spx" => Some(ContainerKind::OggSpeex),
        "flac" => Some(ContainerKind::Flac),
        "mpc" => Some(ContainerKind::Musepack),
        "wv" => Some(ContainerKind::WavPack),
        "tta" => Some(ContainerKind::TrueAudio),
        #[cfg(feature = "mp4")]
        "m4a" | "m4b" | "m4p" | "mp4" | "3g2" => Some(ContainerKind::Mp4),
        _ => None,
    }
}

/// Construct the tag decoder for a file of the given kind.
///
/// Returns the kind that actually decoded the file, which differs from the
/// requested one only on the `.oga` fallback path.
pub(crate) fn resolve(path: &Path, kind: ContainerKind) -> Result<(ContainerKind, Container)> {
    let _guard = CONSTRUCTION_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    match kind {
        ContainerKind::Mpeg
        | ContainerKind::Aiff
        | ContainerKind::Wav
        | ContainerKind::TrueAudio => {
            Id3Tags::read(path, kind).map(|tags| (kind, Container::Id3(tags)))
        }
        ContainerKind::Flac => {
            FlacTags::read(path, kind).map(|tags| (kind, Container::Flac(tags)))
        }
        ContainerKind::OggFlac => match FlacTags::read(path, kind) {
            Ok(tags) => Ok((kind, Container::Flac(tags))),
            Err(err) => {
                log::debug!(
                    "FLAC candidate rejected for {} ({err}), trying Ogg Vorbis",
                    path.display()
                );
                OggTags::read(path, OggCodec::Vorbis)
                    .map(|tags| (ContainerKind::OggVorbis, Container::Ogg(tags)))
            }
        },
        ContainerKind::OggVorbis => {
            OggTags::read(path, OggCodec::Vorbis).map(|tags| (kind, Container::Ogg(tags)))
        }
        ContainerKind::OggSpeex => {
            OggTags::read(path, OggCodec::Speex).map(|tags| (kind, Container::Ogg(tags)))
        }
        ContainerKind::Musepack | ContainerKind::WavPack => {
            ApeTags::read(path, kind).map(|tags| (kind, Container::Ape(tags)))
        }
        #[cfg(feature = "mp4")]
        ContainerKind::Mp4 => Mp4Tags::read(path).map(|tags| (kind, Container::Mp4(tags))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        assert_eq!(
            container_kind_for_extension("MP3"),
            Some(ContainerKind::Mpeg)
        );
        assert_eq!(
            container_kind_for_extension("FlAc"),
            Some(ContainerKind::Flac)
        );
    }

    #[test]
    fn test_every_supported_extension_maps_to_its_kind() {
        let expectations = [
            ("mp3", ContainerKind::Mpeg),
            ("aif", ContainerKind::Aiff),
            ("aiff", ContainerKind::Aiff),
            ("wav", ContainerKind::Wav),
            ("ogg", ContainerKind::OggVorbis),
            ("oga", ContainerKind::OggFlac),
            ("spx", ContainerKind::OggSpeex),
            ("flac", ContainerKind::Flac),
            ("mpc", ContainerKind::Musepack),
            ("wv", ContainerKind::WavPack),
            ("tta", ContainerKind::TrueAudio),
        ];
        for (extension, kind) in expectations {
            assert_eq!(container_kind_for_extension(extension), Some(kind));
        }
    }

    #[cfg(feature = "mp4")]
    #[test]
    fn test_mp4_extensions_map_to_mp4() {
        for extension in ["m4a", "m4b", "m4p", "mp4", "3g2"] {
            assert_eq!(
                container_kind_for_extension(extension),
                Some(ContainerKind::Mp4)
            );
        }
    }

    #[test]
    fn test_unmapped_extensions_select_no_decoder() {
        assert_eq!(container_kind_for_extension("wma"), None);
        assert_eq!(container_kind_for_extension("asf"), None);
        assert_eq!(container_kind_for_extension("txt"), None);
    }
}
