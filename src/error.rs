// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Error and result types.

use crate::tag::{ContainerKind, TagKey};
use std::io;
use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
pub enum ErrorType {
    /// I/O Error.
    #[error("Input/Output error ({:?})", .0)]
    Io(#[from] io::Error),
    /// A write was attempted on a handle whose file failed to resolve.
    #[error("File handle is invalid")]
    InvalidHandle,
    /// The logical field has no slot in the file's container format.
    ///
    /// This is a non-fatal partial failure: other fields of the same file
    /// may still be written.
    #[error("{field:?} has no slot in {kind:?} files")]
    UnsupportedField {
        /// The field that was written.
        field: TagKey,
        /// The container kind of the target file.
        kind: ContainerKind,
    },
    /// Errors raised by the [`id3`] crate.
    #[error("Failed to read or write ID3 tag")]
    Id3(#[from] id3::Error),
    /// Errors raised by the [`metaflac`] crate.
    #[error("Failed to read or write FLAC tag")]
    Flac(#[from] metaflac::Error),
    /// Errors raised by the [`lofty`] crate.
    #[error("Failed to read or write Ogg or APE tag")]
    Lofty(#[from] lofty::error::LoftyError),
    /// Errors raised by the `mp4ameta` crate.
    #[cfg(feature = "mp4")]
    #[error("Failed to read or write MP4 tag")]
    Mp4(#[from] mp4ameta::Error),
}

/// Convenience type.
pub type Result<T> = std::result::Result<T, ErrorType>;
