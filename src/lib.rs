// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Format-polymorphic tag access for audio files.
//!
//! This crate normalizes the heterogeneous tag schemes of common audio
//! container formats (ID3v1/ID3v2, Xiph comments, MP4 atoms, APEv2 items)
//! into a uniform read/write interface for a small set of logical fields:
//! track title, artist, comment, grouping and musical key.
//!
//! The actual byte-level tag parsing is delegated to the [`id3`],
//! [`metaflac`], [`lofty`] and `mp4ameta` crates; this crate contributes
//! the format resolution, the per-format field mappings and the precedence
//! rules that apply when several tag containers coexist in one file.
//!
//! ```no_run
//! use polytag::{FieldValue, TagKey, TaggedFile};
//!
//! let mut file = TaggedFile::resolve("floating_points-nuits_sonores.mp3");
//! if let FieldValue::Text(comment) = file.get(TagKey::Comment) {
//!     println!("comment: {comment}");
//! }
//! file.set(TagKey::InitialKey, "8A")?;
//! # Ok::<(), polytag::ErrorType>(())
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![deny(absolute_paths_not_starting_with_crate)]
#![deny(elided_lifetimes_in_paths)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(macro_use_extern_crate)]
#![deny(meta_variable_misuse)]
#![deny(missing_abi)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(non_ascii_idents)]
#![deny(noop_method_call)]
#![deny(single_use_lifetimes)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(unused_extern_crates)]
#![deny(unused_import_braces)]
#![deny(unused_lifetimes)]
#![deny(unused_macro_rules)]
#![deny(unused_qualifications)]

mod error;
mod policy;
mod resolver;
mod tag;
mod taggedfile;

pub use error::{ErrorType, Result};
pub use policy::{WriteConfig, WritePolicy};
pub use tag::{ContainerKind, FieldValue, TagKey};
pub use taggedfile::{ChangedFields, TaggedFile};
