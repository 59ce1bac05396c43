// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! The [`TaggedFile`] struct represents one audio file's tags.

use crate::error::{ErrorType, Result};
use crate::policy::{WriteConfig, WritePolicy};
use crate::resolver;
use crate::tag::{Container, ContainerKind, FieldValue, TagKey};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Key slots conventionally hold a 3 character key code.
const KEY_TEXT_LENGTH: usize = 3;

/// The fields a composite write actually changed.
///
/// Fields that were skipped (already up to date, unsupported by the
/// format, or failed to persist) stay `false`, which makes partial success
/// visible to batch callers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChangedFields {
    /// Whether the comment field was rewritten.
    pub comment: bool,
    /// Whether the grouping field was rewritten.
    pub grouping: bool,
    /// Whether the key field was rewritten.
    pub key: bool,
}

impl ChangedFields {
    /// Whether no field was changed.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.comment || self.grouping || self.key)
    }
}

/// A handle over one audio file's decoded tag structures.
///
/// Handles are created by [`TaggedFile::resolve`] and exclusively own the
/// decoded data. Resolution failures produce an *invalid* handle rather
/// than an error: reads on it yield [`FieldValue::Invalid`] and writes
/// fail with [`ErrorType::InvalidHandle`]. A handle must not be mutated
/// from two threads at once; distinct handles are independent.
pub struct TaggedFile {
    /// Path of the file.
    path: PathBuf,
    /// The container kind selected during resolution, if any was.
    kind: Option<ContainerKind>,
    /// The decoded tag structures. `None` on an invalid handle.
    container: Option<Container>,
}

impl fmt::Debug for TaggedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedFile")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("valid", &self.is_valid())
            .finish()
    }
}

impl TaggedFile {
    /// Resolve the tags of the file at the given path.
    ///
    /// This never fails. An unrecognized extension, a missing file or a
    /// structurally invalid one produce an invalid handle, and the cause
    /// is logged. Decoder construction is serialized process-wide; the
    /// returned handle can be used without synchronization.
    #[must_use]
    pub fn resolve(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let Some(kind) = path
            .extension()
            .and_then(OsStr::to_str)
            .and_then(resolver::container_kind_for_extension)
        else {
            log::warn!("No tag decoder for {}", path.display());
            return TaggedFile {
                path,
                kind: None,
                container: None,
            };
        };
        match resolver::resolve(&path, kind) {
            Ok((kind, container)) => TaggedFile {
                path,
                kind: Some(kind),
                container: Some(container),
            },
            Err(err) => {
                log::warn!("Failed to resolve {} as {kind:?}: {err}", path.display());
                TaggedFile {
                    path,
                    kind: Some(kind),
                    container: None,
                }
            }
        }
    }

    /// Path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// The container kind the file resolved to.
    ///
    /// `None` when the extension selected no decoder. On the `.oga`
    /// fallback path this is the kind that actually decoded the file.
    #[must_use]
    pub fn kind(&self) -> Option<ContainerKind> {
        self.kind
    }

    /// Whether the file was decoded successfully.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.container.is_some()
    }

    /// Get the string value for the tag key.
    ///
    /// This never fails; inapplicable cases are reported through the
    /// [`FieldValue`] variants.
    #[must_use]
    pub fn get(&self, key: TagKey) -> FieldValue {
        match &self.container {
            Some(container) => container.get(key),
            None => FieldValue::Invalid,
        }
    }

    /// Set the string value for the tag key and persist it to the file.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorType::InvalidHandle`] on an invalid handle,
    /// [`ErrorType::UnsupportedField`] when the container kind has no slot
    /// for the field, and the underlying decoder's error when persisting
    /// fails.
    pub fn set(&mut self, key: TagKey, value: &str) -> Result<()> {
        match &mut self.container {
            Some(container) => container.set(&self.path, key, value),
            None => {
                log::warn!(
                    "Cannot set {key:?} on invalid file handle ({})",
                    self.path.display()
                );
                Err(ErrorType::InvalidHandle)
            }
        }
    }

    /// Write the key text into the comment, grouping and key fields.
    ///
    /// Comment and grouping are combined with their current content
    /// according to the configured [`WritePolicy`]; the key is only
    /// written under the overwrite policy and truncated to its first 3
    /// characters. Fields that are already up to date are not rewritten,
    /// unsupported fields and per-field failures are logged and skipped,
    /// and the remaining fields still proceed.
    pub fn write_fields(&mut self, key_text: &str, config: &WriteConfig) -> ChangedFields {
        let mut changed = ChangedFields::default();
        if !self.is_valid() {
            log::warn!(
                "Cannot write fields to invalid file handle ({})",
                self.path.display()
            );
            return changed;
        }
        changed.comment =
            self.write_with_policy(TagKey::Comment, key_text, config.comment, &config.delimiter);
        changed.grouping = self.write_with_policy(
            TagKey::Grouping,
            key_text,
            config.grouping,
            &config.delimiter,
        );
        if config.key == WritePolicy::Overwrite {
            let truncated: String = key_text.chars().take(KEY_TEXT_LENGTH).collect();
            changed.key =
                self.write_with_policy(TagKey::InitialKey, &truncated, WritePolicy::Overwrite, "");
        }
        changed
    }

    /// Write one field under a policy; returns whether the file changed.
    fn write_with_policy(
        &mut self,
        key: TagKey,
        value: &str,
        policy: WritePolicy,
        delimiter: &str,
    ) -> bool {
        let current = match self.get(key) {
            FieldValue::Text(current) => current,
            FieldValue::Unsupported => {
                log::info!("Skipping {key:?}: not supported by {:?} files", self.kind);
                return false;
            }
            FieldValue::Invalid => return false,
        };
        let Some(target) = policy.compose(&current, value, delimiter) else {
            return false;
        };
        match self.set(key, &target) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to write {key:?} to {}: {err}", self.path.display());
                false
            }
        }
    }
}
