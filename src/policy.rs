// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Write policies for composite field updates.

use serde::{Deserialize, Serialize};

/// How a new value is combined with a field's current content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicy {
    /// Replace the current value.
    #[default]
    Overwrite,
    /// Put the new value in front of the current one, joined by the delimiter.
    Prepend,
    /// Put the new value behind the current one, joined by the delimiter.
    Append,
}

impl WritePolicy {
    /// Compute the value to write, given the field's current content.
    ///
    /// Returns `None` when the field already satisfies the policy: the
    /// current value equals the new one (overwrite), or already starts or
    /// ends with it (prepend/append). Re-applying the same update is then
    /// a no-op and no write should be issued.
    #[must_use]
    pub fn compose(self, current: &str, value: &str, delimiter: &str) -> Option<String> {
        match self {
            WritePolicy::Overwrite => (current != value).then(|| value.to_owned()),
            WritePolicy::Prepend => {
                (!current.starts_with(value)).then(|| format!("{value}{delimiter}{current}"))
            }
            WritePolicy::Append => {
                (!current.ends_with(value)).then(|| format!("{current}{delimiter}{value}"))
            }
        }
    }
}

/// Write policies and delimiter for a composite field update.
///
/// This is consumed from the embedding application's preferences. The key
/// field only supports [`WritePolicy::Overwrite`]; any other policy leaves
/// the key untouched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WriteConfig {
    /// Policy for the comment field.
    pub comment: WritePolicy,
    /// Policy for the grouping field.
    pub grouping: WritePolicy,
    /// Policy for the key field.
    pub key: WritePolicy,
    /// Delimiter between the new value and the existing content when
    /// prepending or appending.
    pub delimiter: String,
}

impl Default for WriteConfig {
    fn default() -> Self {
        WriteConfig {
            comment: WritePolicy::Overwrite,
            grouping: WritePolicy::Overwrite,
            key: WritePolicy::Overwrite,
            delimiter: String::from(" - "),
        }
    }
}
