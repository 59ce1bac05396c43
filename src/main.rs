// Copyright (c) 2026 The polytag developers
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Main module

use clap::Parser;
use log::LevelFilter;
use polytag::{TagKey, TaggedFile, WriteConfig, WritePolicy};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Files to inspect or modify.
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Key text to write into the comment, grouping and key fields.
    #[arg(short, long)]
    write: Option<String>,
    /// Prepend to the existing comment and grouping instead of overwriting.
    #[arg(long, conflicts_with = "append")]
    prepend: bool,
    /// Append to the existing comment and grouping instead of overwriting.
    #[arg(long)]
    append: bool,
    /// Delimiter used when prepending or appending.
    #[arg(long, default_value = " - ")]
    delimiter: String,
    /// Show debug information.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn log_level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    fn write_config(&self) -> WriteConfig {
        let policy = if self.prepend {
            WritePolicy::Prepend
        } else if self.append {
            WritePolicy::Append
        } else {
            WritePolicy::Overwrite
        };
        WriteConfig {
            comment: policy,
            grouping: policy,
            key: WritePolicy::Overwrite,
            delimiter: self.delimiter.clone(),
        }
    }
}

fn main() {
    let args = Args::parse();
    TermLogger::init(
        args.log_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger initialization failed");

    let config = args.write_config();
    for path in &args.paths {
        let mut file = TaggedFile::resolve(path);
        if let Some(key_text) = &args.write {
            let changed = file.write_fields(key_text, &config);
            println!(
                "{}: comment {}, grouping {}, key {}",
                path.display(),
                if changed.comment { "updated" } else { "unchanged" },
                if changed.grouping { "updated" } else { "unchanged" },
                if changed.key { "updated" } else { "unchanged" },
            );
        } else {
            println!("{} ({:?})", path.display(), file.kind());
            for (label, key) in [
                ("title", TagKey::TrackTitle),
                ("artist", TagKey::Artist),
                ("comment", TagKey::Comment),
                ("grouping", TagKey::Grouping),
                ("key", TagKey::InitialKey),
            ] {
                println!("  {label:>8}: {}", file.get(key));
            }
        }
    }
}
