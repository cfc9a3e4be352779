// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;

use log::trace;

use crate::validator::errors::PrefixFileError;

const MAX_LINE_LENGTH: usize = 2 * 1024;

/// A `prefix|value` table keyed by leading E.164 digits (country calling
/// code first, no `+`), queried by longest matching prefix.
///
/// The text format is the one libphonenumber ships its geocoding, carrier
/// and time zone data in: one entry per line, `#` starts a comment line.
#[derive(Debug, Default, Clone)]
pub struct PrefixMap {
    entries: BTreeMap<u64, String>,
    /// Distinct prefix lengths present, longest first.
    lengths: Vec<usize>,
}

impl PrefixMap {
    pub fn parse(source: &str) -> Result<Self, PrefixFileError> {
        let mut entries = BTreeMap::new();
        let mut lengths = Vec::new();

        for (index, raw_line) in source.lines().enumerate() {
            let line_num = index + 1;
            if raw_line.len() > MAX_LINE_LENGTH {
                return Err(PrefixFileError::LineTooLong { line_num, max: MAX_LINE_LENGTH });
            }

            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (prefix_str, value) = line
                .split_once('|')
                .ok_or(PrefixFileError::MissingSeparator { line_num })?;
            if prefix_str.is_empty() {
                continue;
            }
            let prefix = prefix_str.parse::<u64>().map_err(|source| {
                PrefixFileError::PrefixParseError {
                    line_num,
                    prefix: prefix_str.to_string(),
                    source,
                }
            })?;

            if !lengths.contains(&prefix_str.len()) {
                lengths.push(prefix_str.len());
            }
            entries.insert(prefix, value.to_string());
        }

        lengths.sort_unstable_by(|a, b| b.cmp(a));
        trace!("Loaded {} prefixes with lengths {:?}", entries.len(), lengths);
        Ok(Self { entries, lengths })
    }

    /// Value of the longest prefix of `digits` present in the table.
    ///
    /// `digits` must be plain ASCII digits; anything else never matches.
    pub fn lookup(&self, digits: &str) -> Option<&str> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.lengths
            .iter()
            .filter(|&&len| len <= digits.len())
            .find_map(|&len| {
                let prefix = digits[..len].parse::<u64>().ok()?;
                self.entries.get(&prefix).map(String::as_str)
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
