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

use std::num::ParseIntError;

use thiserror::Error;

/// Why a single parse attempt produced no number.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid region code: {0}")]
    InvalidRegion(String),
    #[error("Not a number: {0}")]
    NotANumber(#[from] phonenumber::ParseError),
    #[error("Numbering plan parser panicked")]
    ParserPanicked,
}

/// An enrichment lookup that has no answer for the given number.
///
/// The enricher consumes these and maps them to `null` fields; they never
/// reach the response boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No data available for this number")]
    NotAvailable,
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
    #[error("Could not format number")]
    FormatFailed,
}

/// A malformed line in a bundled `prefix|value` resource table.
#[derive(Debug, PartialEq, Error)]
pub enum PrefixFileError {
    #[error("Line {line_num} is too long (max {max} bytes)")]
    LineTooLong { line_num: usize, max: usize },
    #[error("Line {line_num} has no '|' separator")]
    MissingSeparator { line_num: usize },
    #[error("Failed to parse prefix '{prefix}' on line {line_num}: {source}")]
    PrefixParseError {
        line_num: usize,
        prefix: String,
        #[source]
        source: ParseIntError,
    },
}
