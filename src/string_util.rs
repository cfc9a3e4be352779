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

use std::sync::LazyLock;

use regex::Regex;

use crate::{macros::owned_from_cow_or, validator::helper_constants::PLUS_SIGN};

/// Formatting characters removed before any parse attempt: whitespace,
/// hyphens, parentheses and dots.
static FORMATTING_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-\(\)\.]").unwrap());

/// Removes formatting characters but keeps a leading `+`.
///
/// Returns the input unchanged (without reallocating the pattern result)
/// when there is nothing to strip.
pub fn clean_number(raw: &str) -> String {
    owned_from_cow_or!(FORMATTING_CHARS.replace_all(raw, ""), raw.to_owned())
}

/// Whether the caller supplied an explicit country calling code.
pub fn has_plus_prefix(number: &str) -> bool {
    number.starts_with(PLUS_SIGN)
}

/// Uppercases and trims an ISO-3166 region code supplied by a caller.
pub fn normalize_region(region: &str) -> String {
    region.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use crate::string_util::{clean_number, has_plus_prefix, normalize_region};

    #[test]
    fn test_usage() {
        assert_eq!(clean_number("+91 (987) 654-3210"), "+919876543210");
        assert_eq!(clean_number("987.654.3210"), "9876543210");
        assert_eq!(clean_number("\t9876543210\n"), "9876543210");
        assert_eq!(clean_number("9876543210"), "9876543210");
        assert_eq!(clean_number("not-a-number"), "notanumber");
        assert_eq!(clean_number(""), "");
    }

    #[test]
    fn keeps_plus_and_other_symbols() {
        assert_eq!(clean_number("+1/202/555"), "+1/202/555");
        assert!(has_plus_prefix("+44"));
        assert!(!has_plus_prefix("44+"));
        assert_eq!(normalize_region(" in "), "IN");
    }
}
