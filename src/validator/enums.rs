// Copyright (C) 2009 The Libphonenumber Authors
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

use std::fmt;

use serde::{Serialize, Serializer};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The representations a resolved number is rendered in.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without formatting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// Always starts with a `+` followed by the country code, no spaces or symbols.
    E164,
    /// **International format.**
    /// Country code plus spaces for readability.
    International,
    /// **National format.**
    /// Dialled within the number's own country; may include a national prefix.
    National,
}

/// Line-type classification reported in the `type` field.
///
/// The string form of each variant is the wire vocabulary; anything the
/// numbering plan reports outside this set becomes [`LineType::Unknown`].
#[derive(Debug, EnumIter, EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum LineType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Regions (e.g. the USA) where fixed-line and mobile numbers can't be told apart.
    #[strum(serialize = "fixed_or_mobile")]
    FixedLineOrMobile,
    /// Free for the caller; the recipient pays.
    TollFree,
    /// Charged at a higher rate than normal calls.
    PremiumRate,
    /// Cost split between caller and recipient.
    SharedCost,
    /// Voice over IP numbers.
    Voip,
    /// Routed to a person rather than a location or device.
    PersonalNumber,
    /// Paging devices.
    Pager,
    /// Universal Access Numbers.
    Uan,
    /// Voicemail access numbers.
    Voicemail,
    /// The number does not match any known pattern for its region.
    Unknown,
}

impl LineType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, LineType::Mobile | LineType::FixedLineOrMobile)
    }

    pub fn is_toll_free(self) -> bool {
        self == LineType::TollFree
    }

    /// Whether numbers of this type are tied to a place, so area-level
    /// geocoding and time-zone data apply to them.
    pub fn is_geographical(self) -> bool {
        matches!(self, LineType::FixedLine | LineType::FixedLineOrMobile)
    }

    /// Carrier names are only meaningful for numbers that reach a handset.
    pub fn has_carrier(self) -> bool {
        matches!(
            self,
            LineType::Mobile | LineType::FixedLineOrMobile | LineType::Pager
        )
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LineType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The heuristic that produced a parse candidate.
///
/// Variants are listed in the order the resolver attempts them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The cleaned string exactly as given, with no region hint.
    AsIs,
    /// The cleaned string read as a national number of the caller's region.
    WithRegion,
    /// The cleaned string with a `+` prepended, with no region hint.
    WithPlus,
    /// The cleaned string read as a national number of the given region.
    Auto(String),
}

impl Strategy {
    /// `as_is` and `with_plus` only succeed when the input names its own
    /// country code, so a valid result from them ends the search.
    pub fn is_authoritative(&self) -> bool {
        matches!(self, Strategy::AsIs | Strategy::WithPlus)
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Strategy::Auto(_))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::AsIs => f.write_str("as_is"),
            Strategy::WithRegion => f.write_str("with_region"),
            Strategy::WithPlus => f.write_str("with_plus"),
            Strategy::Auto(region) => write!(f, "auto_{region}"),
        }
    }
}

impl Serialize for Strategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::{LineType, Strategy};

    #[test]
    fn line_type_vocabulary() {
        let names: Vec<&str> = LineType::iter().map(LineType::as_str).collect();
        assert_eq!(
            names,
            [
                "fixed_line", "mobile", "fixed_or_mobile", "toll_free", "premium_rate",
                "shared_cost", "voip", "personal_number", "pager", "uan", "voicemail", "unknown",
            ]
        );
        assert_eq!(LineType::from_str("fixed_or_mobile"), Ok(LineType::FixedLineOrMobile));
        assert_eq!(serde_json::to_string(&LineType::TollFree).unwrap(), "\"toll_free\"");
    }

    #[test]
    fn mobile_and_geography() {
        assert!(LineType::FixedLineOrMobile.is_mobile());
        assert!(!LineType::Pager.is_mobile());
        assert!(LineType::Pager.has_carrier());
        assert!(!LineType::Mobile.is_geographical());
        assert!(LineType::FixedLine.is_geographical());
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::AsIs.to_string(), "as_is");
        assert_eq!(Strategy::WithPlus.to_string(), "with_plus");
        assert_eq!(
            serde_json::to_string(&Strategy::Auto("ZA".to_string())).unwrap(),
            "\"auto_ZA\""
        );
    }
}
