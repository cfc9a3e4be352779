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

use std::{fmt::Write, panic};

use log::{error, trace, warn};
use phonenumber::{
    Mode, PhoneNumber, Type,
    country,
    metadata::{DATABASE, Descriptor},
};

use crate::{
    i18n,
    interfaces::NumberingPlan,
    prefix_map::PrefixMap,
    validator::{
        LineType, PhoneNumberFormat,
        errors::{LookupError, ParseError},
        helper_constants::{DEFAULT_LANGUAGE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN},
    },
};

const GEOCODING_EN: &str = include_str!("../../resources/geocoding/en.txt");
const CARRIER_EN: &str = include_str!("../../resources/carrier/en.txt");
const TIME_ZONES: &str = include_str!("../../resources/timezones/map_data.txt");

const TIME_ZONE_SEPARATOR: char = '&';

/// [`NumberingPlan`] backed by the `phonenumber` crate's metadata database,
/// with geocoding, carrier and time zone data from the bundled prefix tables.
#[derive(Debug, Clone)]
pub struct LibPhoneNumberPlan {
    geocoding: PrefixMap,
    carriers: PrefixMap,
    time_zones: PrefixMap,
}

impl Default for LibPhoneNumberPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl LibPhoneNumberPlan {
    pub fn new() -> Self {
        Self::with_prefix_maps(
            load_bundled("geocoding", GEOCODING_EN),
            load_bundled("carrier", CARRIER_EN),
            load_bundled("time zone", TIME_ZONES),
        )
    }

    pub fn with_prefix_maps(geocoding: PrefixMap, carriers: PrefixMap, time_zones: PrefixMap) -> Self {
        Self { geocoding, carriers, time_zones }
    }

    /// Country calling code followed by the national significant number,
    /// the key all prefix tables are indexed by.
    fn e164_digits(number: &PhoneNumber) -> String {
        let mut buf = itoa::Buffer::new();
        let code = buf.format(number.code().value());
        fast_cat::concat_str!(code, &number.national().to_string())
    }

    /// All lengths a national significant number may have for the number's
    /// calling code, across every region sharing that code.
    fn possible_lengths(number: &PhoneNumber) -> Vec<usize> {
        let mut lengths: Vec<usize> = DATABASE
            .by_code(&number.code().value())
            .unwrap_or_default()
            .into_iter()
            .flat_map(|meta| {
                let descriptors = meta.descriptors();
                [
                    Some(descriptors.general()),
                    descriptors.fixed_line(),
                    descriptors.mobile(),
                    descriptors.toll_free(),
                    descriptors.premium_rate(),
                    descriptors.shared_cost(),
                    descriptors.personal_number(),
                    descriptors.voip(),
                    descriptors.pager(),
                    descriptors.uan(),
                    descriptors.voicemail(),
                ]
                .into_iter()
                .flatten()
                .flat_map(descriptor_lengths)
                .collect::<Vec<_>>()
            })
            .collect();
        lengths.sort_unstable();
        lengths.dedup();
        lengths
    }
}

fn descriptor_lengths(descriptor: &Descriptor) -> impl Iterator<Item = usize> + '_ {
    descriptor
        .possible_length()
        .iter()
        .chain(descriptor.possible_local_length())
        .map(|&len| len as usize)
}

fn load_bundled(name: &str, source: &str) -> PrefixMap {
    match PrefixMap::parse(source) {
        Ok(map) => map,
        Err(err) => {
            error!("Bundled {name} data is malformed, lookups will be empty: {err}");
            PrefixMap::default()
        }
    }
}

fn line_type_from(kind: Type) -> LineType {
    match kind {
        Type::FixedLine => LineType::FixedLine,
        Type::Mobile => LineType::Mobile,
        Type::FixedLineOrMobile => LineType::FixedLineOrMobile,
        Type::TollFree => LineType::TollFree,
        Type::PremiumRate => LineType::PremiumRate,
        Type::SharedCost => LineType::SharedCost,
        Type::Voip => LineType::Voip,
        Type::PersonalNumber => LineType::PersonalNumber,
        Type::Pager => LineType::Pager,
        Type::Uan => LineType::Uan,
        Type::Voicemail => LineType::Voicemail,
        _ => LineType::Unknown,
    }
}

fn check_language(language: &str) -> Result<(), LookupError> {
    if language.eq_ignore_ascii_case(DEFAULT_LANGUAGE) {
        Ok(())
    } else {
        Err(LookupError::NotAvailable)
    }
}

impl NumberingPlan for LibPhoneNumberPlan {
    type Number = PhoneNumber;

    fn parse(&self, number: &str, region: Option<&str>) -> Result<PhoneNumber, ParseError> {
        let country = region
            .map(|code| {
                code.parse::<country::Id>()
                    .map_err(|_| ParseError::InvalidRegion(code.to_string()))
            })
            .transpose()?;

        // The parser can panic on some malformed inputs; that only means
        // this interpretation failed.
        match panic::catch_unwind(|| phonenumber::parse(country, number)) {
            Ok(parsed) => Ok(parsed?),
            Err(_) => {
                warn!("Numbering plan parser panicked on {number:?} (region {region:?})");
                Err(ParseError::ParserPanicked)
            }
        }
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn is_possible(&self, number: &PhoneNumber) -> bool {
        let national_length = number.national().to_string().len();
        let lengths = Self::possible_lengths(number);
        if lengths.is_empty() {
            if DATABASE.by_code(&number.code().value()).is_none() {
                return false;
            }
            return (MIN_LENGTH_FOR_NSN..=MAX_LENGTH_FOR_NSN).contains(&national_length);
        }
        lengths.contains(&national_length)
    }

    fn region_code(&self, number: &PhoneNumber) -> Option<String> {
        if let Some(id) = number.country().id() {
            return Some(id.as_ref().to_string());
        }
        // Calling codes owned by a single region resolve even when the
        // national number matches none of its patterns. Non-geographical
        // codes such as +800 are owned by the world region "001".
        match DATABASE.region(&number.code().value()).as_deref() {
            Some([only]) => Some(only.to_string()),
            _ => None,
        }
    }

    fn country_calling_code(&self, number: &PhoneNumber) -> u16 {
        number.code().value()
    }

    fn line_type(&self, number: &PhoneNumber) -> LineType {
        let kind = number.number_type(&DATABASE);
        let line_type = line_type_from(kind);
        trace!("Classified {kind:?} as {line_type}");
        line_type
    }

    fn format(&self, number: &PhoneNumber, format: PhoneNumberFormat) -> Result<String, LookupError> {
        let mode = match format {
            PhoneNumberFormat::E164 => Mode::E164,
            PhoneNumberFormat::International => Mode::International,
            PhoneNumberFormat::National => Mode::National,
        };
        let mut formatted = String::new();
        write!(formatted, "{}", number.format().mode(mode)).map_err(|_| LookupError::FormatFailed)?;
        Ok(formatted)
    }

    fn description(&self, number: &PhoneNumber, language: &str) -> Result<String, LookupError> {
        check_language(language)?;
        if self.line_type(number).is_geographical() {
            // An empty area row means the prefix is known but unnamed.
            match self.geocoding.lookup(&Self::e164_digits(number)) {
                Some(area) if !area.is_empty() => return Ok(area.to_string()),
                _ => {}
            }
        }
        self.region_code(number)
            .as_deref()
            .and_then(i18n::country_name)
            .map(str::to_string)
            .ok_or(LookupError::NotAvailable)
    }

    fn carrier_name(&self, number: &PhoneNumber, language: &str) -> Result<String, LookupError> {
        check_language(language)?;
        if !self.line_type(number).has_carrier() {
            return Err(LookupError::NotAvailable);
        }
        match self.carriers.lookup(&Self::e164_digits(number)) {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(LookupError::NotAvailable),
        }
    }

    fn time_zones(&self, number: &PhoneNumber) -> Result<Vec<String>, LookupError> {
        // Non-geographical numbers only get the zones of their calling code.
        let key = if self.line_type(number).is_geographical() {
            Self::e164_digits(number)
        } else {
            let mut buf = itoa::Buffer::new();
            buf.format(number.code().value()).to_string()
        };
        let zones: Vec<String> = self
            .time_zones
            .lookup(&key)
            .map(|value| {
                value
                    .split(TIME_ZONE_SEPARATOR)
                    .map(str::trim)
                    .filter(|zone| !zone.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        if zones.is_empty() {
            return Err(LookupError::NotAvailable);
        }
        Ok(zones)
    }
}
