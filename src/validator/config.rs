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

use serde::{Deserialize, Serialize};

use super::helper_constants::{
    AUTO_DETECT_MIN_LENGTH, AUTO_DETECT_REGIONS, DEFAULT_HOME_COUNTRY, DEFAULT_LANGUAGE,
    DEFAULT_REGION,
};
use crate::string_util::normalize_region;

/// Settings for a [`PhoneValidator`](super::PhoneValidator).
///
/// Any field missing from a deserialised document takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Region assumed for national-format input.
    pub default_region: String,
    /// Region numbers are compared against for the domestic flag.
    pub home_country: String,
    /// Regions tried, in order, for long numbers without a country code.
    pub auto_detect_regions: Vec<String>,
    /// Minimum cleaned length (in characters) for the auto-detection sweep.
    pub auto_detect_min_length: usize,
    /// Language of geocoding and carrier names.
    pub language: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_region: DEFAULT_REGION.to_string(),
            home_country: DEFAULT_HOME_COUNTRY.to_string(),
            auto_detect_regions: AUTO_DETECT_REGIONS.iter().map(|r| r.to_string()).collect(),
            auto_detect_min_length: AUTO_DETECT_MIN_LENGTH,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Upper-cases every region code so lookups are case-insensitive.
    pub fn normalized(mut self) -> Self {
        self.default_region = normalize_region(&self.default_region);
        self.home_country = normalize_region(&self.home_country);
        for region in &mut self.auto_detect_regions {
            *region = normalize_region(region);
        }
        self
    }
}
