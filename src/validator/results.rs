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

use super::{
    LineType, Strategy,
    helper_constants::{REASON_UNPARSEABLE, SERVICE_NAME, SERVICE_STATUS_OK},
    time_info::TimeInfo,
};
use crate::business_hours::BusinessConfig;

/// Response record for one number. Every key is always present; fields
/// that do not apply are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub input: String,
    pub cleaned_input: String,
    pub valid: bool,
    pub is_possible: bool,
    pub is_domestic: bool,
    pub is_international: bool,
    pub is_toll_free: bool,
    pub is_mobile: bool,
    pub formatted_e164: Option<String>,
    pub formatted_international: Option<String>,
    pub formatted_national: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub location: Option<String>,
    pub carrier: Option<String>,
    #[serde(rename = "type")]
    pub line_type: Option<LineType>,
    pub reason: String,
    pub parse_strategy: Option<Strategy>,
    #[serde(flatten)]
    pub time: TimeInfo,
}

impl ValidationResult {
    fn empty(input: &str, cleaned_input: String, reason: String) -> Self {
        Self {
            input: input.to_string(),
            cleaned_input,
            valid: false,
            is_possible: false,
            is_domestic: false,
            is_international: false,
            is_toll_free: false,
            is_mobile: false,
            formatted_e164: None,
            formatted_international: None,
            formatted_national: None,
            country_code: None,
            region: None,
            location: None,
            carrier: None,
            line_type: None,
            reason,
            parse_strategy: None,
            time: TimeInfo::default(),
        }
    }

    /// No strategy produced a parseable number.
    pub fn unparseable(input: &str, cleaned_input: String) -> Self {
        Self::empty(input, cleaned_input, REASON_UNPARSEABLE.to_string())
    }

    /// The best candidate parsed but failed validation.
    pub fn invalid(input: &str, cleaned_input: String, strategy: Strategy, is_possible: bool) -> Self {
        let reason = format!("Invalid number (tried: {strategy})");
        Self {
            is_possible,
            parse_strategy: Some(strategy),
            ..Self::empty(input, cleaned_input, reason)
        }
    }
}

/// Aggregate over a batch. Every count except `total` and `invalid_count`
/// only considers valid entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub total: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub domestic_count: usize,
    pub international_count: usize,
    pub toll_free_count: usize,
    pub mobile_count: usize,
    pub results: Vec<ValidationResult>,
}

impl BatchResult {
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let count = |flag: fn(&ValidationResult) -> bool| {
            results.iter().filter(|r| r.valid && flag(r)).count()
        };
        let valid_count = count(|_| true);
        Self {
            total: results.len(),
            valid_count,
            invalid_count: results.len() - valid_count,
            domestic_count: count(|r| r.is_domestic),
            international_count: count(|r| r.is_international),
            toll_free_count: count(|r| r.is_toll_free),
            mobile_count: count(|r| r.is_mobile),
            results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessConfigView {
    pub country_code: String,
    pub weekdays: Vec<&'static str>,
    pub weekend_days: Vec<&'static str>,
    pub business_hours: String,
    pub business_hours_start: u32,
    pub business_hours_end: u32,
    pub is_configured: bool,
}

impl BusinessConfigView {
    pub fn new(country_code: String, config: &BusinessConfig, is_configured: bool) -> Self {
        Self {
            country_code,
            weekdays: config.weekday_names(),
            weekend_days: config.weekend_names(),
            business_hours: format!("{} - {}", config.start_label(), config.end_label()),
            business_hours_start: config.business_hours_start,
            business_hours_end: config.business_hours_end,
            is_configured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountrySummary {
    pub country_code: &'static str,
    pub weekdays: String,
    pub business_hours: String,
}

impl CountrySummary {
    pub fn new(country_code: &'static str, config: &BusinessConfig) -> Self {
        Self {
            country_code,
            weekdays: config.weekday_names().join(", "),
            business_hours: format!("{}-{}", config.start_label(), config.end_label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedCountries {
    pub total_countries: usize,
    pub countries: Vec<CountrySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: SERVICE_STATUS_OK.to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}
