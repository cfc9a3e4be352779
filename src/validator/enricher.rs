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

use chrono::{DateTime, Utc};
use log::debug;

use super::{
    PhoneNumberFormat, ResolvedNumber, ValidationResult,
    helper_constants::{PLUS_SIGN, REASON_VALID_DOMESTIC},
    time_info::TimeInfo,
};
use crate::{business_hours::BusinessTable, i18n::RegionCode, interfaces::NumberingPlan};

/// Derives the presentation fields of a resolved, valid number.
pub struct Enricher<'a, P: NumberingPlan> {
    plan: &'a P,
    business_table: &'a BusinessTable,
    language: &'a str,
}

impl<'a, P: NumberingPlan> Enricher<'a, P> {
    pub fn new(plan: &'a P, business_table: &'a BusinessTable, language: &'a str) -> Self {
        Self { plan, business_table, language }
    }

    pub fn enrich(
        &self,
        input: &str,
        cleaned_input: String,
        resolved: ResolvedNumber<P::Number>,
        home_country: &str,
    ) -> ValidationResult {
        self.enrich_at(input, cleaned_input, resolved, home_country, Utc::now())
    }

    /// Like [`Enricher::enrich`], with local time evaluated at `now`.
    pub fn enrich_at(
        &self,
        input: &str,
        cleaned_input: String,
        resolved: ResolvedNumber<P::Number>,
        home_country: &str,
        now: DateTime<Utc>,
    ) -> ValidationResult {
        let candidate = resolved.into_candidate();
        let number = &candidate.number;
        let plan = self.plan;

        let region = plan.region_code(number);
        let is_domestic = region.as_deref() == Some(home_country);
        let line_type = plan.line_type(number);

        let mut buf = itoa::Buffer::new();
        let calling_code = buf.format(plan.country_calling_code(number));
        let country_code = fast_cat::concat_str!(PLUS_SIGN, calling_code);

        let reason = if is_domestic {
            REASON_VALID_DOMESTIC.to_string()
        } else {
            format!(
                "Valid international number ({})",
                region.as_deref().unwrap_or(RegionCode::get_unknown())
            )
        };

        let (business_config, _) = self
            .business_table
            .get_or_default(region.as_deref().unwrap_or(RegionCode::get_unknown()));
        let time = plan
            .time_zones(number)
            .and_then(|zones| TimeInfo::compute(zones, business_config, now))
            .unwrap_or_else(|err| {
                debug!("No time information for {cleaned_input:?}: {err}");
                TimeInfo::default()
            });

        ValidationResult {
            input: input.to_string(),
            valid: true,
            is_possible: candidate.is_possible,
            is_domestic,
            is_international: !is_domestic,
            is_toll_free: line_type.is_toll_free(),
            is_mobile: line_type.is_mobile(),
            formatted_e164: plan.format(number, PhoneNumberFormat::E164).ok(),
            formatted_international: plan.format(number, PhoneNumberFormat::International).ok(),
            formatted_national: plan.format(number, PhoneNumberFormat::National).ok(),
            country_code: Some(country_code),
            location: plan
                .description(number, self.language)
                .ok()
                .filter(|location| !location.is_empty()),
            carrier: plan
                .carrier_name(number, self.language)
                .ok()
                .filter(|carrier| !carrier.is_empty()),
            line_type: Some(line_type),
            reason,
            parse_strategy: Some(candidate.strategy),
            region,
            time,
            cleaned_input,
        }
    }
}
