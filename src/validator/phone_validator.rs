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
use log::trace;

use super::{
    BatchResult, BusinessConfigView, CountrySummary, HealthStatus, SupportedCountries,
    ValidationResult, ValidatorConfig, enricher::Enricher, resolver::Resolver,
};
use crate::{
    business_hours::{BUSINESS_TABLE, BusinessTable},
    interfaces::NumberingPlan,
    plan::LibPhoneNumberPlan,
    string_util::{clean_number, normalize_region},
};

/// Entry point: cleans, resolves and enriches phone numbers.
///
/// Validation never fails; every outcome, including unparseable input, is
/// reported inside the returned record.
pub struct PhoneValidator<P: NumberingPlan = LibPhoneNumberPlan> {
    plan: P,
    config: ValidatorConfig,
    business_table: &'static BusinessTable,
}

impl PhoneValidator<LibPhoneNumberPlan> {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self::with_plan(LibPhoneNumberPlan::new(), config)
    }
}

impl Default for PhoneValidator<LibPhoneNumberPlan> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: NumberingPlan> PhoneValidator<P> {
    pub fn with_plan(plan: P, config: ValidatorConfig) -> Self {
        Self {
            plan,
            config: config.normalized(),
            business_table: &BUSINESS_TABLE,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn plan(&self) -> &P {
        &self.plan
    }

    /// Validates one number. `None` for either region falls back to the
    /// configured default.
    pub fn validate(
        &self,
        number: &str,
        default_region: Option<&str>,
        home_country: Option<&str>,
    ) -> ValidationResult {
        self.validate_at(number, default_region, home_country, Utc::now())
    }

    /// Like [`PhoneValidator::validate`], with local time evaluated at `now`.
    pub fn validate_at(
        &self,
        number: &str,
        default_region: Option<&str>,
        home_country: Option<&str>,
        now: DateTime<Utc>,
    ) -> ValidationResult {
        let default_region = self.region_or(default_region, &self.config.default_region);
        let home_country = self.region_or(home_country, &self.config.home_country);
        let cleaned = clean_number(number);
        trace!("Validating {number:?} as {cleaned:?} (region {default_region}, home {home_country})");

        let resolver = Resolver::with_auto_detection(
            &self.plan,
            &self.config.auto_detect_regions,
            self.config.auto_detect_min_length,
        );
        let Some(resolved) = resolver.resolve(&cleaned, &default_region) else {
            return ValidationResult::unparseable(number, cleaned);
        };
        if !resolved.is_valid {
            return ValidationResult::invalid(
                number,
                cleaned,
                resolved.strategy.clone(),
                resolved.is_possible,
            );
        }

        Enricher::new(&self.plan, self.business_table, &self.config.language)
            .enrich_at(number, cleaned, resolved, &home_country, now)
    }

    /// Validates every number independently; one bad entry never affects
    /// the others.
    pub fn validate_batch<S: AsRef<str>>(
        &self,
        numbers: &[S],
        default_region: Option<&str>,
        home_country: Option<&str>,
    ) -> BatchResult {
        self.validate_batch_at(numbers, default_region, home_country, Utc::now())
    }

    pub fn validate_batch_at<S: AsRef<str>>(
        &self,
        numbers: &[S],
        default_region: Option<&str>,
        home_country: Option<&str>,
        now: DateTime<Utc>,
    ) -> BatchResult {
        let results = numbers
            .iter()
            .map(|number| self.validate_at(number.as_ref(), default_region, home_country, now))
            .collect();
        BatchResult::from_results(results)
    }

    /// Working-week configuration for a region, or the default schedule
    /// with `is_configured = false`.
    pub fn business_config(&self, country_code: &str) -> BusinessConfigView {
        let country_code = normalize_region(country_code);
        let (config, is_configured) = self.business_table.get_or_default(&country_code);
        BusinessConfigView::new(country_code, config, is_configured)
    }

    /// Every region with an explicit schedule, sorted by region code.
    pub fn supported_countries(&self) -> SupportedCountries {
        let countries: Vec<CountrySummary> = self
            .business_table
            .iter()
            .map(|(code, config)| CountrySummary::new(code, config))
            .collect();
        SupportedCountries {
            total_countries: countries.len(),
            countries,
        }
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus::default()
    }

    fn region_or(&self, region: Option<&str>, fallback: &str) -> String {
        match region {
            Some(region) => normalize_region(region),
            None => fallback.to_string(),
        }
    }
}
