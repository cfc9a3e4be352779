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

use chrono::{DateTime, TimeZone, Utc};

use super::{
    fake_plan::{FakeNumber, FakePlan},
    init_logging,
    region_code::RegionCode,
};
use crate::{
    PHONE_VALIDATOR,
    validator::{LineType, PhoneValidator, Strategy, ValidatorConfig},
};

/// Monday 2024-01-15 at the given UTC time.
fn monday_utc(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0).unwrap()
}

fn fake_validator(plan: FakePlan) -> PhoneValidator<FakePlan> {
    PhoneValidator::with_plan(plan, ValidatorConfig::default())
}

#[test]
fn unparseable_input_reports_reason_only() {
    init_logging();
    let validator = fake_validator(FakePlan::new());
    let result = validator.validate("not-a-number", None, None);

    assert!(!result.valid);
    assert_eq!(result.input, "not-a-number");
    assert_eq!(result.cleaned_input, "notanumber");
    assert_eq!(result.reason, "Could not parse number with any strategy");
    assert_eq!(result.parse_strategy, None);
    assert_eq!(result.line_type, None);
    assert!(result.time.all_timezones.is_empty());
}

#[test]
fn invalid_candidate_names_the_strategy() {
    let plan = FakePlan::new().with("12345", Some("IN"), FakeNumber::possible(91, "12345", "IN"));
    let result = fake_validator(plan).validate("12-345", None, None);

    assert!(!result.valid);
    assert!(result.is_possible);
    assert_eq!(result.parse_strategy, Some(Strategy::WithRegion));
    assert_eq!(result.reason, "Invalid number (tried: with_region)");
    assert_eq!(result.formatted_e164, None);
    assert_eq!(result.region, None);
}

#[test]
fn enriches_valid_international_number() {
    let plan = FakePlan::new()
        .with(
            "+442079460000",
            None,
            FakeNumber::valid(44, "2079460000", "GB").with_line_type(LineType::FixedLine),
        )
        .with_time_zones("GB", &["Europe/London"]);
    let result = fake_validator(plan).validate_at("+44 20 7946 0000", None, None, monday_utc(9, 30));

    assert!(result.valid);
    assert!(!result.is_domestic);
    assert!(result.is_international);
    assert!(!result.is_mobile);
    assert_eq!(result.reason, "Valid international number (GB)");
    assert_eq!(result.country_code.as_deref(), Some("+44"));
    assert_eq!(result.formatted_e164.as_deref(), Some("+442079460000"));
    assert_eq!(result.location.as_deref(), Some("Somewhere in GB"));
    assert_eq!(result.carrier, None);
    assert_eq!(result.line_type, Some(LineType::FixedLine));
    assert_eq!(result.parse_strategy, Some(Strategy::AsIs));
    assert_eq!(result.time.timezone.as_deref(), Some("Europe/London"));
    assert_eq!(result.time.local_time.as_deref(), Some("2024-01-15 09:30:00"));
    assert_eq!(result.time.utc_offset.as_deref(), Some("+00:00"));
    assert_eq!(result.time.day_of_week.as_deref(), Some("Monday"));
    assert_eq!(result.time.is_business_hours, Some(true));
}

#[test]
fn home_country_drives_domestic_flag() {
    let plan = FakePlan::new()
        .with("+919876543210", None, FakeNumber::valid(91, "9876543210", "IN"))
        .with_carrier("IN", "Airtel");
    let validator = fake_validator(plan);

    let domestic = validator.validate("+919876543210", None, Some("in"));
    assert!(domestic.is_domestic);
    assert_eq!(domestic.reason, "Valid domestic number");
    assert_eq!(domestic.carrier.as_deref(), Some("Airtel"));
    assert!(domestic.is_mobile);

    let foreign = validator.validate("+919876543210", None, Some(RegionCode::us()));
    assert!(foreign.is_international);
    assert_eq!(foreign.reason, "Valid international number (IN)");
}

#[test]
fn missing_time_zone_leaves_time_fields_null() {
    let plan = FakePlan::new().with("+919876543210", None, FakeNumber::valid(91, "9876543210", "IN"));
    let result = fake_validator(plan).validate("+919876543210", None, None);

    assert!(result.valid);
    assert_eq!(result.time.timezone, None);
    assert_eq!(result.time.is_business_hours, None);
    assert_eq!(result.time.weekdays_config, None);
    assert!(result.time.all_timezones.is_empty());
}

#[test]
fn non_geographical_region_reason() {
    let plan = FakePlan::new()
        .with("+80012345678", None, FakeNumber::valid(800, "12345678", "001")
            .with_line_type(LineType::TollFree));
    let result = fake_validator(plan).validate("+80012345678", None, None);

    assert!(result.valid);
    assert!(result.is_toll_free);
    assert_eq!(result.region.as_deref(), Some("001"));
    assert_eq!(result.reason, "Valid international number (001)");
}

#[test]
fn unknown_region_reason_and_default_schedule() {
    let plan = FakePlan::new()
        .with("+80012345678", None, FakeNumber {
            region: None,
            ..FakeNumber::valid(800, "12345678", "ZZ").with_line_type(LineType::TollFree)
        });
    let result = fake_validator(plan).validate("+80012345678", None, None);

    assert!(result.valid);
    assert!(result.is_toll_free);
    assert_eq!(result.region, None);
    assert_eq!(result.location, None);
    assert_eq!(result.reason, "Valid international number (ZZ)");
}

#[test]
fn result_serializes_every_key_in_order() {
    let validator = fake_validator(FakePlan::new());
    let json = serde_json::to_value(validator.validate("abc", None, None)).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    let expected = [
        "input", "cleaned_input", "valid", "is_possible", "is_domestic", "is_international",
        "is_toll_free", "is_mobile", "formatted_e164", "formatted_international",
        "formatted_national", "country_code", "region", "location", "carrier", "type", "reason",
        "parse_strategy", "timezone", "all_timezones", "local_time", "local_time_12h",
        "local_date", "day_of_week", "is_business_hours", "is_weekend", "is_weekday",
        "utc_offset", "business_hours_start", "business_hours_end", "weekdays_config",
    ];
    let mut sorted_expected = expected.to_vec();
    sorted_expected.sort_unstable();
    let mut sorted_keys = keys.clone();
    sorted_keys.sort_unstable();
    assert_eq!(sorted_keys, sorted_expected);
    assert_eq!(json["type"], serde_json::Value::Null);
    assert_eq!(json["all_timezones"], serde_json::json!([]));
}

#[test]
fn batch_counts_only_valid_entries() {
    let plan = FakePlan::new()
        .with("+919876543210", None, FakeNumber::valid(91, "9876543210", "IN"))
        .with(
            "+18005550123",
            None,
            FakeNumber::valid(1, "8005550123", "US").with_line_type(LineType::TollFree),
        )
        .with("12", Some("IN"), FakeNumber::possible(91, "12", "IN"));
    let batch = fake_validator(plan).validate_batch(
        &["+919876543210", "+1 800 555 0123", "12", "garbage"],
        None,
        None,
    );

    assert_eq!(batch.total, 4);
    assert_eq!(batch.valid_count, 2);
    assert_eq!(batch.invalid_count, 2);
    assert_eq!(batch.domestic_count, 1);
    assert_eq!(batch.international_count, 1);
    assert_eq!(batch.toll_free_count, 1);
    assert_eq!(batch.mobile_count, 1);
    assert!(!batch.results[2].is_domestic);
    assert_eq!(batch.results[3].reason, "Could not parse number with any strategy");
}

// Real numbering plan.

#[test]
fn indian_mobile_with_default_region() {
    init_logging();
    let result = PHONE_VALIDATOR.validate("9876543210", Some(RegionCode::in_()), None);

    assert!(result.valid);
    assert_eq!(result.region.as_deref(), Some("IN"));
    assert_eq!(result.line_type, Some(LineType::Mobile));
    assert!(result.is_domestic);
    assert!(result.is_mobile);
    assert_eq!(result.formatted_e164.as_deref(), Some("+919876543210"));
    assert_eq!(result.country_code.as_deref(), Some("+91"));
    assert_eq!(result.parse_strategy, Some(Strategy::WithRegion));
    assert_eq!(result.location.as_deref(), Some("India"));
    assert_eq!(result.time.timezone.as_deref(), Some("Asia/Calcutta"));
}

#[test]
fn not_a_number_is_unparseable() {
    let result = PHONE_VALIDATOR.validate("not-a-number", None, None);
    assert!(!result.valid);
    assert_eq!(result.reason, "Could not parse number with any strategy");
}

#[test]
fn explicit_country_code_resolves_as_is() {
    let result = PHONE_VALIDATOR.validate("+91 98765 43210", Some(RegionCode::us()), None);
    assert!(result.valid);
    assert_eq!(result.parse_strategy, Some(Strategy::AsIs));
    assert_eq!(result.region.as_deref(), Some("IN"));
}

#[test]
fn canonical_output_resolves_again() {
    let first = PHONE_VALIDATOR.validate("9876543210", Some(RegionCode::in_()), None);
    let e164 = first.formatted_e164.unwrap();
    let second = PHONE_VALIDATOR.validate(&e164, Some(RegionCode::gb()), None);

    assert!(second.valid);
    assert_eq!(second.parse_strategy, Some(Strategy::AsIs));
    assert_eq!(second.formatted_e164.as_deref(), Some(e164.as_str()));
}

#[test]
fn auto_detects_region_for_foreign_national_number() {
    // No country calling code starts with 28, so only the auto sweep can
    // read this as a United States number.
    let result = PHONE_VALIDATOR.validate("(281) 555-0123", Some(RegionCode::fr()), None);
    assert!(result.valid);
    assert_eq!(result.parse_strategy, Some(Strategy::Auto("US".to_string())));
    assert_eq!(result.region.as_deref(), Some("US"));
    assert!(result.is_international);
}

#[test]
fn west_coast_number_uses_pacific_time() {
    let result = PHONE_VALIDATOR.validate_at("+13105550123", None, None, monday_utc(20, 0));
    assert!(result.valid);
    assert_eq!(result.region.as_deref(), Some("US"));
    assert_eq!(result.location.as_deref(), Some("California"));
    assert_eq!(result.time.timezone.as_deref(), Some("America/Los_Angeles"));
    assert_eq!(result.time.utc_offset.as_deref(), Some("-08:00"));
    assert_eq!(result.time.local_time.as_deref(), Some("2024-01-15 12:00:00"));

    let dallas = PHONE_VALIDATOR.validate_at("+19725550123", None, None, monday_utc(20, 0));
    assert_eq!(dallas.location.as_deref(), Some("Texas"));
    assert_eq!(dallas.time.timezone.as_deref(), Some("America/Chicago"));
    assert_eq!(dallas.time.utc_offset.as_deref(), Some("-06:00"));
}

#[test]
fn freephone_number_reports_world_region() {
    let result = PHONE_VALIDATOR.validate("+80012340000", None, None);
    assert!(result.valid);
    assert!(result.is_toll_free);
    assert_eq!(result.region.as_deref(), Some("001"));
    assert_eq!(result.location, None);
    assert_eq!(result.reason, "Valid international number (001)");
}

#[test]
fn business_hours_close_on_the_hour() {
    // India is configured 10:00 to 18:00; IST is UTC+05:30.
    let open = PHONE_VALIDATOR.validate_at("+919876543210", None, None, monday_utc(12, 29));
    assert_eq!(open.time.local_time.as_deref(), Some("2024-01-15 17:59:00"));
    assert_eq!(open.time.is_business_hours, Some(true));

    let closed = PHONE_VALIDATOR.validate_at("+919876543210", None, None, monday_utc(12, 30));
    assert_eq!(closed.time.local_time.as_deref(), Some("2024-01-15 18:00:00"));
    assert_eq!(closed.time.is_business_hours, Some(false));
    assert_eq!(closed.time.is_weekday, Some(true));
    assert_eq!(closed.time.business_hours_end.as_deref(), Some("18:00"));
}

#[test]
fn batch_of_domestic_and_us_number() {
    let batch = PHONE_VALIDATOR.validate_batch(
        &["9876543210", "12025550123"],
        Some(RegionCode::in_()),
        Some(RegionCode::in_()),
    );

    assert_eq!(batch.total, 2);
    assert_eq!(batch.valid_count, 2);
    assert_eq!(batch.invalid_count, 0);
    assert_eq!(batch.domestic_count, 1);
    assert_eq!(batch.international_count, 1);
    assert_eq!(
        batch.mobile_count,
        batch.results.iter().filter(|r| r.valid && r.is_mobile).count()
    );
    assert_eq!(batch.results[1].region.as_deref(), Some("US"));
}

#[test]
fn health_and_config_views() {
    let health = PHONE_VALIDATOR.health();
    assert_eq!(health.status, "ok");
    assert_eq!(health.service, "Phone Validator API");

    let view = PHONE_VALIDATOR.business_config("in");
    assert_eq!(view.country_code, "IN");
    assert!(view.is_configured);
    assert_eq!(view.business_hours, "10:00 - 18:00");
    assert_eq!(view.weekend_days, vec!["Sunday"]);

    let view = PHONE_VALIDATOR.business_config("zz");
    assert!(!view.is_configured);
    assert_eq!(view.weekdays, vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]);
    assert_eq!(view.business_hours_start, 9);
    assert_eq!(view.business_hours_end, 17);

    let countries = PHONE_VALIDATOR.supported_countries();
    assert_eq!(countries.total_countries, countries.countries.len());
    assert_eq!(countries.countries[0].country_code, "AD");
    assert_eq!(countries.countries[0].business_hours, "09:00-18:00");
}
