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

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use log::warn;
use serde::Serialize;

use super::errors::LookupError;
use crate::business_hours::{BusinessConfig, weekday_name};

/// Local time and business-hours status at a number's primary time zone.
///
/// Every field is `None` (and `all_timezones` empty) when the time zone
/// could not be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeInfo {
    pub timezone: Option<String>,
    pub all_timezones: Vec<String>,
    pub local_time: Option<String>,
    pub local_time_12h: Option<String>,
    pub local_date: Option<String>,
    pub day_of_week: Option<String>,
    pub is_business_hours: Option<bool>,
    pub is_weekend: Option<bool>,
    pub is_weekday: Option<bool>,
    pub utc_offset: Option<String>,
    pub business_hours_start: Option<String>,
    pub business_hours_end: Option<String>,
    pub weekdays_config: Option<String>,
}

impl TimeInfo {
    /// Evaluates `now` in the first of `zones` against `config`.
    pub fn compute(
        zones: Vec<String>,
        config: &BusinessConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, LookupError> {
        let primary = zones.first().ok_or(LookupError::NotAvailable)?;
        let tz: Tz = primary.parse().map_err(|_| {
            warn!("Time zone {primary:?} is not in the time zone database");
            LookupError::UnknownTimeZone(primary.clone())
        })?;

        let local = now.with_timezone(&tz);
        let day = local.weekday();
        let hour = local.hour();

        Ok(Self {
            timezone: Some(primary.clone()),
            local_time: Some(local.format("%Y-%m-%d %H:%M:%S").to_string()),
            local_time_12h: Some(local.format("%I:%M %p").to_string()),
            local_date: Some(local.format("%Y-%m-%d").to_string()),
            day_of_week: Some(weekday_name(day).to_string()),
            is_business_hours: Some(config.is_business_hours(day, hour)),
            is_weekend: Some(config.is_weekend(day)),
            is_weekday: Some(config.is_weekday(day)),
            utc_offset: Some(local.format("%:z").to_string()),
            business_hours_start: Some(config.start_label()),
            business_hours_end: Some(config.end_label()),
            weekdays_config: Some(config.weekday_names().join(", ")),
            all_timezones: zones,
        })
    }
}
