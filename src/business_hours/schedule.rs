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

use chrono::Weekday;

use crate::macros::schedule;

/// Working-week definition for one region.
///
/// `weekdays` and `weekend_days` are authored independently, so nothing
/// here forces them to partition the week; see
/// [`BusinessConfig::partitions_week`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessConfig {
    pub weekdays: &'static [Weekday],
    pub weekend_days: &'static [Weekday],
    /// First business hour, inclusive.
    pub business_hours_start: u32,
    /// First hour after business, exclusive.
    pub business_hours_end: u32,
}

/// Monday to Friday, 09:00 to 17:00.
pub const DEFAULT_BUSINESS_CONFIG: BusinessConfig =
    schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun]);

impl BusinessConfig {
    pub const fn new(
        weekdays: &'static [Weekday],
        weekend_days: &'static [Weekday],
        business_hours_start: u32,
        business_hours_end: u32,
    ) -> Self {
        Self { weekdays, weekend_days, business_hours_start, business_hours_end }
    }

    pub fn is_weekday(&self, day: Weekday) -> bool {
        self.weekdays.contains(&day)
    }

    pub fn is_weekend(&self, day: Weekday) -> bool {
        self.weekend_days.contains(&day)
    }

    /// Hour-granular check over `[start, end)`: with an end of 18, 17:59
    /// is inside and 18:00 is not.
    pub fn is_business_hours(&self, day: Weekday, hour: u32) -> bool {
        self.is_weekday(day)
            && self.business_hours_start <= hour
            && hour < self.business_hours_end
    }

    /// English names of the working days, Monday first.
    pub fn weekday_names(&self) -> Vec<&'static str> {
        sorted_names(self.weekdays)
    }

    /// English names of the weekend days, Monday first.
    pub fn weekend_names(&self) -> Vec<&'static str> {
        sorted_names(self.weekend_days)
    }

    /// `HH:00` rendering of the opening hour.
    pub fn start_label(&self) -> String {
        format!("{:02}:00", self.business_hours_start)
    }

    /// `HH:00` rendering of the closing hour.
    pub fn end_label(&self) -> String {
        format!("{:02}:00", self.business_hours_end)
    }

    /// True when every day of the week is exactly one of working day or
    /// weekend day.
    pub fn partitions_week(&self) -> bool {
        ALL_DAYS
            .iter()
            .all(|&day| self.is_weekday(day) != self.is_weekend(day))
    }
}

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn sorted_names(days: &[Weekday]) -> Vec<&'static str> {
    let mut days = days.to_vec();
    days.sort_by_key(|day| day.num_days_from_monday());
    days.dedup();
    days.into_iter().map(weekday_name).collect()
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
