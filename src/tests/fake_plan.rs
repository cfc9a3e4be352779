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

use std::{collections::HashMap, sync::Mutex};

use crate::{
    interfaces::NumberingPlan,
    validator::{
        LineType, PhoneNumberFormat,
        errors::{LookupError, ParseError},
    },
};

/// What the fake plan knows about one number.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeNumber {
    pub code: u16,
    pub national: String,
    pub region: Option<String>,
    pub valid: bool,
    pub possible: bool,
    pub line_type: LineType,
}

impl FakeNumber {
    pub fn valid(code: u16, national: &str, region: &str) -> Self {
        Self {
            code,
            national: national.to_string(),
            region: Some(region.to_string()),
            valid: true,
            possible: true,
            line_type: LineType::Mobile,
        }
    }

    pub fn possible(code: u16, national: &str, region: &str) -> Self {
        Self { valid: false, ..Self::valid(code, national, region) }
    }

    pub fn parsed_only(code: u16, national: &str) -> Self {
        Self {
            region: None,
            valid: false,
            possible: false,
            ..Self::valid(code, national, "ZZ")
        }
    }

    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line_type = line_type;
        self
    }

    fn e164(&self) -> String {
        format!("+{}{}", self.code, self.national)
    }
}

/// Table-driven [`NumberingPlan`]: only the `(input, region)` pairs that
/// were registered parse, and every parse call is recorded.
#[derive(Default)]
pub struct FakePlan {
    numbers: HashMap<(String, Option<String>), FakeNumber>,
    time_zones: HashMap<String, Vec<String>>,
    carriers: HashMap<String, String>,
    attempts: Mutex<Vec<(String, Option<String>)>>,
}

impl FakePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, input: &str, region: Option<&str>, number: FakeNumber) -> Self {
        self.numbers
            .insert((input.to_string(), region.map(str::to_string)), number);
        self
    }

    pub fn with_time_zones(mut self, region: &str, zones: &[&str]) -> Self {
        self.time_zones.insert(
            region.to_string(),
            zones.iter().map(|zone| zone.to_string()).collect(),
        );
        self
    }

    pub fn with_carrier(mut self, region: &str, name: &str) -> Self {
        self.carriers.insert(region.to_string(), name.to_string());
        self
    }

    /// Every `(input, region)` pair handed to `parse`, in call order.
    pub fn attempts(&self) -> Vec<(String, Option<String>)> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn attempted_regions(&self) -> Vec<Option<String>> {
        self.attempts().into_iter().map(|(_, region)| region).collect()
    }
}

impl NumberingPlan for FakePlan {
    type Number = FakeNumber;

    fn parse(&self, number: &str, region: Option<&str>) -> Result<FakeNumber, ParseError> {
        let key = (number.to_string(), region.map(str::to_string));
        self.attempts.lock().unwrap().push(key.clone());
        self.numbers
            .get(&key)
            .cloned()
            .ok_or(ParseError::NotANumber(phonenumber::ParseError::NoNumber))
    }

    fn is_valid(&self, number: &FakeNumber) -> bool {
        number.valid
    }

    fn is_possible(&self, number: &FakeNumber) -> bool {
        number.possible
    }

    fn region_code(&self, number: &FakeNumber) -> Option<String> {
        number.region.clone()
    }

    fn country_calling_code(&self, number: &FakeNumber) -> u16 {
        number.code
    }

    fn line_type(&self, number: &FakeNumber) -> LineType {
        number.line_type
    }

    fn format(&self, number: &FakeNumber, format: PhoneNumberFormat) -> Result<String, LookupError> {
        Ok(match format {
            PhoneNumberFormat::E164 => number.e164(),
            PhoneNumberFormat::International => format!("+{} {}", number.code, number.national),
            PhoneNumberFormat::National => number.national.clone(),
        })
    }

    fn description(&self, number: &FakeNumber, _language: &str) -> Result<String, LookupError> {
        number
            .region
            .as_ref()
            .map(|region| format!("Somewhere in {region}"))
            .ok_or(LookupError::NotAvailable)
    }

    fn carrier_name(&self, number: &FakeNumber, _language: &str) -> Result<String, LookupError> {
        number
            .region
            .as_ref()
            .and_then(|region| self.carriers.get(region))
            .cloned()
            .ok_or(LookupError::NotAvailable)
    }

    fn time_zones(&self, number: &FakeNumber) -> Result<Vec<String>, LookupError> {
        number
            .region
            .as_ref()
            .and_then(|region| self.time_zones.get(region))
            .cloned()
            .ok_or(LookupError::NotAvailable)
    }
}
