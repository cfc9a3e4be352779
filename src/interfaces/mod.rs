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

use std::fmt::Debug;

use crate::validator::{
    LineType, PhoneNumberFormat,
    errors::{LookupError, ParseError},
};

/// Numbering-plan API used to isolate the underlying phone number database
/// from the resolver and enricher, and allow different implementations to
/// be swapped in easily.
pub trait NumberingPlan: Send + Sync {
    /// Opaque structured number: a country calling code plus a national
    /// significant number.
    type Number: Clone + Debug;

    /// Parses `number`, reading national-format input as belonging to
    /// `region` when one is given. With no region the input has to carry
    /// its own `+<country code>`.
    fn parse(&self, number: &str, region: Option<&str>) -> Result<Self::Number, ParseError>;

    /// Full validation against the allocated patterns of the number's region.
    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Length-only plausibility check.
    fn is_possible(&self, number: &Self::Number) -> bool;

    /// ISO-3166 alpha-2 region the number belongs to, if it maps to one.
    fn region_code(&self, number: &Self::Number) -> Option<String>;

    fn country_calling_code(&self, number: &Self::Number) -> u16;

    fn line_type(&self, number: &Self::Number) -> LineType;

    fn format(&self, number: &Self::Number, format: PhoneNumberFormat) -> Result<String, LookupError>;

    /// Human readable description of where the number is, in `language`.
    fn description(&self, number: &Self::Number, language: &str) -> Result<String, LookupError>;

    /// Name of the carrier the number was originally allocated to, in `language`.
    fn carrier_name(&self, number: &Self::Number, language: &str) -> Result<String, LookupError>;

    /// IANA time zone names for the number, most specific first.
    fn time_zones(&self, number: &Self::Number) -> Result<Vec<String>, LookupError>;
}
