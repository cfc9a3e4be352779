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

mod config;
mod enricher;
mod helper_types;
mod phone_validator;
mod results;
mod time_info;
pub mod enums;
pub mod errors;
pub mod resolver;
pub(crate) mod helper_constants;

use std::sync::LazyLock;

pub use config::ValidatorConfig;
pub use enricher::Enricher;
pub use enums::{LineType, PhoneNumberFormat, Strategy};
pub use helper_types::{ParseCandidate, ResolvedNumber};
pub use phone_validator::PhoneValidator;
pub use resolver::{Attempt, Resolver};
pub use results::{
    BatchResult, BusinessConfigView, CountrySummary, HealthStatus, SupportedCountries,
    ValidationResult,
};
pub use time_info::TimeInfo;

/// Process-wide validator with the default configuration and bundled data.
pub static PHONE_VALIDATOR: LazyLock<PhoneValidator> = LazyLock::new(|| {
    PhoneValidator::new()
});
