mod interfaces;
mod prefix_map;
pub mod business_hours;
pub mod i18n;
pub mod plan;
pub mod validator;
pub(crate) mod string_util;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::NumberingPlan;
pub use prefix_map::PrefixMap;
pub use validator::{
    BatchResult, BusinessConfigView, HealthStatus, LineType, PHONE_VALIDATOR, PhoneNumberFormat,
    PhoneValidator, Strategy, SupportedCountries, ValidationResult, ValidatorConfig,
    errors::{LookupError, ParseError, PrefixFileError},
};
