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

pub const PLUS_SIGN: &str = "+";

/// Region assumed for national-format input when the caller gives none.
pub const DEFAULT_REGION: &str = "IN";
/// Region against which the domestic/international flag is computed.
pub const DEFAULT_HOME_COUNTRY: &str = "IN";
/// The only language the bundled geocoding and carrier data is written in.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Numbering plans tried, in this order, for long numbers that carry no
/// country code and do not validate under the caller's region.
pub const AUTO_DETECT_REGIONS: [&str; 30] = [
    "US", "GB", "MX", "BR", "AU", "CA", "DE", "FR", "IT", "ES",
    "AR", "CO", "PE", "CL", "CN", "JP", "KR", "ID", "TH", "PH",
    "MY", "SG", "VN", "PK", "BD", "RU", "TR", "SA", "AE", "ZA",
];
/// Cleaned inputs shorter than this never enter the auto-detection sweep.
pub const AUTO_DETECT_MIN_LENGTH: usize = 10;

// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;

pub const REASON_UNPARSEABLE: &str = "Could not parse number with any strategy";
pub const REASON_VALID_DOMESTIC: &str = "Valid domestic number";

pub const SERVICE_NAME: &str = "Phone Validator API";
pub const SERVICE_STATUS_OK: &str = "ok";
