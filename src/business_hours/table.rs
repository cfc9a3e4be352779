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

use std::sync::LazyLock;

use log::warn;

use super::{BusinessConfig, DEFAULT_BUSINESS_CONFIG};
use crate::macros::schedule;

/// Region code to working week, sorted by region code.
static COUNTRY_BUSINESS_CONFIG: &[(&str, BusinessConfig)] = &[
    ("AD", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("AE", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("AF", schedule!([Sat, Sun, Mon, Tue, Wed], 8..16, [Thu, Fri])),
    ("AL", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("AM", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("AO", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("AR", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("AT", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("AU", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("AZ", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("BA", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("BB", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("BD", schedule!([Mon, Tue, Wed, Thu, Fri, Sun], 9..17, [Sat])),
    ("BE", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("BF", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("BG", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("BH", schedule!([Sun, Mon, Tue, Wed, Thu], 8..15, [Fri, Sat])),
    ("BI", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("BJ", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("BN", schedule!([Mon, Tue, Wed, Thu, Sun], 8..17, [Fri, Sat])),
    ("BO", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("BR", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("BS", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("BW", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("BY", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("BZ", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("CA", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("CD", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("CF", schedule!([Mon, Tue, Wed, Thu, Fri], 7..15, [Sat, Sun])),
    ("CG", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("CH", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("CI", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("CL", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("CM", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("CN", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("CO", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("CR", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("CU", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("CY", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("CZ", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("DE", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("DJ", schedule!([Sat, Sun, Mon, Tue, Wed], 7..14, [Thu, Fri])),
    ("DK", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("DO", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("DZ", schedule!([Sat, Sun, Mon, Tue, Wed], 8..16, [Thu, Fri])),
    ("EC", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("EE", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("EG", schedule!([Sun, Mon, Tue, Wed, Thu], 9..17, [Fri, Sat])),
    ("ER", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("ES", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("ET", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("FI", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("FJ", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("FR", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("GA", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("GB", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("GE", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("GH", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("GM", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("GN", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("GQ", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("GR", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("GT", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("GY", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("HK", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("HN", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("HR", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("HT", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("HU", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("ID", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("IE", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("IL", schedule!([Sun, Mon, Tue, Wed, Thu], 9..17, [Fri, Sat])),
    ("IN", schedule!([Mon, Tue, Wed, Thu, Fri, Sat], 10..18, [Sun])),
    ("IQ", schedule!([Sun, Mon, Tue, Wed, Thu], 8..15, [Fri, Sat])),
    ("IR", schedule!([Sat, Sun, Mon, Tue, Wed], 9..17, [Thu, Fri])),
    ("IS", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("IT", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("JM", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("JO", schedule!([Sun, Mon, Tue, Wed, Thu], 9..17, [Fri, Sat])),
    ("JP", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("KE", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("KG", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("KH", schedule!([Mon, Tue, Wed, Thu, Fri, Sat], 8..17, [Sun])),
    ("KP", schedule!([Mon, Tue, Wed, Thu, Fri, Sat], 9..18, [Sun])),
    ("KR", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("KW", schedule!([Sun, Mon, Tue, Wed, Thu], 8..16, [Fri, Sat])),
    ("KZ", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("LA", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("LB", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("LI", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("LK", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("LR", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("LS", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("LT", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("LU", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("LV", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("LY", schedule!([Sun, Mon, Tue, Wed, Thu], 8..15, [Fri, Sat])),
    ("MA", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("MC", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("MD", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("ME", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("MK", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("ML", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("MM", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("MN", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("MO", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("MT", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("MW", schedule!([Mon, Tue, Wed, Thu, Fri], 7..17, [Sat, Sun])),
    ("MX", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("MY", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("MZ", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("NA", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("NC", schedule!([Mon, Tue, Wed, Thu, Fri], 7..15, [Sat, Sun])),
    ("NE", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("NG", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("NI", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("NL", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("NO", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("NP", schedule!([Sun, Mon, Tue, Wed, Thu, Fri], 10..17, [Sat])),
    ("NZ", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("OM", schedule!([Sun, Mon, Tue, Wed, Thu], 8..15, [Fri, Sat])),
    ("PA", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("PE", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("PG", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("PH", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("PK", schedule!([Mon, Tue, Wed, Thu, Fri, Sat], 9..17, [Sun])),
    ("PL", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("PR", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("PS", schedule!([Sun, Mon, Tue, Wed, Thu], 8..15, [Fri, Sat])),
    ("PT", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("PY", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("QA", schedule!([Sun, Mon, Tue, Wed, Thu], 7..15, [Fri, Sat])),
    ("RO", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("RS", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("RU", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("RW", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("SA", schedule!([Sun, Mon, Tue, Wed, Thu], 9..17, [Fri, Sat])),
    ("SB", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("SD", schedule!([Sat, Sun, Mon, Tue, Wed], 8..14, [Thu, Fri])),
    ("SE", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("SG", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("SI", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("SK", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("SL", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("SM", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("SN", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("SO", schedule!([Sat, Sun, Mon, Tue, Wed], 8..16, [Thu, Fri])),
    ("SR", schedule!([Mon, Tue, Wed, Thu, Fri], 7..15, [Sat, Sun])),
    ("SV", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("SY", schedule!([Sun, Mon, Tue, Wed, Thu], 8..14, [Fri, Sat])),
    ("SZ", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("TD", schedule!([Mon, Tue, Wed, Thu, Fri], 7..15, [Sat, Sun])),
    ("TG", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("TH", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("TJ", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("TL", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("TM", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("TN", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("TO", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("TR", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("TT", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("TW", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("TZ", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("UA", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("UG", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("US", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("UY", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("UZ", schedule!([Mon, Tue, Wed, Thu, Fri], 9..18, [Sat, Sun])),
    ("VA", schedule!([Mon, Tue, Wed, Thu, Fri], 9..17, [Sat, Sun])),
    ("VE", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("VN", schedule!([Mon, Tue, Wed, Thu, Fri, Sat], 8..17, [Sun])),
    ("VU", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("WS", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("XK", schedule!([Mon, Tue, Wed, Thu, Fri], 8..16, [Sat, Sun])),
    ("YE", schedule!([Sat, Sun, Mon, Tue, Wed], 8..14, [Thu, Fri])),
    ("ZA", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("ZM", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
    ("ZW", schedule!([Mon, Tue, Wed, Thu, Fri], 8..17, [Sat, Sun])),
];

pub static BUSINESS_TABLE: LazyLock<BusinessTable> = LazyLock::new(|| {
    let table = BusinessTable::new(COUNTRY_BUSINESS_CONFIG);
    for code in table.partition_violations() {
        warn!("Business config for {code} does not split the week into working days and weekend");
    }
    table
});

/// Read-only lookup over a code-sorted slice of per-region schedules.
#[derive(Debug, Clone, Copy)]
pub struct BusinessTable {
    entries: &'static [(&'static str, BusinessConfig)],
}

impl BusinessTable {
    /// `entries` must be sorted by region code.
    pub const fn new(entries: &'static [(&'static str, BusinessConfig)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, region_code: &str) -> Option<&'static BusinessConfig> {
        let entries = self.entries;
        entries
            .binary_search_by(|(code, _)| (*code).cmp(region_code))
            .ok()
            .map(|index| &entries[index].1)
    }

    /// The region's schedule, or the default one; the flag tells which.
    pub fn get_or_default(&self, region_code: &str) -> (&'static BusinessConfig, bool) {
        match self.get(region_code) {
            Some(config) => (config, true),
            None => (&DEFAULT_BUSINESS_CONFIG, false),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static BusinessConfig)> + use<> {
        self.entries.iter().map(|(code, config)| (*code, config))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Regions whose working days and weekend days overlap or leave a day
    /// of the week unassigned.
    pub fn partition_violations(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, config)| !config.partitions_week())
            .map(|(code, _)| code)
            .collect()
    }
}
