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

use log::{debug, trace};

use super::{
    ParseCandidate, ResolvedNumber, Strategy,
    helper_constants::{AUTO_DETECT_MIN_LENGTH, AUTO_DETECT_REGIONS, PLUS_SIGN},
};
use crate::{interfaces::NumberingPlan, string_util::has_plus_prefix};

/// One planned parse attempt: which heuristic, what text, which region hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub strategy: Strategy,
    pub input: String,
    pub region: Option<String>,
}

type Rank<N> = fn(&ParseCandidate<N>) -> bool;

/// Tie-break order applied when no authoritative strategy ended the search.
/// The first tier with a match wins, and within a tier the earliest
/// attempt wins.
fn selection_ranks<N>() -> [Rank<N>; 6] {
    [
        |c| c.is_valid && c.strategy == Strategy::WithRegion,
        |c| c.is_valid && c.strategy == Strategy::AsIs,
        |c| c.is_valid && c.strategy == Strategy::WithPlus,
        // Only auto-detected candidates can still be valid here.
        |c| c.is_valid,
        |c| c.is_possible,
        |_| true,
    ]
}

/// Multi-strategy parser that picks the single best reading of an
/// ambiguous phone number string.
pub struct Resolver<'a, P: NumberingPlan> {
    plan: &'a P,
    auto_detect_regions: Vec<&'a str>,
    auto_detect_min_length: usize,
}

impl<'a, P: NumberingPlan> Resolver<'a, P> {
    /// A resolver using the built-in auto-detection region list.
    pub fn new(plan: &'a P) -> Self {
        Self {
            plan,
            auto_detect_regions: AUTO_DETECT_REGIONS.to_vec(),
            auto_detect_min_length: AUTO_DETECT_MIN_LENGTH,
        }
    }

    pub fn with_auto_detection(
        plan: &'a P,
        auto_detect_regions: &'a [String],
        auto_detect_min_length: usize,
    ) -> Self {
        Self {
            plan,
            auto_detect_regions: auto_detect_regions.iter().map(String::as_str).collect(),
            auto_detect_min_length,
        }
    }

    /// The ordered attempts for `cleaned`, with every precondition applied.
    pub fn attempts(&self, cleaned: &str, default_region: &str) -> Vec<Attempt> {
        let mut attempts = vec![Attempt {
            strategy: Strategy::AsIs,
            input: cleaned.to_string(),
            region: None,
        }];
        if has_plus_prefix(cleaned) {
            return attempts;
        }

        attempts.push(Attempt {
            strategy: Strategy::WithRegion,
            input: cleaned.to_string(),
            region: Some(default_region.to_string()),
        });
        attempts.push(Attempt {
            strategy: Strategy::WithPlus,
            input: fast_cat::concat_str!(PLUS_SIGN, cleaned),
            region: None,
        });

        if cleaned.chars().count() >= self.auto_detect_min_length {
            attempts.extend(
                self.auto_detect_regions
                    .iter()
                    .filter(|&&region| region != default_region)
                    .map(|&region| Attempt {
                        strategy: Strategy::Auto(region.to_string()),
                        input: cleaned.to_string(),
                        region: Some(region.to_string()),
                    }),
            );
        }
        attempts
    }

    /// Runs one attempt; `None` when the text does not parse under it.
    fn try_attempt(&self, attempt: Attempt) -> Option<ParseCandidate<P::Number>> {
        let number = match self.plan.parse(&attempt.input, attempt.region.as_deref()) {
            Ok(number) => number,
            Err(err) => {
                trace!("Strategy {} failed to parse {:?}: {}", attempt.strategy, attempt.input, err);
                return None;
            }
        };
        let candidate = ParseCandidate {
            is_valid: self.plan.is_valid(&number),
            is_possible: self.plan.is_possible(&number),
            detected_region: self.plan.region_code(&number),
            strategy: attempt.strategy,
            number,
        };
        trace!(
            "Strategy {} parsed {:?}: valid={}, possible={}, region={:?}",
            candidate.strategy, attempt.input, candidate.is_valid, candidate.is_possible, candidate.detected_region
        );
        Some(candidate)
    }

    /// Picks the best interpretation of an already cleaned number.
    ///
    /// A valid `as_is` or `with_plus` candidate ends the search at once;
    /// otherwise every attempt runs and the ranked selection decides.
    /// Returns `None` only when no attempt parsed at all.
    pub fn resolve(&self, cleaned: &str, default_region: &str) -> Option<ResolvedNumber<P::Number>> {
        let mut candidates = Vec::new();
        for attempt in self.attempts(cleaned, default_region) {
            let Some(candidate) = self.try_attempt(attempt) else {
                continue;
            };
            if candidate.is_valid && candidate.strategy.is_authoritative() {
                debug!("Resolved {:?} early via {}", cleaned, candidate.strategy);
                return Some(ResolvedNumber::new(candidate));
            }
            candidates.push(candidate);
        }

        let chosen = select(candidates);
        match &chosen {
            Some(resolved) => debug!("Resolved {:?} via {} (valid={})", cleaned, resolved.strategy, resolved.is_valid),
            None => debug!("No strategy could parse {:?}", cleaned),
        }
        chosen
    }
}

/// Applies the ranked tie-break to candidates in attempt order.
pub fn select<N>(mut candidates: Vec<ParseCandidate<N>>) -> Option<ResolvedNumber<N>> {
    let index = selection_ranks::<N>()
        .iter()
        .find_map(|rank| candidates.iter().position(|candidate| rank(candidate)))?;
    Some(ResolvedNumber::new(candidates.swap_remove(index)))
}
