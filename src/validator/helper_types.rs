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

use std::ops::Deref;

use super::Strategy;

/// The outcome of one strategy attempt that got as far as a parsed number.
#[derive(Debug, Clone)]
pub struct ParseCandidate<N> {
    pub strategy: Strategy,
    pub number: N,
    pub is_valid: bool,
    pub is_possible: bool,
    pub detected_region: Option<String>,
}

/// The single candidate the resolver settled on.
#[derive(Debug, Clone)]
pub struct ResolvedNumber<N>(ParseCandidate<N>);

impl<N> ResolvedNumber<N> {
    pub(crate) fn new(candidate: ParseCandidate<N>) -> Self {
        Self(candidate)
    }

    pub fn into_candidate(self) -> ParseCandidate<N> {
        self.0
    }
}

impl<N> Deref for ResolvedNumber<N> {
    type Target = ParseCandidate<N>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
