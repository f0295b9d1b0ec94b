// Copyright (C) 2025 Kashin Vladislav
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

use std::fmt;

use super::{enums::{Field, NumberKind}, helper_constants::TRUNK_PREFIX_CHAR};

/// National number without trunk or country prefix: exactly eight ASCII
/// digits, the first of which is never `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CanonicalNumber(String);

impl CanonicalNumber {
    /// Only the normalizer builds these, after checking length and digits.
    pub(super) fn new(digits: String) -> Self {
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A canonical number split into its area and subscriber segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedNumber {
    kind: NumberKind,
    area: String,
    number: String,
}

impl ParsedNumber {
    pub(super) fn new(kind: NumberKind, area: String, number: String) -> Self {
        Self { kind, area, number }
    }

    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub fn is_mobile(&self) -> bool {
        self.kind == NumberKind::Mobile
    }

    /// Area code. Mobile areas keep their trunk zero (`"031"`), fixed-line
    /// areas are the single leading digit (`"1"`).
    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn segment(&self, field: Field) -> &str {
        match field {
            Field::Area => &self.area,
            Field::Number => &self.number,
        }
    }

    /// Rebuilds the canonical digits from both segments.
    pub fn national_digits(&self) -> String {
        let area = self.area.trim_start_matches(TRUNK_PREFIX_CHAR);
        fast_cat::concat_str!(area, &self.number)
    }
}
