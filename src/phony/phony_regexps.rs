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

use regex::Regex;

use super::{
    enums::InputShape,
    helper_constants::{
        CANONICAL_NUMBER_LENGTH, COUNTRY_CALLING_CODE, INTERNATIONAL_DIALLING_PREFIX, MOBILE_PREFIXES,
        TRUNK_PREFIX_CHAR,
    },
};

/// Name of the capture group holding the area digits, in every pattern below.
pub const AREA_GROUP: &'static str = "area";
/// Name of the capture group holding the subscriber digits of an input shape
/// or the number segment of a split.
pub const SUBSCRIBER_GROUP: &'static str = "subscriber";
pub const NUMBER_GROUP: &'static str = "number";

pub(crate) struct PhonyRegExps {
    /// International notation:
    /// `(+386|00386|386) [(0)] area{1,2} subscriber{7,}`
    /// where the subscriber group may contain spaces.
    pub international_pattern: Regex,

    /// National notation with a separated area group:
    /// `area{2,3} (space|/) subscriber`
    /// where the subscriber group may contain spaces and dashes.
    pub loose_national_pattern: Regex,

    /// National digits without any separator: `[0] subscriber{8}`.
    /// Has no area group.
    pub compact_national_pattern: Regex,

    /// Splits a canonical mobile number. The area alternation is built from
    /// the mobile prefix table with trunk zeros dropped.
    pub mobile_split_pattern: Regex,

    /// Splits a canonical fixed-line number into one area digit and seven
    /// subscriber digits.
    pub fixed_split_pattern: Regex,

    /// Template token: `{area}`, `{number}`, optionally with a `:width`.
    /// Group 1 is the field name, group 2 the width.
    pub token_pattern: Regex,
}

impl PhonyRegExps {
    pub fn new() -> Self {
        // it'll be initialized only once, so we can use slow format!
        let international = format!(
            r"^(?:\+{cc}|{idd}{cc}|{cc})\s*(?:\(0\))?(?P<{AREA_GROUP}>[0-9]{{1,2}})\s*(?P<{SUBSCRIBER_GROUP}>[0-9 ]{{7,}})$",
            cc = COUNTRY_CALLING_CODE,
            idd = INTERNATIONAL_DIALLING_PREFIX,
        );
        let loose_national = format!(
            r"^(?P<{AREA_GROUP}>[0-9]{{2,3}})[\s/](?P<{SUBSCRIBER_GROUP}>[0-9 \-]+)$"
        );
        let compact_national = format!(
            r"^{TRUNK_PREFIX_CHAR}?(?P<{SUBSCRIBER_GROUP}>[0-9]{{{CANONICAL_NUMBER_LENGTH}}})$"
        );

        let mobile_areas = MOBILE_PREFIXES
            .iter()
            .map(|prefix| prefix.trim_start_matches(TRUNK_PREFIX_CHAR))
            .collect::<Vec<_>>()
            .join("|");
        let mobile_split = format!(
            r"^(?P<{AREA_GROUP}>{mobile_areas})(?P<{NUMBER_GROUP}>[0-9]{{6}})$"
        );
        let fixed_split = format!(
            r"^(?P<{AREA_GROUP}>[0-9])(?P<{NUMBER_GROUP}>[0-9]{{7}})$"
        );

        Self {
            international_pattern: Regex::new(&international).unwrap(),
            loose_national_pattern: Regex::new(&loose_national).unwrap(),
            compact_national_pattern: Regex::new(&compact_national).unwrap(),
            mobile_split_pattern: Regex::new(&mobile_split).unwrap(),
            fixed_split_pattern: Regex::new(&fixed_split).unwrap(),
            token_pattern: Regex::new(r"\{(area|number)(?::([0-9]+))?\}").unwrap(),
        }
    }

    pub fn shape_pattern(&self, shape: InputShape) -> &Regex {
        match shape {
            InputShape::International => &self.international_pattern,
            InputShape::LooseNational => &self.loose_national_pattern,
            InputShape::CompactNational => &self.compact_national_pattern,
        }
    }
}
