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

use log::{debug, trace};
use strum::IntoEnumIterator;

use super::{
    enums::InputShape,
    errors::{FormatError, PhonyError},
    helper_constants::{CANONICAL_NUMBER_LENGTH, SUBSCRIBER_SEPARATORS, TRUNK_PREFIX, TRUNK_PREFIX_CHAR},
    helper_types::CanonicalNumber,
    phony_regexps::{PhonyRegExps, AREA_GROUP, SUBSCRIBER_GROUP},
    PHONY_REG_EXPS,
};
use crate::{regex_util::RegexFullMatch, string_util::strip_chars};

type Result<T> = std::result::Result<T, PhonyError>;

/// Area and subscriber groups of an input, as written by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ShapeMatch<'a> {
    pub shape: InputShape,
    pub area: &'a str,
    pub subscriber: &'a str,
}

impl<'a> ShapeMatch<'a> {
    /// Joins both groups into national digits. International notation drops
    /// the trunk zero, so it is put back in front of the area group. Compact
    /// input has no area group.
    fn national_digits(&self) -> String {
        let subscriber = strip_chars(self.subscriber, &SUBSCRIBER_SEPARATORS);
        match self.shape {
            InputShape::International => fast_cat::concat_str!(TRUNK_PREFIX, self.area, &*subscriber),
            InputShape::LooseNational | InputShape::CompactNational => {
                fast_cat::concat_str!(self.area, &*subscriber)
            }
        }
    }
}

/// Finds the first accepted shape the whole of `input` fits.
pub(super) fn match_shape<'a>(reg_exps: &PhonyRegExps, input: &'a str) -> Option<ShapeMatch<'a>> {
    InputShape::iter().find_map(|shape| {
        let captures = reg_exps.shape_pattern(shape).full_captures(input)?;
        Some(ShapeMatch {
            shape,
            area: captures.name(AREA_GROUP).map_or("", |area| area.as_str()),
            subscriber: captures.name(SUBSCRIBER_GROUP)?.as_str(),
        })
    })
}

/// Reduces a human-entered number to its canonical national form.
///
/// Accepts `+386 (0)31 123 456`, `00386 31 123456`, `386 1 2345678`,
/// `031/123-456`, `01 234 5678`, `031123456` and similar spellings. Leading zeros are
/// dropped from the result, so feeding `"0" + canonical` back in is a no-op.
///
/// # Errors
/// - [`PhonyError::InputMissing`] for empty or blank input.
/// - [`FormatError::NoMatchingShape`] when no accepted notation fits.
/// - [`FormatError::InvalidLength`] when the digits found are not a national
///   number of eight digits.
pub fn normalize(raw: &str) -> Result<CanonicalNumber> {
    normalize_with(&PHONY_REG_EXPS, raw)
}

pub(super) fn normalize_with(reg_exps: &PhonyRegExps, raw: &str) -> Result<CanonicalNumber> {
    let input = raw.trim();
    if input.is_empty() {
        debug!("Empty input given for normalization");
        return Err(PhonyError::InputMissing);
    }

    let Some(shape_match) = match_shape(reg_exps, input) else {
        debug!("Input '{input}' does not match any accepted shape");
        return Err(FormatError::NoMatchingShape.into());
    };
    trace!("Input '{input}' matched {:?} shape", shape_match.shape);

    let digits = shape_match.national_digits();
    let national_number = digits.trim_start_matches(TRUNK_PREFIX_CHAR);
    if national_number.len() != CANONICAL_NUMBER_LENGTH {
        debug!(
            "Input '{input}' normalized to '{national_number}' which has {} digits",
            national_number.len()
        );
        return Err(FormatError::InvalidLength(national_number.len()).into());
    }

    trace!("Input '{input}' normalized to '{national_number}'");
    Ok(CanonicalNumber::new(national_number.to_owned()))
}
