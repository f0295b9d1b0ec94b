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

use log::trace;

use super::{
    enums::NumberKind,
    errors::{PhonyError, PreconditionError},
    helper_constants::{is_mobile_prefix, CANONICAL_NUMBER_LENGTH, TRUNK_PREFIX},
    helper_types::ParsedNumber,
    phony_regexps::{PhonyRegExps, AREA_GROUP, NUMBER_GROUP},
    PHONY_REG_EXPS,
};
use crate::regex_util::RegexFullMatch;

type Result<T> = std::result::Result<T, PhonyError>;

fn is_canonical(number: &str) -> bool {
    number.len() == CANONICAL_NUMBER_LENGTH && number.bytes().all(|b| b.is_ascii_digit())
}

/// Tells whether a canonical number belongs to a mobile operator block.
pub(super) fn number_kind(number: &str) -> NumberKind {
    let leading = number.get(..2).unwrap_or(number);
    let prefix = fast_cat::concat_str!(TRUNK_PREFIX, leading);
    if is_mobile_prefix(&prefix) {
        NumberKind::Mobile
    } else {
        NumberKind::Fixed
    }
}

/// Splits a canonical number into area and subscriber segments.
///
/// Mobile numbers give a 3-digit area with its trunk zero restored and a
/// 6-digit number, everything else a 1-digit area and a 7-digit number.
///
/// # Errors
/// [`PreconditionError`] when `number` is not eight ASCII digits.
pub fn classify(number: &str) -> Result<ParsedNumber> {
    classify_with(&PHONY_REG_EXPS, number)
}

pub(super) fn classify_with(reg_exps: &PhonyRegExps, number: &str) -> Result<ParsedNumber> {
    if !is_canonical(number) {
        return Err(PreconditionError::new(number).into());
    }

    let kind = number_kind(number);
    let split_pattern = match kind {
        NumberKind::Mobile => &reg_exps.mobile_split_pattern,
        NumberKind::Fixed => &reg_exps.fixed_split_pattern,
    };
    // Both patterns accept any eight digits of their kind.
    let captures = split_pattern
        .full_captures(number)
        .ok_or_else(|| PreconditionError::new(number))?;
    let (Some(area), Some(subscriber)) = (captures.name(AREA_GROUP), captures.name(NUMBER_GROUP)) else {
        return Err(PreconditionError::new(number).into());
    };

    let area = match kind {
        NumberKind::Mobile => {
            let area = area.as_str();
            fast_cat::concat_str!(TRUNK_PREFIX, area)
        }
        NumberKind::Fixed => area.as_str().to_owned(),
    };
    trace!("Number '{number}' is a {kind} number with area '{area}'");
    Ok(ParsedNumber::new(kind, area, subscriber.as_str().to_owned()))
}
