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

use strum::{Display, EnumIter, EnumString};

/// Categorizes a national number by the block its area code belongs to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberKind {
    /// **Mobile numbers.**
    /// The first two national digits, with a trunk zero restored, form one of
    /// the mobile operator prefixes. Split as a 3-digit area and 6-digit number.
    Mobile,
    /// **Fixed-line numbers.**
    /// Everything else. Split as a 1-digit area and 7-digit number.
    Fixed,
}

/// Segment of a parsed number a template token refers to.
///
/// Parsed from the token name, so `"area"` and `"number"` are the only
/// spellings accepted.
#[derive(Debug, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Area,
    Number,
}

/// Notations accepted on input, tried in declaration order.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputShape {
    /// `+386`, `00386` or `386`, an optional `(0)`, a 1-2 digit area group and
    /// at least seven subscriber digits or spaces.
    International,
    /// A 2-3 digit area group, a space or slash, then digits with any spaces
    /// or dashes.
    LooseNational,
    /// Eight national digits in one run, optionally behind a trunk zero.
    /// This is what the national form of a number looks like.
    CompactNational,
}
