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

use std::{fmt, sync::OnceLock};

use log::trace;

use super::{
    classifier::classify,
    enums::NumberKind,
    errors::PhonyError,
    formatter::{group_digits, render, FormatTemplate},
    helper_constants::{
        COUNTRY_CALLING_CODE, DISPLAY_PREFIX, FIXED_DISPLAY_GROUPS, INTERNATIONAL_DIALLING_PREFIX,
        MOBILE_DISPLAY_GROUPS, RFC3966_PREFIX, TRUNK_PREFIX,
    },
    helper_types::{CanonicalNumber, ParsedNumber},
    normalizer::normalize,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, PhonyError>;

/// A Slovenian phone number as entered by a user.
///
/// The raw input is kept as is. Its canonical form and classification are
/// computed on first use and cached for the lifetime of the value, so every
/// accessor is cheap after the first one. Invalid input surfaces as an error
/// from each accessor rather than at construction.
///
/// ```
/// use phony::PhoneNumber;
///
/// let number = PhoneNumber::new("031/123-456");
/// assert_eq!(number.to_full().unwrap(), "0038631123456");
/// assert_eq!(number.to_display().unwrap(), "+386 (0)31 123 456");
/// ```
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    raw: String,
    canonical: OnceLock<Result<CanonicalNumber>>,
    parsed: OnceLock<Result<ParsedNumber>>,
}

/// Every representation of a number at once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhoneSummary {
    /// Input as given.
    pub raw: String,
    /// Canonical national number, without trunk zero.
    pub normal: String,
    /// National number with trunk zero.
    pub short: String,
    /// International dialling form.
    pub full: String,
    /// `tel:` URI.
    pub href: String,
    /// Formatted with the requested template, or the display format.
    pub display: String,
}

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            canonical: OnceLock::new(),
            parsed: OnceLock::new(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Canonical eight digit national number.
    pub fn canonical(&self) -> Result<&CanonicalNumber> {
        self.canonical
            .get_or_init(|| normalize(&self.raw))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Kind, area and subscriber segments of the number.
    pub fn to_parsed(&self) -> Result<&ParsedNumber> {
        self.parsed
            .get_or_init(|| classify(self.canonical()?.as_str()))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn kind(&self) -> Result<NumberKind> {
        Ok(self.to_parsed()?.kind())
    }

    pub fn is_mobile(&self) -> Result<bool> {
        Ok(self.to_parsed()?.is_mobile())
    }

    /// National form with trunk zero, e.g. `031123456`.
    pub fn to_normal(&self) -> Result<String> {
        let canonical = self.canonical()?.as_str();
        Ok(fast_cat::concat_str!(TRUNK_PREFIX, canonical))
    }

    /// International dialling form, e.g. `0038631123456`.
    pub fn to_full(&self) -> Result<String> {
        let canonical = self.canonical()?.as_str();
        Ok(fast_cat::concat_str!(INTERNATIONAL_DIALLING_PREFIX, COUNTRY_CALLING_CODE, canonical))
    }

    /// `tel:` link target, e.g. `tel:0038631123456`.
    pub fn to_href(&self) -> Result<String> {
        let full = self.to_full()?;
        Ok(fast_cat::concat_str!(RFC3966_PREFIX, &full))
    }

    /// Human readable form: `+386 (0)31 123 456` for mobile numbers,
    /// `+386 (0)1 23 45 678` for fixed-line ones.
    pub fn to_display(&self) -> Result<String> {
        let canonical = self.canonical()?.as_str();
        let grouped = match self.kind()? {
            NumberKind::Mobile => group_digits(canonical, &MOBILE_DISPLAY_GROUPS),
            NumberKind::Fixed => group_digits(canonical, &FIXED_DISPLAY_GROUPS),
        };
        Ok(fast_cat::concat_str!(DISPLAY_PREFIX, &grouped))
    }

    /// Renders the number through a template, see [`crate::render`] for the
    /// token syntax. A `[mobile, fixed]` pair picks the template by kind;
    /// [`FormatTemplate::Display`] falls back to [`Self::to_display`].
    ///
    /// ```
    /// use phony::PhoneNumber;
    ///
    /// let number = PhoneNumber::new("01 234 5678");
    /// let formatted = number.to_format([
    ///     "{area} {number:3} {number:3}",
    ///     "{area} {number:2} {number:2} {number:3}",
    /// ]);
    /// assert_eq!(formatted.unwrap(), "1 23 45 678");
    /// ```
    pub fn to_format<'t>(&self, template: impl Into<FormatTemplate<'t>>) -> Result<String> {
        let parsed = self.to_parsed()?;
        match template.into().select(parsed.kind()) {
            Some(template) => {
                trace!("Formatting '{}' with template '{template}'", self.raw);
                Ok(render(template, parsed))
            }
            None => self.to_display(),
        }
    }

    pub fn to_object<'t>(&self, template: impl Into<FormatTemplate<'t>>) -> Result<PhoneSummary> {
        Ok(PhoneSummary {
            raw: self.raw.clone(),
            normal: self.canonical()?.as_str().to_owned(),
            short: self.to_normal()?,
            full: self.to_full()?,
            href: self.to_href()?,
            display: self.to_format(template)?,
        })
    }
}

impl From<&str> for PhoneNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PhoneNumber {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Writes the display form, or the raw input when it cannot be parsed.
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_display() {
            Ok(display) => f.write_str(&display),
            Err(_) => f.write_str(&self.raw),
        }
    }
}
