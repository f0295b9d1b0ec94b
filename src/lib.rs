//! Normalization, classification and template formatting of Slovenian
//! national phone numbers.
//!
//! ```
//! use phony::PhoneNumber;
//!
//! let number = PhoneNumber::from("+386 (0)41 234 567");
//! assert_eq!(number.to_normal().unwrap(), "041234567");
//! assert_eq!(number.to_display().unwrap(), "+386 (0)41 234 567");
//! assert_eq!(number.to_format("{area}/{number:3}-{number}").unwrap(), "041/234-567");
//! ```

mod phony;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use phony::{
    classify, is_mobile_prefix, normalize, CanonicalNumber, Field, InputShape, NumberKind,
    ParsedNumber, MOBILE_PREFIXES,
};
pub use phony::errors::{FormatError, PhonyError, PreconditionError};
pub use phony::formatter::{group_digits, render, render_tokens, tokenize, FormatTemplate, Token};
pub use phony::phony::{PhoneNumber, PhoneSummary, Result};
