mod helper_constants;
mod helper_types;
mod phony_regexps;
mod normalizer;
mod classifier;
pub mod errors;
pub mod enums;
pub mod formatter;
pub mod phony;

use std::sync::LazyLock;

pub use classifier::classify;
pub use enums::{Field, InputShape, NumberKind};
pub use helper_constants::{is_mobile_prefix, MOBILE_PREFIXES};
pub use helper_types::{CanonicalNumber, ParsedNumber};
pub use normalizer::normalize;
use phony_regexps::PhonyRegExps;

pub(crate) static PHONY_REG_EXPS: LazyLock<PhonyRegExps> = LazyLock::new(|| {
    PhonyRegExps::new()
});
