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

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhonyError {
    #[error("Input not set")]
    InputMissing,
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("{0}")]
    Precondition(#[from] PreconditionError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input matched none of the accepted notations.
    #[error("Input does not match any accepted phone number shape")]
    NoMatchingShape,
    /// Input matched a notation but did not yield a national number of
    /// the expected length.
    #[error("Normalized number has {0} digits")]
    InvalidLength(usize),
}

/// A value handed to the classifier that is not a canonical number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected a canonical number of 8 digits, got {given:?}")]
pub struct PreconditionError {
    pub given: String,
}

impl PreconditionError {
    pub fn new(given: impl Into<String>) -> Self {
        Self { given: given.into() }
    }
}

