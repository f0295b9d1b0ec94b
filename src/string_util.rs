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

use std::borrow::Cow;

/// Removes every occurrence of the given characters.
///
/// Returns the original slice when there is nothing to remove, so the
/// common case of an already compact group does not allocate.
pub fn strip_chars<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !chars.contains(c)).collect())
}

/// Slice of `s` from byte `start`, at most `len` bytes long. Out of range
/// positions clamp to the end of `s` instead of panicking.
///
/// Only meant for ASCII input, where bytes and characters coincide.
pub fn clamped_slice(s: &str, start: usize, len: usize) -> &str {
    let start = start.min(s.len());
    let end = start.saturating_add(len).min(s.len());
    s.get(start..end).unwrap_or_default()
}
