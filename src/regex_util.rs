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

use regex::{Captures, Regex};

pub trait RegexFullMatch {
    /// Captures of a match spanning the whole of `s`, regardless of whether
    /// the pattern itself is anchored.
    fn full_captures<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
}

impl RegexFullMatch for Regex {
    fn full_captures<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let whole = captures.get(0)?;
        if whole.start() != 0 || whole.end() != s.len() {
            return None;
        }
        Some(captures)
    }
}
