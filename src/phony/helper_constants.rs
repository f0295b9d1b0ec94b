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

/// Area codes of the mobile operator blocks, written with their trunk zero.
pub const MOBILE_PREFIXES: [&'static str; 12] = [
    "030", "040", "050", "031", "041", "051", "059", "064", "065", "068", "069", "070",
];

/// Length of a national number once trunk and country prefixes are removed.
pub const CANONICAL_NUMBER_LENGTH: usize = 8;

pub const COUNTRY_CALLING_CODE: &'static str = "386";
pub const INTERNATIONAL_DIALLING_PREFIX: &'static str = "00";
pub const TRUNK_PREFIX: &'static str = "0";
pub const TRUNK_PREFIX_CHAR: char = '0';
pub const RFC3966_PREFIX: &'static str = "tel:";

// Prefix put in front of the grouped canonical number by the display format.
// Spelled out since consts can't be concatenated; kept in step with
// COUNTRY_CALLING_CODE and TRUNK_PREFIX by a test.
pub const DISPLAY_PREFIX: &'static str = "+386 (0)";
pub const MOBILE_DISPLAY_GROUPS: [usize; 3] = [2, 3, 3];
pub const FIXED_DISPLAY_GROUPS: [usize; 4] = [1, 2, 2, 3];

// Characters people put between subscriber digits.
pub const SUBSCRIBER_SEPARATORS: [char; 2] = [' ', '-'];

/// Returns true when `prefix` (including its trunk zero) belongs to a mobile
/// operator block.
pub fn is_mobile_prefix(prefix: &str) -> bool {
    MOBILE_PREFIXES.contains(&prefix)
}
