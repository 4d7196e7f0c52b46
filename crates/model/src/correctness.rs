// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Functions for condition checks similar to the *design by contract* philosophy.
//!
//! Every function returns an `anyhow::Result` so that failures can either be
//! propagated or, for invariants that must hold by construction, unwrapped
//! with the standard [`FAILED`] message.

/// Standard message prefix for condition check failures.
pub const FAILED: &str = "Condition failed";

/// Checks the string `s` has semantic meaning for use as an identifier.
///
/// # Errors
///
/// Returns an error if:
/// - `s` is empty or consists solely of whitespace.
/// - `s` contains non-ASCII characters.
pub fn check_valid_string(s: &str, param: &str) -> anyhow::Result<()> {
    if s.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty");
    }
    if s.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace");
    }
    if !s.is_ascii() {
        anyhow::bail!("invalid string for '{param}', contained non-ASCII chars");
    }
    Ok(())
}

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error with `fail_msg` if the predicate is false.
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("AAPL")]
    #[case("ES.U4")]
    #[case("BTC-USDT")]
    fn test_check_valid_string_ok(#[case] s: &str) {
        assert!(check_valid_string(s, "s").is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("日経225")]
    fn test_check_valid_string_err(#[case] s: &str) {
        assert!(check_valid_string(s, "s").is_err());
    }

    #[rstest]
    fn test_check_predicate_true() {
        assert!(check_predicate_true(true, "reason").is_ok());
        assert!(check_predicate_true(false, "reason").is_err());
    }
}
