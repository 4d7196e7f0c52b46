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

//! Represents a valid security ID.

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::correctness::{FAILED, check_valid_string};

/// Represents a valid security ID.
///
/// Securities are the map keys of the multiplexing layer, so the inner value
/// is interned for cheap copies and hashing.
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SecurityId(Ustr);

impl SecurityId {
    /// Creates a new [`SecurityId`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid string.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, stringify!(value))?;
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`SecurityId`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid string.
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Returns the inner identifier value.
    #[must_use]
    pub fn inner(&self) -> Ustr {
        self.0
    }

    /// Returns the inner value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for SecurityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Display for SecurityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SecurityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SecurityId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for SecurityId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for SecurityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecurityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str: &str = Deserialize::deserialize(deserializer)?;
        Ok(value_str.into())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_string_reprs() {
        let id = SecurityId::new("AAPL.XNAS");
        assert_eq!(id.as_str(), "AAPL.XNAS");
        assert_eq!(format!("{id}"), "AAPL.XNAS");
        assert_eq!(format!("{id:?}"), "\"AAPL.XNAS\"");
    }

    #[rstest]
    fn test_new_checked_rejects_empty() {
        assert!(SecurityId::new_checked("").is_err());
    }

    #[rstest]
    fn test_equality_and_interning() {
        let a = SecurityId::new("ESZ4.XCME");
        let b = SecurityId::new("ESZ4.XCME");
        assert_eq!(a, b);
        assert_eq!(a.inner(), b.inner());
    }
}
