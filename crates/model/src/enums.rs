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

//! Enumerations for the feedmux domain model.

use std::fmt::Formatter;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::identifiers::SecurityId;

/// The security scope of a market-data subscription.
///
/// An explicit tag replaces the wire-level convention of "no security ID means
/// every security", so scope checks can never be confused with a default value.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityScope {
    /// The subscription covers every security of its data kind.
    All,
    /// The subscription covers a single security.
    Security(SecurityId),
}

impl SecurityScope {
    /// Returns `true` if the scope covers all securities.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns the single security ID for a narrowed scope.
    #[must_use]
    pub const fn security_id(&self) -> Option<SecurityId> {
        match self {
            Self::All => None,
            Self::Security(security_id) => Some(*security_id),
        }
    }
}

impl std::fmt::Display for SecurityScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "ALL"),
            Self::Security(security_id) => write!(f, "{security_id}"),
        }
    }
}

/// The kind of market data a subscription delivers.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketDataKind {
    /// Executed trade ticks.
    Trades,
    /// Top-of-book quote ticks.
    Quotes,
    /// Order book depth updates.
    Depth,
    /// Aggregated candles.
    Candles,
}

/// The lifecycle state of a parent ALL subscription.
///
/// A parent starts `Dormant` and becomes `Active` when its first child
/// subscription is confirmed; messages arriving while `Dormant` are buffered.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionState {
    /// Opened but not yet confirmed; data messages are buffered.
    #[default]
    Dormant,
    /// Confirmed; data messages flow through immediately.
    Active,
}
