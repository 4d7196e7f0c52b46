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

//! Inbound subscription commands.

use indexmap::IndexMap;

use crate::{
    enums::{MarketDataKind, SecurityScope},
    identifiers::{SecurityId, TransactionId},
};

/// A command subscribing to market data for one security or for all securities.
///
/// An `All`-scoped command doubles as the template from which child commands
/// are derived, one per security observed in the stream.
#[derive(Clone, Debug)]
pub struct SubscribeMarketData {
    /// The unique transaction ID for this subscription.
    pub transaction_id: TransactionId,
    /// The securities the subscription covers.
    pub scope: SecurityScope,
    /// The kind of market data requested.
    pub data_kind: MarketDataKind,
    /// The parent subscription this command was derived from, if any.
    pub parent_id: Option<TransactionId>,
    /// Additional venue-specific filter parameters.
    pub params: Option<IndexMap<String, String>>,
}

impl SubscribeMarketData {
    /// Creates a new [`SubscribeMarketData`] instance.
    #[must_use]
    pub const fn new(
        transaction_id: TransactionId,
        scope: SecurityScope,
        data_kind: MarketDataKind,
        params: Option<IndexMap<String, String>>,
    ) -> Self {
        Self {
            transaction_id,
            scope,
            data_kind,
            parent_id: None,
            params,
        }
    }

    /// Returns a copy narrowed to `security_id` under a fresh `transaction_id`,
    /// stamped with this command's transaction ID as parent.
    #[must_use]
    pub fn to_child(&self, security_id: SecurityId, transaction_id: TransactionId) -> Self {
        Self {
            transaction_id,
            scope: SecurityScope::Security(security_id),
            data_kind: self.data_kind,
            parent_id: Some(self.transaction_id),
            params: self.params.clone(),
        }
    }
}

/// A command canceling an earlier subscription.
#[derive(Clone, Debug)]
pub struct UnsubscribeMarketData {
    /// The unique transaction ID for this command.
    pub transaction_id: TransactionId,
    /// The transaction ID of the subscription being canceled.
    pub original_transaction_id: TransactionId,
}

impl UnsubscribeMarketData {
    /// Creates a new [`UnsubscribeMarketData`] instance.
    #[must_use]
    pub const fn new(
        transaction_id: TransactionId,
        original_transaction_id: TransactionId,
    ) -> Self {
        Self {
            transaction_id,
            original_transaction_id,
        }
    }
}
