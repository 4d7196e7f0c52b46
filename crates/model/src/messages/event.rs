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

//! Outbound subscription lifecycle events.

use crate::{errors::SubscriptionError, identifiers::TransactionId};

/// An acknowledgement or rejection of a subscription request.
#[derive(Clone, Debug)]
pub struct SubscriptionResponse {
    /// The transaction ID of the subscription being answered.
    pub original_transaction_id: TransactionId,
    /// The rejection reason, absent on success.
    pub error: Option<SubscriptionError>,
}

impl SubscriptionResponse {
    /// Creates a new successful [`SubscriptionResponse`] instance.
    #[must_use]
    pub const fn ok(original_transaction_id: TransactionId) -> Self {
        Self {
            original_transaction_id,
            error: None,
        }
    }

    /// Creates a new rejected [`SubscriptionResponse`] instance.
    #[must_use]
    pub const fn with_error(
        original_transaction_id: TransactionId,
        error: SubscriptionError,
    ) -> Self {
        Self {
            original_transaction_id,
            error: Some(error),
        }
    }

    /// Returns `true` if the response carries no error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// A notification that a subscription delivered its last message.
#[derive(Clone, Debug)]
pub struct SubscriptionFinished {
    /// The transaction ID of the subscription that finished.
    pub original_transaction_id: TransactionId,
}

impl SubscriptionFinished {
    /// Creates a new [`SubscriptionFinished`] instance.
    #[must_use]
    pub const fn new(original_transaction_id: TransactionId) -> Self {
        Self {
            original_transaction_id,
        }
    }
}
