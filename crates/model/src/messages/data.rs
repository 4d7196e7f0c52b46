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

//! Outbound data-bearing messages.

use std::{
    any::Any,
    fmt::{Debug, Formatter},
    sync::Arc,
};

use crate::identifiers::{SecurityId, TransactionId};

/// A type-erased market-data payload.
///
/// The multiplexing layer routes on subscription and security IDs only, so
/// the payload stays opaque and cheap to clone.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// A data-bearing message routed to one or more subscriptions.
#[derive(Clone)]
pub struct DataMessage {
    /// The subscriptions this message belongs to, in routing order.
    pub subscription_ids: Vec<TransactionId>,
    /// The security the payload refers to.
    pub security_id: SecurityId,
    /// The market-data payload.
    pub payload: Payload,
}

impl DataMessage {
    /// Creates a new [`DataMessage`] instance.
    #[must_use]
    pub fn new(
        subscription_ids: Vec<TransactionId>,
        security_id: SecurityId,
        payload: Payload,
    ) -> Self {
        Self {
            subscription_ids,
            security_id,
            payload,
        }
    }
}

impl Debug for DataMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(DataMessage))
            .field("subscription_ids", &self.subscription_ids)
            .field("security_id", &self.security_id)
            .finish_non_exhaustive()
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
    fn test_debug_elides_payload() {
        let msg = DataMessage::new(
            vec![TransactionId::new(7)],
            SecurityId::new("AAPL.XNAS"),
            Arc::new(42_u64),
        );
        let repr = format!("{msg:?}");
        assert!(repr.contains("subscription_ids"));
        assert!(repr.contains(".."));
    }
}
