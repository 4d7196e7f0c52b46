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

//! Error types carried inside subscription lifecycle events.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The reason a subscription terminated unsuccessfully.
///
/// Carried inside [`SubscriptionResponse`](crate::messages::SubscriptionResponse)
/// and cloneable so that a parent-level error can fan out to every child
/// subscription.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum SubscriptionError {
    /// The transport or venue rejected the subscription request.
    #[error("subscription rejected: {reason}")]
    Rejected {
        /// The rejection reason reported by the transport.
        reason: String,
    },
    /// The parent ALL subscription terminated before this child was confirmed.
    #[error("parent subscription terminated before child activation")]
    ParentTerminated,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_display() {
        let error = SubscriptionError::Rejected {
            reason: "unknown data kind".to_string(),
        };
        assert_eq!(error.to_string(), "subscription rejected: unknown data kind");
        assert_eq!(
            SubscriptionError::ParentTerminated.to_string(),
            "parent subscription terminated before child activation"
        );
    }
}
