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

//! Messages flowing through a market-data adapter chain.
//!
//! Commands travel inbound (toward the transport), events and data travel
//! outbound (toward the caller). Every stage of a chain consumes and produces
//! the same [`Message`] enum, so stages compose without knowing about each
//! other.

pub mod command;
pub mod data;
pub mod event;

pub use command::{SubscribeMarketData, UnsubscribeMarketData};
pub use data::{DataMessage, Payload};
pub use event::{SubscriptionFinished, SubscriptionResponse};

/// A message traveling through an adapter chain.
#[derive(Clone, Debug)]
pub enum Message {
    /// An inbound market-data subscribe command.
    Subscribe(SubscribeMarketData),
    /// An inbound unsubscribe command referencing an earlier subscription.
    Unsubscribe(UnsubscribeMarketData),
    /// An outbound acknowledgement or rejection of a subscription.
    Response(SubscriptionResponse),
    /// An outbound notification that a subscription delivered its last message.
    Finished(SubscriptionFinished),
    /// An outbound data-bearing message routed to one or more subscriptions.
    Data(DataMessage),
    /// An inbound full-restart command; all per-connection state is discarded.
    Reset,
    /// An outbound notification that the transport connection dropped.
    Disconnect,
    /// An outbound notification that reconnection completed.
    ReconnectFinished,
}
