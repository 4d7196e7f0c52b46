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

//! The pipeline-stage seam for composing message adapters.
//!
//! A chain is built by one level of composition per stage: each stage holds
//! the next stage toward the transport as a [`MessageChannel`], and receives
//! an [`OutputHandler`] through which it raises events toward the caller.
//! Outbound events produced by the inner stage are wired by the chain owner
//! into the outer stage's outbound entry point.

use std::{fmt::Debug, sync::Arc};

use feedmux_model::messages::Message;

/// An inbound-facing stage in a message adapter chain.
pub trait MessageChannel: Debug + Send + Sync {
    /// Handles `msg` traveling toward the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be processed or forwarded.
    fn send(&self, msg: Message) -> anyhow::Result<()>;
}

/// Handler invoked for every outbound message raised toward the caller.
pub type OutputHandler = Arc<dyn Fn(Message) + Send + Sync>;
