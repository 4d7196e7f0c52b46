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

//! Subscription-multiplexing machinery for market-data adapter chains.
//!
//! The centerpiece is [`multiplex::SecurityAllAdapter`], a chain stage that
//! turns one "subscribe to all securities" request into a dynamically growing
//! set of per-security child subscriptions, while presenting a single logical
//! subscription to the caller. Supporting modules provide the pipeline-stage
//! seam ([`channel`]), monotonic transaction ID generation ([`generators`]),
//! and stage configuration ([`config`]).
//!
//! The adapter performs no market-data parsing, normalization, persistence,
//! or rate limiting; it purely re-shapes subscription topology and redirects
//! message routing.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod channel;
pub mod config;
pub mod generators;
pub mod multiplex;

#[cfg(test)]
pub(crate) mod mocks;
