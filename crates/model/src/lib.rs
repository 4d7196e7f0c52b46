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

//! Message and identifier model for the feedmux market-data adapter chain.
//!
//! The `feedmux-model` crate defines the vocabulary shared by every stage of
//! an adapter chain: strongly-typed identifiers, subscription scopes and
//! lifecycle states, the command and event message shapes, and the error type
//! carried inside subscription responses.
//!
//! The crate is deliberately free of any routing or transport logic so that
//! chain stages, mocks, and downstream consumers can all depend on it without
//! pulling in machinery they do not need.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod correctness;
pub mod enums;
pub mod errors;
pub mod identifiers;
pub mod messages;
