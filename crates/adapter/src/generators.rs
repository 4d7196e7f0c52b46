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

//! Transaction ID generation.

use std::sync::atomic::{AtomicU64, Ordering};

use feedmux_model::identifiers::TransactionId;

/// Generates monotonically increasing transaction IDs.
///
/// One generator is shared across every stage of a chain so that IDs minted
/// for child subscriptions can never collide with caller-issued IDs.
#[derive(Debug)]
pub struct TransactionIdGenerator {
    count: AtomicU64,
}

impl TransactionIdGenerator {
    /// Creates a new [`TransactionIdGenerator`] instance issuing IDs above `initial`.
    #[must_use]
    pub const fn new(initial: u64) -> Self {
        Self {
            count: AtomicU64::new(initial),
        }
    }

    /// Returns the next unique transaction ID.
    pub fn next_id(&self) -> TransactionId {
        TransactionId::new(self.count.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Returns the most recently issued raw value.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

impl Default for TransactionIdGenerator {
    fn default() -> Self {
        Self::new(0)
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
    fn test_ids_are_monotonic() {
        let generator = TransactionIdGenerator::new(0);
        let first = generator.next_id();
        let second = generator.next_id();
        assert_eq!(first, TransactionId::new(1));
        assert_eq!(second, TransactionId::new(2));
        assert_eq!(generator.count(), 2);
    }

    #[rstest]
    fn test_initial_offset() {
        let generator = TransactionIdGenerator::new(100);
        assert_eq!(generator.next_id(), TransactionId::new(101));
    }
}
