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

//! Registry of parent ALL subscriptions and their discovered children.

use ahash::AHashMap;
use feedmux_model::{
    enums::SubscriptionState,
    identifiers::{SecurityId, TransactionId},
    messages::{Message, SubscribeMarketData},
};
use indexmap::IndexMap;

use crate::generators::TransactionIdGenerator;

/// State held for one parent ALL subscription.
#[derive(Clone, Debug)]
pub struct RegistryEntry {
    template: SubscribeMarketData,
    children: IndexMap<SecurityId, TransactionId>,
    suspended: Vec<Message>,
    state: SubscriptionState,
}

impl RegistryEntry {
    fn new(template: SubscribeMarketData) -> Self {
        Self {
            template,
            children: IndexMap::new(),
            suspended: Vec::new(),
            state: SubscriptionState::Dormant,
        }
    }

    /// Returns the original subscribe command the children are derived from.
    #[must_use]
    pub const fn template(&self) -> &SubscribeMarketData {
        &self.template
    }

    /// Returns the child transaction ID for `security_id`, if already minted.
    #[must_use]
    pub fn child(&self, security_id: &SecurityId) -> Option<TransactionId> {
        self.children.get(security_id).copied()
    }

    /// Returns the number of minted children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SubscriptionState {
        self.state
    }
}

/// Registry of parent ALL subscriptions keyed by transaction ID.
///
/// Mutated only while holding the owning adapter's state lock; children are
/// kept in insertion order so terminal fan-out is deterministic.
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    entries: AHashMap<TransactionId, RegistryEntry>,
}

impl SubscriptionRegistry {
    /// Creates a new empty [`SubscriptionRegistry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a Dormant entry for `parent_id`.
    ///
    /// Returns `false` and leaves the existing entry untouched if the ID is
    /// already registered.
    pub fn open(&mut self, parent_id: TransactionId, template: SubscribeMarketData) -> bool {
        if self.entries.contains_key(&parent_id) {
            return false;
        }
        self.entries.insert(parent_id, RegistryEntry::new(template));
        true
    }

    /// Removes the entry for `parent_id`, returning its known child IDs.
    pub fn close(&mut self, parent_id: TransactionId) -> Option<Vec<TransactionId>> {
        self.entries
            .remove(&parent_id)
            .map(|entry| entry.children.values().copied().collect())
    }

    /// Transitions `parent_id` from Dormant to Active, draining its buffer.
    ///
    /// Returns the suspended messages in arrival order; empty if the entry is
    /// absent or already Active, so the transition happens at most once.
    pub fn activate(&mut self, parent_id: TransactionId) -> Vec<Message> {
        match self.entries.get_mut(&parent_id) {
            Some(entry) if entry.state == SubscriptionState::Dormant => {
                entry.state = SubscriptionState::Active;
                std::mem::take(&mut entry.suspended)
            }
            _ => Vec::new(),
        }
    }

    /// Returns the child ID for `(parent_id, security_id)`, minting one via
    /// `id_gen` the first time the security is observed.
    ///
    /// The boolean is `true` for a fresh mint, in which case the caller is
    /// responsible for issuing the child subscribe request and registering it
    /// with the pending-back tracker.
    pub fn resolve_child(
        &mut self,
        parent_id: TransactionId,
        security_id: SecurityId,
        id_gen: &TransactionIdGenerator,
    ) -> Option<(TransactionId, bool)> {
        let entry = self.entries.get_mut(&parent_id)?;
        if let Some(child_id) = entry.children.get(&security_id) {
            return Some((*child_id, false));
        }
        let child_id = id_gen.next_id();
        entry.children.insert(security_id, child_id);
        Some((child_id, true))
    }

    /// Buffers `msg` when the entry for `parent_id` is Dormant.
    ///
    /// Hands the message back when the entry is Active or absent, signaling
    /// the caller to forward it immediately.
    pub fn suspend(&mut self, parent_id: TransactionId, msg: Message) -> Option<Message> {
        match self.entries.get_mut(&parent_id) {
            Some(entry) if entry.state == SubscriptionState::Dormant => {
                entry.suspended.push(msg);
                None
            }
            _ => Some(msg),
        }
    }

    /// Returns `true` if `parent_id` is a registered parent.
    #[must_use]
    pub fn contains(&self, parent_id: TransactionId) -> bool {
        self.entries.contains_key(&parent_id)
    }

    /// Returns the entry for `parent_id`, if registered.
    #[must_use]
    pub fn get(&self, parent_id: TransactionId) -> Option<&RegistryEntry> {
        self.entries.get(&parent_id)
    }

    /// Returns the number of registered parents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parents are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use feedmux_model::{
        enums::{MarketDataKind, SecurityScope},
        messages::DataMessage,
    };
    use rstest::rstest;

    use super::*;

    fn template(id: u64) -> SubscribeMarketData {
        SubscribeMarketData::new(
            TransactionId::new(id),
            SecurityScope::All,
            MarketDataKind::Trades,
            None,
        )
    }

    fn data_msg(sub_id: u64, security: &str) -> Message {
        Message::Data(DataMessage::new(
            vec![TransactionId::new(sub_id)],
            SecurityId::new(security),
            std::sync::Arc::new(()),
        ))
    }

    #[rstest]
    fn test_open_rejects_duplicate() {
        let mut registry = SubscriptionRegistry::new();
        let parent_id = TransactionId::new(1);
        assert!(registry.open(parent_id, template(1)));
        assert!(!registry.open(parent_id, template(1)));
        assert_eq!(registry.len(), 1);
    }

    #[rstest]
    fn test_close_returns_children_in_mint_order() {
        let mut registry = SubscriptionRegistry::new();
        let id_gen = TransactionIdGenerator::new(10);
        let parent_id = TransactionId::new(1);
        registry.open(parent_id, template(1));

        let (first, _) = registry
            .resolve_child(parent_id, SecurityId::new("B"), &id_gen)
            .unwrap();
        let (second, _) = registry
            .resolve_child(parent_id, SecurityId::new("A"), &id_gen)
            .unwrap();

        assert_eq!(registry.close(parent_id), Some(vec![first, second]));
        assert_eq!(registry.close(parent_id), None);
    }

    #[rstest]
    fn test_resolve_child_mints_once_per_security() {
        let mut registry = SubscriptionRegistry::new();
        let id_gen = TransactionIdGenerator::new(0);
        let parent_id = TransactionId::new(1);
        registry.open(parent_id, template(1));

        let security_id = SecurityId::new("AAPL.XNAS");
        let (child_id, is_new) = registry
            .resolve_child(parent_id, security_id, &id_gen)
            .unwrap();
        assert!(is_new);

        let (again, is_new) = registry
            .resolve_child(parent_id, security_id, &id_gen)
            .unwrap();
        assert!(!is_new);
        assert_eq!(child_id, again);
        assert_eq!(registry.get(parent_id).unwrap().child_count(), 1);
    }

    #[rstest]
    fn test_resolve_child_unknown_parent() {
        let mut registry = SubscriptionRegistry::new();
        let id_gen = TransactionIdGenerator::new(0);
        assert!(
            registry
                .resolve_child(TransactionId::new(9), SecurityId::new("X"), &id_gen)
                .is_none()
        );
    }

    #[rstest]
    fn test_suspend_buffers_only_while_dormant() {
        let mut registry = SubscriptionRegistry::new();
        let parent_id = TransactionId::new(1);
        registry.open(parent_id, template(1));

        assert!(registry.suspend(parent_id, data_msg(1, "A")).is_none());
        assert!(registry.suspend(parent_id, data_msg(1, "B")).is_none());

        let flushed = registry.activate(parent_id);
        assert_eq!(flushed.len(), 2);

        // Active entries no longer buffer
        assert!(registry.suspend(parent_id, data_msg(1, "C")).is_some());
        assert!(registry.activate(parent_id).is_empty());
    }

    #[rstest]
    fn test_activate_absent_is_noop() {
        let mut registry = SubscriptionRegistry::new();
        assert!(registry.activate(TransactionId::new(1)).is_empty());
    }
}
