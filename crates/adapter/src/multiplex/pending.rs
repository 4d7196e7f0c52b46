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

//! Pending-back tracking for in-flight child subscriptions.

use ahash::AHashMap;
use feedmux_model::identifiers::TransactionId;

/// The fate of an in-flight child subscription relative to its parent.
///
/// Explicit variants rather than sentinel values: a child is either still
/// awaiting its parent's confirmation, or the parent already terminated and
/// the matching terminal event is owed to the child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingBack {
    /// Child minted; parent alive and awaiting the loop-back acknowledgement.
    AwaitingParent(TransactionId),
    /// Parent errored before the child's loop-back arrived.
    AlreadyErrored,
    /// Parent finished before the child's loop-back arrived.
    AlreadyFinished,
}

/// The kind of terminal event recorded against a pending child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalKind {
    /// The parent terminated with an error.
    Errored,
    /// The parent finished normally (completion or unsubscribe).
    Finished,
}

/// Transient map resolving the create-versus-terminate race per child.
///
/// Exactly one entry exists per child from the moment it is minted until its
/// fate is determined, whichever of (parent activates, parent already
/// terminal) happens first.
#[derive(Debug, Default)]
pub struct PendingBackTracker {
    entries: AHashMap<TransactionId, PendingBack>,
}

impl PendingBackTracker {
    /// Creates a new empty [`PendingBackTracker`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `child_id` as awaiting `parent_id`.
    ///
    /// Returns `false` and leaves the existing entry untouched on a duplicate
    /// child ID (child IDs are unique by construction, so this signals a
    /// caller bug).
    pub fn track(&mut self, child_id: TransactionId, parent_id: TransactionId) -> bool {
        if self.entries.contains_key(&child_id) {
            return false;
        }
        self.entries
            .insert(child_id, PendingBack::AwaitingParent(parent_id));
        true
    }

    /// Removes and returns the entry for `child_id`.
    ///
    /// `None` means the ID was never minted by this component and the message
    /// referencing it belongs to an ordinary, non-multiplexed subscription.
    pub fn resolve(&mut self, child_id: TransactionId) -> Option<PendingBack> {
        self.entries.remove(&child_id)
    }

    /// Overwrites an `AwaitingParent` entry with the terminal sentinel for
    /// `kind`, deferring the terminal event until the child's own loop-back
    /// acknowledgement arrives.
    pub fn mark_terminal(&mut self, child_id: TransactionId, kind: TerminalKind) {
        if let Some(entry) = self.entries.get_mut(&child_id)
            && matches!(entry, PendingBack::AwaitingParent(_))
        {
            *entry = match kind {
                TerminalKind::Errored => PendingBack::AlreadyErrored,
                TerminalKind::Finished => PendingBack::AlreadyFinished,
            };
        }
    }

    /// Returns `true` if `child_id` is tracked.
    #[must_use]
    pub fn contains(&self, child_id: TransactionId) -> bool {
        self.entries.contains_key(&child_id)
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
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_track_and_resolve() {
        let mut tracker = PendingBackTracker::new();
        let child_id = TransactionId::new(2);
        let parent_id = TransactionId::new(1);

        assert!(tracker.track(child_id, parent_id));
        assert_eq!(
            tracker.resolve(child_id),
            Some(PendingBack::AwaitingParent(parent_id))
        );
        assert_eq!(tracker.resolve(child_id), None);
    }

    #[rstest]
    fn test_track_rejects_duplicate() {
        let mut tracker = PendingBackTracker::new();
        let child_id = TransactionId::new(2);

        assert!(tracker.track(child_id, TransactionId::new(1)));
        assert!(!tracker.track(child_id, TransactionId::new(9)));
        assert_eq!(
            tracker.resolve(child_id),
            Some(PendingBack::AwaitingParent(TransactionId::new(1)))
        );
    }

    #[rstest]
    #[case(TerminalKind::Errored, PendingBack::AlreadyErrored)]
    #[case(TerminalKind::Finished, PendingBack::AlreadyFinished)]
    fn test_mark_terminal_overwrites_awaiting(
        #[case] kind: TerminalKind,
        #[case] expected: PendingBack,
    ) {
        let mut tracker = PendingBackTracker::new();
        let child_id = TransactionId::new(2);
        tracker.track(child_id, TransactionId::new(1));

        tracker.mark_terminal(child_id, kind);
        assert_eq!(tracker.resolve(child_id), Some(expected));
    }

    #[rstest]
    fn test_mark_terminal_untracked_is_noop() {
        let mut tracker = PendingBackTracker::new();
        tracker.mark_terminal(TransactionId::new(7), TerminalKind::Errored);
        assert!(!tracker.contains(TransactionId::new(7)));
    }

    #[rstest]
    fn test_mark_terminal_does_not_downgrade_sentinel() {
        let mut tracker = PendingBackTracker::new();
        let child_id = TransactionId::new(2);
        tracker.track(child_id, TransactionId::new(1));

        tracker.mark_terminal(child_id, TerminalKind::Errored);
        tracker.mark_terminal(child_id, TerminalKind::Finished);
        assert_eq!(tracker.resolve(child_id), Some(PendingBack::AlreadyErrored));
    }
}
