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

//! Security-ALL subscription multiplexing.
//!
//! [`SecurityAllAdapter`] intercepts "subscribe to all securities" commands
//! and lazily fans them out into one child subscription per security as
//! securities are first observed in the data stream, while presenting a
//! single logical subscription to the caller. Terminal events (errors,
//! completion, unsubscribe) fan back in onto every known child, and the
//! pending-back tracker resolves the race between a child's creation and its
//! parent's termination regardless of arrival order.
//!
//! Child subscriptions are created through a synchronous self-loop: while an
//! outbound data message is being processed, a freshly built child subscribe
//! command re-enters this stage's own inbound path (one extra level of
//! recursion per newly discovered security) before the triggering message is
//! emitted. The loop-back is what confirms the child and activates its
//! parent; it is never forwarded to the transport, because the child already
//! exists downstream implicitly via its parent subscription.

pub mod pending;
pub mod registry;


use std::{
    fmt::{Debug, Formatter},
    sync::{Arc, Mutex, MutexGuard},
};

use feedmux_model::{
    errors::SubscriptionError,
    messages::{
        DataMessage, Message, SubscribeMarketData, SubscriptionFinished, SubscriptionResponse,
        UnsubscribeMarketData,
    },
};

use crate::{
    channel::{MessageChannel, OutputHandler},
    config::SecurityAllConfig,
    generators::TransactionIdGenerator,
    multiplex::{
        pending::{PendingBack, PendingBackTracker, TerminalKind},
        registry::SubscriptionRegistry,
    },
};

/// Combined bookkeeping guarded by one mutex.
///
/// The registry and the tracker mutate under a single lock so that "child
/// created" and "parent terminated" can never be observed out of their causal
/// order.
#[derive(Debug, Default)]
struct MuxState {
    registry: SubscriptionRegistry,
    pending: PendingBackTracker,
}

impl MuxState {
    fn clear(&mut self) {
        self.registry.clear();
        self.pending.clear();
    }
}

/// Fans one ALL-securities subscription out into per-security children.
///
/// Every read-modify-write sequence over the registry and tracker is computed
/// under the state lock; messages are only emitted (forwarded downstream,
/// raised upward, or looped back into [`MessageChannel::send`]) after the
/// lock is released, since emission can re-enter this same stage.
pub struct SecurityAllAdapter {
    inner: Arc<dyn MessageChannel>,
    output: OutputHandler,
    id_gen: Arc<TransactionIdGenerator>,
    config: SecurityAllConfig,
    state: Mutex<MuxState>,
}

impl SecurityAllAdapter {
    /// Creates a new [`SecurityAllAdapter`] stage over `inner`.
    #[must_use]
    pub fn new(
        inner: Arc<dyn MessageChannel>,
        output: OutputHandler,
        id_gen: Arc<TransactionIdGenerator>,
        config: SecurityAllConfig,
    ) -> Self {
        Self {
            inner,
            output,
            id_gen,
            config,
            state: Mutex::new(MuxState::default()),
        }
    }

    /// Clears all multiplexing state, as after construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned.
    pub fn reset_state(&self) -> anyhow::Result<()> {
        self.lock_state()?.clear();
        log::info!("Cleared multiplexing state");
        Ok(())
    }

    /// Handles an outbound `msg` raised by the inner stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned or a loop-back
    /// re-submission fails.
    pub fn handle_outbound(&self, msg: Message) -> anyhow::Result<()> {
        match msg {
            Message::Disconnect | Message::ReconnectFinished => {
                self.lock_state()?.clear();
                log::info!("Cleared multiplexing state on connection transition");
                self.raise(msg);
                Ok(())
            }
            Message::Response(resp) => self.handle_response(resp),
            Message::Finished(finished) => self.handle_finished(finished),
            Message::Data(data) => self.handle_data(data),
            other => {
                self.raise(other);
                Ok(())
            }
        }
    }

    fn lock_state(&self) -> anyhow::Result<MutexGuard<'_, MuxState>> {
        self.state
            .lock()
            .map_err(|e| anyhow::anyhow!("Error acquiring lock on mux state: {e}"))
    }

    fn raise(&self, msg: Message) {
        (self.output)(msg);
    }

    // -- INBOUND HANDLERS ------------------------------------------------------------------------

    fn handle_subscribe(&self, cmd: SubscribeMarketData) -> anyhow::Result<()> {
        let transaction_id = cmd.transaction_id;
        let mut flushed: Option<Vec<Message>> = None;
        let mut terminal: Option<Message> = None;

        {
            let mut state = self.lock_state()?;
            match state.pending.resolve(transaction_id) {
                Some(PendingBack::AwaitingParent(parent_id)) => {
                    let suspended = state.registry.activate(parent_id);
                    if self.config.debug {
                        log::debug!(
                            "Child {transaction_id} confirmed, parent {parent_id} active, \
                             flushing {} suspended message(s)",
                            suspended.len(),
                        );
                    }
                    flushed = Some(suspended);
                }
                Some(PendingBack::AlreadyErrored) => {
                    terminal = Some(Message::Response(SubscriptionResponse::with_error(
                        transaction_id,
                        SubscriptionError::ParentTerminated,
                    )));
                }
                Some(PendingBack::AlreadyFinished) => {
                    terminal = Some(Message::Finished(SubscriptionFinished::new(transaction_id)));
                }
                None => {
                    if cmd.scope.is_all() {
                        if state.registry.open(transaction_id, cmd.clone()) {
                            if self.config.debug {
                                log::debug!(
                                    "Opened parent subscription {transaction_id} ({} {})",
                                    cmd.data_kind,
                                    cmd.scope,
                                );
                            }
                        } else {
                            log::warn!("Parent subscription {transaction_id} already registered");
                        }
                    }
                }
            }
        }

        if let Some(msg) = terminal {
            // Parent terminated before this child was confirmed
            self.raise(msg);
            return Ok(());
        }
        if let Some(suspended) = flushed {
            for msg in suspended {
                self.raise(msg);
            }
            // The child subscription exists downstream implicitly via its parent
            return Ok(());
        }

        self.inner.send(Message::Subscribe(cmd))
    }

    fn handle_unsubscribe(&self, cmd: UnsubscribeMarketData) -> anyhow::Result<()> {
        let parent_id = cmd.original_transaction_id;
        let mut finished: Vec<Message> = Vec::new();

        {
            let mut state = self.lock_state()?;
            let MuxState { registry, pending } = &mut *state;
            if let Some(children) = registry.close(parent_id) {
                log::info!(
                    "Unsubscribed parent {parent_id} with {} child subscription(s)",
                    children.len(),
                );
                for child_id in children {
                    if pending.contains(child_id) {
                        pending.mark_terminal(child_id, TerminalKind::Finished);
                    } else {
                        finished.push(Message::Finished(SubscriptionFinished::new(child_id)));
                    }
                }
            }
        }

        for msg in finished {
            self.raise(msg);
        }

        // The parent subscription also lives downstream
        self.inner.send(Message::Unsubscribe(cmd))
    }

    // -- OUTBOUND HANDLERS -----------------------------------------------------------------------

    fn handle_response(&self, resp: SubscriptionResponse) -> anyhow::Result<()> {
        let mut extra: Vec<Message> = Vec::new();

        if let Some(error) = &resp.error {
            let mut state = self.lock_state()?;
            let MuxState { registry, pending } = &mut *state;
            if let Some(children) = registry.close(resp.original_transaction_id) {
                log::info!(
                    "Parent {} errored with {} child subscription(s): {error}",
                    resp.original_transaction_id,
                    children.len(),
                );
                for child_id in children {
                    if pending.contains(child_id) {
                        pending.mark_terminal(child_id, TerminalKind::Errored);
                    } else {
                        extra.push(Message::Response(SubscriptionResponse::with_error(
                            child_id,
                            error.clone(),
                        )));
                    }
                }
            }
        }

        self.raise(Message::Response(resp));
        for msg in extra {
            self.raise(msg);
        }
        Ok(())
    }

    fn handle_finished(&self, finished: SubscriptionFinished) -> anyhow::Result<()> {
        let mut extra: Vec<Message> = Vec::new();

        {
            let mut state = self.lock_state()?;
            let MuxState { registry, pending } = &mut *state;
            if let Some(children) = registry.close(finished.original_transaction_id) {
                log::info!(
                    "Parent {} finished with {} child subscription(s)",
                    finished.original_transaction_id,
                    children.len(),
                );
                for child_id in children {
                    if pending.contains(child_id) {
                        pending.mark_terminal(child_id, TerminalKind::Finished);
                    } else {
                        extra.push(Message::Finished(SubscriptionFinished::new(child_id)));
                    }
                }
            }
        }

        self.raise(Message::Finished(finished));
        for msg in extra {
            self.raise(msg);
        }
        Ok(())
    }

    fn handle_data(&self, mut msg: DataMessage) -> anyhow::Result<()> {
        let mut loopback: Option<SubscribeMarketData> = None;
        let forward: Option<Message>;

        {
            let mut state = self.lock_state()?;
            let MuxState { registry, pending } = &mut *state;

            // First registered parent in the id list wins; further ALL
            // parents on the same message are left untouched.
            let parent_id = msg
                .subscription_ids
                .iter()
                .copied()
                .find(|id| registry.contains(*id));

            match parent_id {
                None => forward = Some(Message::Data(msg)),
                Some(parent_id) => {
                    let security_id = msg.security_id;
                    if let Some((child_id, is_new)) =
                        registry.resolve_child(parent_id, security_id, &self.id_gen)
                    {
                        if is_new {
                            if let Some(entry) = registry.get(parent_id) {
                                loopback =
                                    Some(entry.template().to_child(security_id, child_id));
                            }
                            if !pending.track(child_id, parent_id) {
                                log::warn!(
                                    "Pending-back entry already exists for child {child_id}"
                                );
                            }
                            if self.config.debug {
                                log::debug!(
                                    "Minted child {child_id} for parent {parent_id} \
                                     security {security_id}",
                                );
                            }
                        }

                        msg.subscription_ids.retain(|id| *id != parent_id);
                        msg.subscription_ids.push(child_id);

                        forward = registry.suspend(parent_id, Message::Data(msg));
                    } else {
                        forward = Some(Message::Data(msg));
                    }
                }
            }
        }

        if let Some(cmd) = loopback {
            // Self-loop: the child subscribe re-enters this stage's inbound
            // path before the triggering message is emitted
            self.send(Message::Subscribe(cmd))?;
        }
        if let Some(msg) = forward {
            self.raise(msg);
        }
        Ok(())
    }
}

impl MessageChannel for SecurityAllAdapter {
    fn send(&self, msg: Message) -> anyhow::Result<()> {
        match msg {
            Message::Reset => {
                self.lock_state()?.clear();
                log::info!("Cleared multiplexing state on reset");
                self.inner.send(Message::Reset)
            }
            Message::Subscribe(cmd) => self.handle_subscribe(cmd),
            Message::Unsubscribe(cmd) => self.handle_unsubscribe(cmd),
            other => self.inner.send(other),
        }
    }
}

impl Debug for SecurityAllAdapter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(SecurityAllAdapter))
            .field("inner", &self.inner)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
