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

//! Test doubles for adapter-chain wiring.

use std::sync::{Arc, Mutex};

use feedmux_model::messages::Message;

use crate::channel::{MessageChannel, OutputHandler};

/// Inner stage double recording every message forwarded toward the transport.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    sent: Mutex<Vec<Message>>,
}

impl RecordingChannel {
    /// Returns a copy of the recorded messages.
    pub fn sent(&self) -> Vec<Message> {
        self.sent.lock().unwrap().clone()
    }
}

impl MessageChannel for RecordingChannel {
    fn send(&self, msg: Message) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(msg);
        Ok(())
    }
}

/// Returns an output handler recording every raised message, plus the sink.
pub fn recording_output() -> (OutputHandler, Arc<Mutex<Vec<Message>>>) {
    let raised = Arc::new(Mutex::new(Vec::new()));
    let sink = raised.clone();
    let handler: OutputHandler = Arc::new(move |msg| sink.lock().unwrap().push(msg));
    (handler, raised)
}
