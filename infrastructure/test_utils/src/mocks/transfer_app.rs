// Copyright 2024. The Tari Project
//
// Redistribution and use in source and binary forms, with or without modification, are permitted provided that the
// following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this list of conditions and the following
// disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice, this list of conditions and the
// following disclaimer in the documentation and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors may be used to endorse or promote
// products derived from this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES,
// INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
// SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY,
// WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE
// USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::sync::{Arc, Mutex};

use autocctp::{ChannelOpen, IbcModule, IbcModuleError};
use autocctp_common_types::{acknowledgement::Acknowledgement, packet::Packet};

pub fn mock_transfer_app() -> MockTransferApp {
    MockTransferApp::new()
}

struct State {
    ack: Acknowledgement,
    received: Vec<Packet>,
    acknowledged: Vec<(Packet, Vec<u8>)>,
    timed_out: Vec<Packet>,
    channel_calls: Vec<String>,
}

/// Stands in for the transfer application: acknowledges every packet with a preset acknowledgement and records
/// every callback it receives. Clones share state.
#[derive(Clone)]
pub struct MockTransferApp {
    state: Arc<Mutex<State>>,
}

impl MockTransferApp {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                ack: Acknowledgement::transfer_success(),
                received: Vec::new(),
                acknowledged: Vec::new(),
                timed_out: Vec::new(),
                channel_calls: Vec::new(),
            })),
        }
    }

    /// Acknowledge every received packet with `ack` from now on
    pub fn set_ack(&self, ack: Acknowledgement) {
        self.state.lock().unwrap().ack = ack;
    }

    pub fn received_count(&self) -> usize {
        self.state.lock().unwrap().received.len()
    }

    pub fn acknowledged_packets(&self) -> Vec<(Packet, Vec<u8>)> {
        self.state.lock().unwrap().acknowledged.clone()
    }

    pub fn timed_out_packets(&self) -> Vec<Packet> {
        self.state.lock().unwrap().timed_out.clone()
    }

    /// Handshake callbacks in the order they arrived, e.g. `"open_ack transfer/channel-0"`
    pub fn channel_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().channel_calls.clone()
    }

    fn record_channel_call(&self, call: &str, port_id: &str, channel_id: &str) {
        self.state
            .lock()
            .unwrap()
            .channel_calls
            .push(format!("{} {}/{}", call, port_id, channel_id));
    }
}

impl Default for MockTransferApp {
    fn default() -> Self {
        Self::new()
    }
}

impl IbcModule for MockTransferApp {
    fn on_chan_open_init(&mut self, open: &ChannelOpen) -> Result<String, IbcModuleError> {
        self.record_channel_call("open_init", &open.port_id, &open.channel_id);
        Ok(open.version.clone())
    }

    fn on_chan_open_try(&mut self, open: &ChannelOpen, counterparty_version: &str) -> Result<String, IbcModuleError> {
        self.record_channel_call("open_try", &open.port_id, &open.channel_id);
        if counterparty_version != open.version {
            return Err(IbcModuleError::InvalidVersion(counterparty_version.to_string()));
        }
        Ok(counterparty_version.to_string())
    }

    fn on_chan_open_ack(
        &mut self,
        port_id: &str,
        channel_id: &str,
        _: &str,
        _: &str,
    ) -> Result<(), IbcModuleError> {
        self.record_channel_call("open_ack", port_id, channel_id);
        Ok(())
    }

    fn on_chan_open_confirm(&mut self, port_id: &str, channel_id: &str) -> Result<(), IbcModuleError> {
        self.record_channel_call("open_confirm", port_id, channel_id);
        Ok(())
    }

    fn on_chan_close_init(&mut self, port_id: &str, channel_id: &str) -> Result<(), IbcModuleError> {
        self.record_channel_call("close_init", port_id, channel_id);
        Err(IbcModuleError::InvalidChannelClose(channel_id.to_string()))
    }

    fn on_chan_close_confirm(&mut self, port_id: &str, channel_id: &str) -> Result<(), IbcModuleError> {
        self.record_channel_call("close_confirm", port_id, channel_id);
        Ok(())
    }

    fn on_recv_packet(&mut self, packet: &Packet, _: &str) -> Acknowledgement {
        let mut state = self.state.lock().unwrap();
        state.received.push(packet.clone());
        state.ack.clone()
    }

    fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &[u8],
        _: &str,
    ) -> Result<(), IbcModuleError> {
        Acknowledgement::from_bytes(acknowledgement)
            .map_err(|err| IbcModuleError::InvalidAcknowledgement(err.to_string()))?;
        self.state
            .lock()
            .unwrap()
            .acknowledged
            .push((packet.clone(), acknowledgement.to_vec()));
        Ok(())
    }

    fn on_timeout_packet(&mut self, packet: &Packet, _: &str) -> Result<(), IbcModuleError> {
        self.state.lock().unwrap().timed_out.push(packet.clone());
        Ok(())
    }
}
