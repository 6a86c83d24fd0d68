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

//! The callbacks a port-bound application receives from the channel layer.

use autocctp_common_types::{acknowledgement::Acknowledgement, packet::Packet};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Unordered,
    Ordered,
}

/// The other end of a channel. `channel_id` is unknown until the counterparty has answered the handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterparty {
    pub port_id: String,
    pub channel_id: Option<String>,
}

/// Arguments of the first two steps of the opening handshake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOpen {
    pub order: Order,
    pub connection_hops: Vec<String>,
    pub port_id: String,
    pub channel_id: String,
    pub counterparty: Counterparty,
    pub version: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IbcModuleError {
    #[error("Invalid channel version `{0}`")]
    InvalidVersion(String),
    #[error("Channel `{0}` cannot be closed by the user")]
    InvalidChannelClose(String),
    #[error("Invalid acknowledgement: {0}")]
    InvalidAcknowledgement(String),
}

/// An application bound to a port. Channel handshake callbacks return the negotiated version; packet callbacks
/// other than receive report failure as an error.
pub trait IbcModule {
    fn on_chan_open_init(&mut self, open: &ChannelOpen) -> Result<String, IbcModuleError>;

    fn on_chan_open_try(&mut self, open: &ChannelOpen, counterparty_version: &str) -> Result<String, IbcModuleError>;

    fn on_chan_open_ack(
        &mut self,
        port_id: &str,
        channel_id: &str,
        counterparty_channel_id: &str,
        counterparty_version: &str,
    ) -> Result<(), IbcModuleError>;

    fn on_chan_open_confirm(&mut self, port_id: &str, channel_id: &str) -> Result<(), IbcModuleError>;

    fn on_chan_close_init(&mut self, port_id: &str, channel_id: &str) -> Result<(), IbcModuleError>;

    fn on_chan_close_confirm(&mut self, port_id: &str, channel_id: &str) -> Result<(), IbcModuleError>;

    /// Receiving never fails outright: every failure is reported through an error acknowledgement.
    fn on_recv_packet(&mut self, packet: &Packet, relayer: &str) -> Acknowledgement;

    fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &[u8],
        relayer: &str,
    ) -> Result<(), IbcModuleError>;

    fn on_timeout_packet(&mut self, packet: &Packet, relayer: &str) -> Result<(), IbcModuleError>;
}
