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

//! Entry point for the callbacks middleware, which notifies a contract keeper about packet lifecycle events
//! instead of wrapping the transfer application directly.

use autocctp_common_types::{
    acknowledgement::Acknowledgement,
    address::{AccountAddress, AddressError},
    packet::Packet,
};
use log::*;
use thiserror::Error;

use crate::{
    burn::CctpKeeper,
    dispatcher::BurnDispatcher,
    error::RoutingError,
    policy::RoutingPolicy,
    transfer::{TransferDecodeError, TransferRecord},
};

const LOG_TARGET: &str = "autocctp::callbacks";

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("Invalid contract address: {0}")]
    InvalidContractAddress(#[from] AddressError),
    #[error("invalid transfer packet data: {0}")]
    Decode(#[from] TransferDecodeError),
    #[error("on destination chain callback: {0}")]
    Routing(#[from] RoutingError),
}

/// Receives packet lifecycle events from the callbacks middleware. Each callback runs inside the packet's cached
/// unit of work; returning an error discards the callback's writes.
pub trait ContractKeeper {
    fn ibc_send_packet_callback(
        &mut self,
        packet: &Packet,
        contract_address: &str,
        packet_sender_address: &str,
    ) -> Result<(), CallbackError>;

    fn ibc_on_acknowledgement_packet_callback(
        &mut self,
        packet: &Packet,
        acknowledgement: &[u8],
        relayer: &str,
        contract_address: &str,
        packet_sender_address: &str,
    ) -> Result<(), CallbackError>;

    fn ibc_on_timeout_packet_callback(
        &mut self,
        packet: &Packet,
        relayer: &str,
        contract_address: &str,
        packet_sender_address: &str,
    ) -> Result<(), CallbackError>;

    /// Called once the transfer application has handled `packet` and written `acknowledgement`
    fn ibc_receive_packet_callback(
        &mut self,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        contract_address: &str,
    ) -> Result<(), CallbackError>;
}

/// Routes received transfers through the CCTP keeper from the receive callback. Only the receive callback does
/// anything; the others are accepted and ignored.
pub struct AutoCctpCallbacks<K, P> {
    keeper: K,
    policy: P,
}

impl<K, P> AutoCctpCallbacks<K, P> {
    pub fn new(keeper: K, policy: P) -> Self {
        Self { keeper, policy }
    }
}

impl<K, P> ContractKeeper for AutoCctpCallbacks<K, P>
where
    K: CctpKeeper,
    P: RoutingPolicy,
{
    fn ibc_send_packet_callback(&mut self, _: &Packet, _: &str, _: &str) -> Result<(), CallbackError> {
        Ok(())
    }

    fn ibc_on_acknowledgement_packet_callback(
        &mut self,
        _: &Packet,
        _: &[u8],
        _: &str,
        _: &str,
        _: &str,
    ) -> Result<(), CallbackError> {
        Ok(())
    }

    fn ibc_on_timeout_packet_callback(&mut self, _: &Packet, _: &str, _: &str, _: &str) -> Result<(), CallbackError> {
        Ok(())
    }

    fn ibc_receive_packet_callback(
        &mut self,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        contract_address: &str,
    ) -> Result<(), CallbackError> {
        // the receiver is never the sender, so only the contract address can be checked
        AccountAddress::from_bech32(contract_address)?;

        if !acknowledgement.is_success() {
            debug!(
                target: LOG_TARGET,
                "Not routing packet #{}, the transfer was not credited: {}", packet.sequence, acknowledgement
            );
            return Ok(());
        }

        let record = TransferRecord::decode(packet.data())?;
        let response = BurnDispatcher::new(&mut self.keeper, &self.policy).route(packet, &record)?;
        if let Some(response) = response {
            info!(
                target: LOG_TARGET,
                "Routed packet #{} for contract {} through cctp (nonce {})",
                packet.sequence,
                contract_address,
                response.nonce
            );
        }
        Ok(())
    }
}
