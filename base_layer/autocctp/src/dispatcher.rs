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

use autocctp_common_types::{address::AccountAddress, packet::Packet};
use log::*;

use crate::{
    burn::{BurnRequestBuilder, CctpKeeper, DepositForBurnResponse},
    denom,
    error::RoutingError,
    memo::RoutingInstruction,
    policy::RoutingPolicy,
    transfer::TransferRecord,
};

const LOG_TARGET: &str = "autocctp::dispatcher";

/// Turns the routing instruction of an already credited transfer into a single keeper call.
///
/// The dispatcher only borrows its collaborators for the duration of one packet; it holds no state of its own.
pub struct BurnDispatcher<'a, K: ?Sized, P: ?Sized> {
    keeper: &'a mut K,
    policy: &'a P,
}

impl<'a, K, P> BurnDispatcher<'a, K, P>
where
    K: CctpKeeper + ?Sized,
    P: RoutingPolicy + ?Sized,
{
    pub fn new(keeper: &'a mut K, policy: &'a P) -> Self {
        Self { keeper, policy }
    }

    /// Routes `record`, received in `packet`, if its memo asks for it.
    ///
    /// Returns `Ok(None)` when the memo carries no routing instruction. That is not an error: the transfer simply
    /// completes as an ordinary transfer.
    pub fn route(
        &mut self,
        packet: &Packet,
        record: &TransferRecord,
    ) -> Result<Option<DepositForBurnResponse>, RoutingError> {
        let instruction = match RoutingInstruction::from_memo(record.memo()) {
            Ok(instruction) => instruction,
            Err(err) => {
                trace!(
                    target: LOG_TARGET,
                    "No routing instruction in packet #{}: {}",
                    packet.sequence,
                    err
                );
                return Ok(None);
            },
        };
        let burn_token = denom::local_denom(packet, record.denom());
        self.dispatch(record, &instruction, &burn_token).map(Some)
    }

    /// Validates `instruction` against the transfer and the routing policy, then submits exactly one burn to the
    /// keeper. Nothing reaches the keeper unless every check passes.
    pub fn dispatch(
        &mut self,
        record: &TransferRecord,
        instruction: &RoutingInstruction,
        burn_token: &str,
    ) -> Result<DepositForBurnResponse, RoutingError> {
        if !self.policy.is_routing_enabled() {
            return Err(RoutingError::RoutingInactive);
        }

        let burn = instruction.burn();
        if burn.amount > record.amount() {
            return Err(RoutingError::BurnAmountExceedsTransfer {
                burn: burn.amount,
                transferred: record.amount(),
            });
        }

        for address in [record.sender(), record.receiver()] {
            if self.policy.is_address_blocked(address) {
                return Err(RoutingError::BlockedAddress(address.to_string()));
            }
        }

        if !self.policy.is_destination_domain_allowed(burn.destination_domain) {
            return Err(RoutingError::DestinationDomainNotAllowed(burn.destination_domain));
        }

        if let Some(prefix) = self.policy.required_address_prefix() {
            AccountAddress::from_bech32_with_prefix(record.receiver(), prefix)?;
        }

        let request = BurnRequestBuilder::for_instruction(record.receiver(), burn_token, instruction).build()?;
        debug!(target: LOG_TARGET, "Submitting {}", request);

        let response = request.submit(&mut *self.keeper).map_err(|err| {
            warn!(target: LOG_TARGET, "CCTP keeper refused the burn: {}", err);
            RoutingError::from(err)
        })?;
        Ok(response)
    }
}
