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

use autocctp_common_types::{address::AddressError, amount::Amount};
use thiserror::Error;

use crate::{
    burn::{BurnRequestError, CctpKeeperError},
    transfer::TransferDecodeError,
};

/// Why a transfer that asked to be routed was not burned. The `Display` text is the reason carried in the error
/// acknowledgement.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("cctp routing is inactive")]
    RoutingInactive,
    #[error("burn amount {burn} exceeds the transferred amount {transferred}")]
    BurnAmountExceedsTransfer { burn: Amount, transferred: Amount },
    #[error("address `{0}` is blocked from cctp routing")]
    BlockedAddress(String),
    #[error("destination domain {0} is not allowed")]
    DestinationDomainNotAllowed(u32),
    #[error("invalid burn originator: {0}")]
    InvalidOriginator(#[from] AddressError),
    #[error("invalid burn request: {0}")]
    InvalidBurnRequest(#[from] BurnRequestError),
    #[error("cctp burn failed: {0}")]
    Keeper(#[from] CctpKeeperError),
}

/// Every way receiving a packet can fail after the transfer application was consulted or instead of it
#[derive(Debug, Error)]
pub enum AutoCctpError {
    #[error("invalid transfer packet data: {0}")]
    Decode(#[from] TransferDecodeError),
    #[error("{0}")]
    Routing(#[from] RoutingError),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_keeps_the_keeper_text() {
        let err = AutoCctpError::from(RoutingError::from(CctpKeeperError::Rejected(
            "minter allowance exceeded".to_string(),
        )));
        assert_eq!(err.to_string(), "cctp burn failed: minter allowance exceeded");
    }

    #[test]
    fn it_describes_oversized_burns() {
        let err = RoutingError::BurnAmountExceedsTransfer {
            burn: Amount::from(100u64),
            transferred: Amount::from(50u64),
        };
        assert_eq!(err.to_string(), "burn amount 100 exceeds the transferred amount 50");
    }

    #[test]
    fn it_prefixes_decode_failures() {
        let err = AutoCctpError::from(TransferDecodeError::ZeroAmount);
        assert_eq!(
            err.to_string(),
            "invalid transfer packet data: Transfer amount must be positive"
        );
    }
}
