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

use thiserror::Error;

use crate::burn::{MsgDepositForBurn, MsgDepositForBurnWithCaller};

/// Errors reported by the CCTP keeper. The text of each variant ends up in the error acknowledgement, so
/// implementations should keep [`CctpKeeperError::Rejected`] reasons human readable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CctpKeeperError {
    #[error("Burning and minting are paused")]
    Paused,
    #[error("Burning `{0}` is not supported")]
    UnsupportedToken(String),
    #[error("Burn amount exceeds the per message limit")]
    AmountExceedsLimit,
    #[error("Insufficient funds to burn")]
    InsufficientFunds,
    #[error("{0}")]
    Rejected(String),
}

/// Returned by the keeper once the tokens have been burned and the message for the destination domain emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositForBurnResponse {
    pub nonce: u64,
}

/// The CCTP keeper. It burns the originator's tokens and emits the message that lets the mint recipient claim
/// them on the destination domain. How it does that is up to the host.
pub trait CctpKeeper {
    fn deposit_for_burn(&mut self, msg: MsgDepositForBurn) -> Result<DepositForBurnResponse, CctpKeeperError>;

    fn deposit_for_burn_with_caller(
        &mut self,
        msg: MsgDepositForBurnWithCaller,
    ) -> Result<DepositForBurnResponse, CctpKeeperError>;
}

impl<K: CctpKeeper + ?Sized> CctpKeeper for &mut K {
    fn deposit_for_burn(&mut self, msg: MsgDepositForBurn) -> Result<DepositForBurnResponse, CctpKeeperError> {
        (**self).deposit_for_burn(msg)
    }

    fn deposit_for_burn_with_caller(
        &mut self,
        msg: MsgDepositForBurnWithCaller,
    ) -> Result<DepositForBurnResponse, CctpKeeperError> {
        (**self).deposit_for_burn_with_caller(msg)
    }
}

impl<K: CctpKeeper + ?Sized> CctpKeeper for Box<K> {
    fn deposit_for_burn(&mut self, msg: MsgDepositForBurn) -> Result<DepositForBurnResponse, CctpKeeperError> {
        (**self).deposit_for_burn(msg)
    }

    fn deposit_for_burn_with_caller(
        &mut self,
        msg: MsgDepositForBurnWithCaller,
    ) -> Result<DepositForBurnResponse, CctpKeeperError> {
        (**self).deposit_for_burn_with_caller(msg)
    }
}
