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

//! Routing instructions carried in a transfer memo.
//!
//! The memo is JSON with the instruction nested under `circle.cctp`:
//!
//! ```json
//! {
//!   "circle": {
//!     "cctp": {
//!       "depositForBurnWithCaller": {
//!         "destinationDomain": 0,
//!         "mintRecipient": "<base64, 32 bytes>",
//!         "amount": "100",
//!         "destinationCaller": "<base64, 32 bytes>"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Other keys are ignored so the memo can be shared with other middleware. A memo that is empty or does not
//! follow this shape carries no instruction; that is never an error for the transfer itself.

use autocctp_common_types::{amount::Amount, serializers};
use serde::Deserialize;
use thiserror::Error;

/// Why a memo carries no routing instruction
#[derive(Debug, Error)]
pub enum MemoError {
    #[error("Memo is empty")]
    Empty,
    #[error("Memo is not a routing instruction: {0}")]
    NotAnInstruction(#[from] serde_json::Error),
    #[error("Memo names no cctp action")]
    NoAction,
}

/// The burn parameters shared by both instruction shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnInstruction {
    pub destination_domain: u32,
    pub mint_recipient: Vec<u8>,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingInstruction {
    /// Burn, letting anyone on the destination domain complete the mint
    SimpleBurn(BurnInstruction),
    /// Burn, allowing only `destination_caller` to complete the mint on the destination domain
    CallerRestrictedBurn {
        burn: BurnInstruction,
        destination_caller: Vec<u8>,
    },
}

impl RoutingInstruction {
    /// Parses a transfer memo. When the memo names both actions the unrestricted burn wins.
    pub fn from_memo(memo: &str) -> Result<Self, MemoError> {
        if memo.trim().is_empty() {
            return Err(MemoError::Empty);
        }
        let memo = serde_json::from_str::<CctpMemo>(memo)?;
        let CctpActions {
            deposit_for_burn,
            deposit_for_burn_with_caller,
        } = memo.circle.cctp;

        match (deposit_for_burn, deposit_for_burn_with_caller) {
            (Some(simple), _) => Ok(RoutingInstruction::SimpleBurn(simple.into())),
            (None, Some(restricted)) => Ok(RoutingInstruction::CallerRestrictedBurn {
                burn: BurnInstruction {
                    destination_domain: restricted.destination_domain,
                    mint_recipient: restricted.mint_recipient,
                    amount: restricted.amount,
                },
                destination_caller: restricted.destination_caller,
            }),
            (None, None) => Err(MemoError::NoAction),
        }
    }

    pub fn burn(&self) -> &BurnInstruction {
        match self {
            RoutingInstruction::SimpleBurn(burn) => burn,
            RoutingInstruction::CallerRestrictedBurn { burn, .. } => burn,
        }
    }

    pub fn destination_caller(&self) -> Option<&[u8]> {
        match self {
            RoutingInstruction::SimpleBurn(_) => None,
            RoutingInstruction::CallerRestrictedBurn { destination_caller, .. } => Some(destination_caller),
        }
    }
}

// Only the cctp actions are strict. Other keys at the top level and under `circle` belong to other middleware.
#[derive(Deserialize)]
struct CctpMemo {
    circle: CircleMemo,
}

#[derive(Deserialize)]
struct CircleMemo {
    cctp: CctpActions,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CctpActions {
    #[serde(default)]
    deposit_for_burn: Option<DepositForBurnMemo>,
    #[serde(default)]
    deposit_for_burn_with_caller: Option<DepositForBurnWithCallerMemo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DepositForBurnMemo {
    destination_domain: u32,
    #[serde(with = "serializers::base64")]
    mint_recipient: Vec<u8>,
    amount: Amount,
}

impl From<DepositForBurnMemo> for BurnInstruction {
    fn from(memo: DepositForBurnMemo) -> Self {
        Self {
            destination_domain: memo.destination_domain,
            mint_recipient: memo.mint_recipient,
            amount: memo.amount,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DepositForBurnWithCallerMemo {
    destination_domain: u32,
    #[serde(with = "serializers::base64")]
    mint_recipient: Vec<u8>,
    amount: Amount,
    #[serde(with = "serializers::base64")]
    destination_caller: Vec<u8>,
}
