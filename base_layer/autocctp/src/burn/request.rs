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

use std::{
    convert::TryFrom,
    fmt::{Display, Error, Formatter},
};

use autocctp_common_types::amount::Amount;
use thiserror::Error as ThisError;

use crate::{
    burn::{CctpKeeper, CctpKeeperError, DepositForBurnResponse},
    memo::RoutingInstruction,
};

/// Mint recipients and destination callers are 32 byte, left padded addresses on every domain
pub const BYTES32_LENGTH: usize = 32;

#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum BurnRequestError {
    #[error("The burn originator is empty")]
    EmptyFrom,
    #[error("The burn amount must be positive")]
    ZeroAmount,
    #[error("The mint recipient must be {expected} bytes, got {0}", expected = BYTES32_LENGTH)]
    InvalidMintRecipientLength(usize),
    #[error("The mint recipient must not be zero")]
    ZeroMintRecipient,
    #[error("The burn token is empty")]
    EmptyBurnToken,
    #[error("The destination caller must be {expected} bytes, got {0}", expected = BYTES32_LENGTH)]
    InvalidDestinationCallerLength(usize),
    #[error("The destination caller must not be zero")]
    ZeroDestinationCaller,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgDepositForBurn {
    pub from: String,
    pub amount: Amount,
    pub destination_domain: u32,
    pub mint_recipient: [u8; BYTES32_LENGTH],
    pub burn_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgDepositForBurnWithCaller {
    pub from: String,
    pub amount: Amount,
    pub destination_domain: u32,
    pub mint_recipient: [u8; BYTES32_LENGTH],
    pub burn_token: String,
    pub destination_caller: [u8; BYTES32_LENGTH],
}

/// A validated request for the CCTP keeper. Only [`BurnRequestBuilder`] produces these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BurnRequest {
    DepositForBurn(MsgDepositForBurn),
    DepositForBurnWithCaller(MsgDepositForBurnWithCaller),
}

impl BurnRequest {
    pub fn from(&self) -> &str {
        match self {
            BurnRequest::DepositForBurn(msg) => &msg.from,
            BurnRequest::DepositForBurnWithCaller(msg) => &msg.from,
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            BurnRequest::DepositForBurn(msg) => msg.amount,
            BurnRequest::DepositForBurnWithCaller(msg) => msg.amount,
        }
    }

    pub fn destination_domain(&self) -> u32 {
        match self {
            BurnRequest::DepositForBurn(msg) => msg.destination_domain,
            BurnRequest::DepositForBurnWithCaller(msg) => msg.destination_domain,
        }
    }

    pub fn mint_recipient(&self) -> &[u8; BYTES32_LENGTH] {
        match self {
            BurnRequest::DepositForBurn(msg) => &msg.mint_recipient,
            BurnRequest::DepositForBurnWithCaller(msg) => &msg.mint_recipient,
        }
    }

    pub fn burn_token(&self) -> &str {
        match self {
            BurnRequest::DepositForBurn(msg) => &msg.burn_token,
            BurnRequest::DepositForBurnWithCaller(msg) => &msg.burn_token,
        }
    }

    pub fn destination_caller(&self) -> Option<&[u8; BYTES32_LENGTH]> {
        match self {
            BurnRequest::DepositForBurn(_) => None,
            BurnRequest::DepositForBurnWithCaller(msg) => Some(&msg.destination_caller),
        }
    }

    /// Hands the request to the keeper entry point matching its shape
    pub fn submit<K: CctpKeeper + ?Sized>(self, keeper: &mut K) -> Result<DepositForBurnResponse, CctpKeeperError> {
        match self {
            BurnRequest::DepositForBurn(msg) => keeper.deposit_for_burn(msg),
            BurnRequest::DepositForBurnWithCaller(msg) => keeper.deposit_for_burn_with_caller(msg),
        }
    }
}

impl Display for BurnRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "burn {}{} from {} to domain {} (recipient 0x{}",
            self.amount(),
            self.burn_token(),
            self.from(),
            self.destination_domain(),
            hex::encode(self.mint_recipient())
        )?;
        if let Some(caller) = self.destination_caller() {
            write!(f, ", caller 0x{}", hex::encode(caller))?;
        }
        write!(f, ")")
    }
}

/// Builds a [`BurnRequest`]. Every field the keeper requires is a constructor argument; the destination caller is
/// the only optional one and selects the restricted entry point. [`BurnRequestBuilder::build`] applies the
/// keeper's basic validation.
#[derive(Debug, Clone)]
pub struct BurnRequestBuilder {
    from: String,
    amount: Amount,
    destination_domain: u32,
    mint_recipient: Vec<u8>,
    burn_token: String,
    destination_caller: Option<Vec<u8>>,
}

impl BurnRequestBuilder {
    pub fn new<F: Into<String>, T: Into<String>>(
        from: F,
        amount: Amount,
        destination_domain: u32,
        mint_recipient: Vec<u8>,
        burn_token: T,
    ) -> Self {
        Self {
            from: from.into(),
            amount,
            destination_domain,
            mint_recipient,
            burn_token: burn_token.into(),
            destination_caller: None,
        }
    }

    /// Starts a request that carries out `instruction` on behalf of `from`
    pub fn for_instruction<F: Into<String>, T: Into<String>>(
        from: F,
        burn_token: T,
        instruction: &RoutingInstruction,
    ) -> Self {
        let burn = instruction.burn();
        let builder = Self::new(
            from,
            burn.amount,
            burn.destination_domain,
            burn.mint_recipient.clone(),
            burn_token,
        );
        match instruction.destination_caller() {
            Some(caller) => builder.with_destination_caller(caller.to_vec()),
            None => builder,
        }
    }

    /// Restrict the mint on the destination domain to `caller`
    pub fn with_destination_caller(mut self, caller: Vec<u8>) -> Self {
        self.destination_caller = Some(caller);
        self
    }

    pub fn build(self) -> Result<BurnRequest, BurnRequestError> {
        if self.from.trim().is_empty() {
            return Err(BurnRequestError::EmptyFrom);
        }
        if self.amount.is_zero() {
            return Err(BurnRequestError::ZeroAmount);
        }
        let mint_recipient = <[u8; BYTES32_LENGTH]>::try_from(self.mint_recipient.as_slice())
            .map_err(|_| BurnRequestError::InvalidMintRecipientLength(self.mint_recipient.len()))?;
        if is_zero(&mint_recipient) {
            return Err(BurnRequestError::ZeroMintRecipient);
        }
        if self.burn_token.trim().is_empty() {
            return Err(BurnRequestError::EmptyBurnToken);
        }

        match self.destination_caller {
            None => Ok(BurnRequest::DepositForBurn(MsgDepositForBurn {
                from: self.from,
                amount: self.amount,
                destination_domain: self.destination_domain,
                mint_recipient,
                burn_token: self.burn_token,
            })),
            Some(caller) => {
                let destination_caller = <[u8; BYTES32_LENGTH]>::try_from(caller.as_slice())
                    .map_err(|_| BurnRequestError::InvalidDestinationCallerLength(caller.len()))?;
                if is_zero(&destination_caller) {
                    return Err(BurnRequestError::ZeroDestinationCaller);
                }
                Ok(BurnRequest::DepositForBurnWithCaller(MsgDepositForBurnWithCaller {
                    from: self.from,
                    amount: self.amount,
                    destination_domain: self.destination_domain,
                    mint_recipient,
                    burn_token: self.burn_token,
                    destination_caller,
                }))
            },
        }
    }
}

fn is_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::memo::BurnInstruction;

    fn recipient() -> Vec<u8> {
        let mut bytes = vec![0u8; BYTES32_LENGTH];
        bytes[12..].copy_from_slice(&[0xab; 20]);
        bytes
    }

    fn builder() -> BurnRequestBuilder {
        BurnRequestBuilder::new("noble1receiver", Amount::from(100u64), 0, recipient(), "uusdc")
    }

    #[test]
    fn it_builds_an_unrestricted_burn() {
        let request = builder().build().unwrap();
        assert!(matches!(request, BurnRequest::DepositForBurn(_)));
        assert_eq!(request.from(), "noble1receiver");
        assert_eq!(request.amount(), Amount::from(100u64));
        assert_eq!(request.destination_domain(), 0);
        assert_eq!(request.mint_recipient().to_vec(), recipient());
        assert_eq!(request.burn_token(), "uusdc");
        assert_eq!(request.destination_caller(), None);
    }

    #[test]
    fn it_builds_a_restricted_burn() {
        let request = builder().with_destination_caller(vec![9u8; 32]).build().unwrap();
        assert!(matches!(request, BurnRequest::DepositForBurnWithCaller(_)));
        assert_eq!(request.destination_caller(), Some(&[9u8; 32]));
    }

    #[test]
    fn it_follows_the_instruction_shape() {
        let burn = BurnInstruction {
            destination_domain: 3,
            mint_recipient: recipient(),
            amount: Amount::from(5u64),
        };
        let simple = RoutingInstruction::SimpleBurn(burn.clone());
        let request = BurnRequestBuilder::for_instruction("noble1receiver", "uusdc", &simple)
            .build()
            .unwrap();
        assert_eq!(request.destination_domain(), 3);
        assert_eq!(request.destination_caller(), None);

        let restricted = RoutingInstruction::CallerRestrictedBurn {
            burn,
            destination_caller: vec![4u8; 32],
        };
        let request = BurnRequestBuilder::for_instruction("noble1receiver", "uusdc", &restricted)
            .build()
            .unwrap();
        assert_eq!(request.destination_caller(), Some(&[4u8; 32]));
    }

    #[test]
    fn it_applies_basic_validation() {
        let err = BurnRequestBuilder::new(" ", Amount::from(1u64), 0, recipient(), "uusdc")
            .build()
            .unwrap_err();
        assert_eq!(err, BurnRequestError::EmptyFrom);

        let err = BurnRequestBuilder::new("a", Amount::zero(), 0, recipient(), "uusdc")
            .build()
            .unwrap_err();
        assert_eq!(err, BurnRequestError::ZeroAmount);

        let err = BurnRequestBuilder::new("a", Amount::from(1u64), 0, vec![1u8; 20], "uusdc")
            .build()
            .unwrap_err();
        assert_eq!(err, BurnRequestError::InvalidMintRecipientLength(20));

        let err = BurnRequestBuilder::new("a", Amount::from(1u64), 0, vec![0u8; 32], "uusdc")
            .build()
            .unwrap_err();
        assert_eq!(err, BurnRequestError::ZeroMintRecipient);

        let err = BurnRequestBuilder::new("a", Amount::from(1u64), 0, recipient(), "")
            .build()
            .unwrap_err();
        assert_eq!(err, BurnRequestError::EmptyBurnToken);

        let err = builder().with_destination_caller(vec![1u8; 31]).build().unwrap_err();
        assert_eq!(err, BurnRequestError::InvalidDestinationCallerLength(31));

        let err = builder().with_destination_caller(vec![0u8; 32]).build().unwrap_err();
        assert_eq!(err, BurnRequestError::ZeroDestinationCaller);
    }

    #[test]
    fn it_displays_the_burn() {
        let request = builder().build().unwrap();
        assert_eq!(
            request.to_string(),
            format!(
                "burn 100uusdc from noble1receiver to domain 0 (recipient 0x{})",
                hex::encode(recipient())
            )
        );
    }
}
