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

use std::convert::TryFrom;

use autocctp_common_types::{
    amount::{Amount, AmountError},
    transfer::{FungibleTokenPacketData, MAXIMUM_MEMO_LENGTH, MAXIMUM_RECEIVER_LENGTH},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferDecodeError {
    #[error("Packet data is not a fungible token transfer: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Invalid transfer amount: {0}")]
    InvalidAmount(#[from] AmountError),
    #[error("Transfer amount must be positive")]
    ZeroAmount,
    #[error("Transfer sender is blank")]
    BlankSender,
    #[error("Transfer receiver is blank")]
    BlankReceiver,
    #[error("Transfer receiver is {0} bytes, at most {max} are allowed", max = MAXIMUM_RECEIVER_LENGTH)]
    ReceiverTooLong(usize),
    #[error("Transfer memo is {0} bytes, at most {max} are allowed", max = MAXIMUM_MEMO_LENGTH)]
    MemoTooLong(usize),
    #[error("Invalid denomination `{0}`")]
    InvalidDenom(String),
}

/// A received fungible token transfer. Built only through [`TransferRecord::decode`] (or the `TryFrom` impl),
/// which applies the transfer application's basic validation, so a record always holds a positive amount and
/// non-blank parties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    sender: String,
    receiver: String,
    amount: Amount,
    denom: String,
    memo: String,
}

impl TransferRecord {
    pub fn decode(bytes: &[u8]) -> Result<Self, TransferDecodeError> {
        let data = FungibleTokenPacketData::from_bytes(bytes)?;
        Self::try_from(data)
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn denom(&self) -> &str {
        &self.denom
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }
}

impl TryFrom<FungibleTokenPacketData> for TransferRecord {
    type Error = TransferDecodeError;

    fn try_from(data: FungibleTokenPacketData) -> Result<Self, Self::Error> {
        let amount = data.amount.parse::<Amount>()?;
        if amount.is_zero() {
            return Err(TransferDecodeError::ZeroAmount);
        }
        if data.sender.trim().is_empty() {
            return Err(TransferDecodeError::BlankSender);
        }
        if data.receiver.trim().is_empty() {
            return Err(TransferDecodeError::BlankReceiver);
        }
        if data.receiver.len() > MAXIMUM_RECEIVER_LENGTH {
            return Err(TransferDecodeError::ReceiverTooLong(data.receiver.len()));
        }
        if data.memo.len() > MAXIMUM_MEMO_LENGTH {
            return Err(TransferDecodeError::MemoTooLong(data.memo.len()));
        }
        validate_denom(&data.denom)?;

        Ok(Self {
            sender: data.sender,
            receiver: data.receiver,
            amount,
            denom: data.denom,
            memo: data.memo,
        })
    }
}

/// A denomination is either a base denom or a `port/channel/.../base` trace; neither may contain empty segments.
fn validate_denom(denom: &str) -> Result<(), TransferDecodeError> {
    if denom.trim().is_empty() || denom.split('/').any(|segment| segment.trim().is_empty()) {
        return Err(TransferDecodeError::InvalidDenom(denom.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn packet_data(amount: &str) -> FungibleTokenPacketData {
        FungibleTokenPacketData {
            denom: "transfer/channel-1/uusdc".to_string(),
            amount: amount.to_string(),
            sender: "osmo1sender".to_string(),
            receiver: "noble1receiver".to_string(),
            memo: String::new(),
        }
    }

    #[test]
    fn it_decodes_a_transfer() {
        let bytes = packet_data("150").to_bytes();
        let record = TransferRecord::decode(&bytes).unwrap();
        assert_eq!(record.amount(), Amount::from(150u64));
        assert_eq!(record.receiver(), "noble1receiver");
        assert_eq!(record.sender(), "osmo1sender");
        assert_eq!(record.denom(), "transfer/channel-1/uusdc");
        assert_eq!(record.memo(), "");
        // decoding is a pure function of the bytes
        assert_eq!(TransferRecord::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn it_rejects_non_transfer_payloads() {
        assert!(matches!(
            TransferRecord::decode(b"\x0a\x02hi"),
            Err(TransferDecodeError::Malformed(_))
        ));
        assert!(matches!(
            TransferRecord::decode(br#"{"hello":"world"}"#),
            Err(TransferDecodeError::Malformed(_))
        ));
    }

    #[test]
    fn it_applies_basic_validation() {
        assert!(matches!(
            TransferRecord::try_from(packet_data("0")),
            Err(TransferDecodeError::ZeroAmount)
        ));
        assert!(matches!(
            TransferRecord::try_from(packet_data("-4")),
            Err(TransferDecodeError::InvalidAmount(_))
        ));

        let mut data = packet_data("1");
        data.sender = "  ".to_string();
        assert!(matches!(TransferRecord::try_from(data), Err(TransferDecodeError::BlankSender)));

        let mut data = packet_data("1");
        data.receiver = String::new();
        assert!(matches!(
            TransferRecord::try_from(data),
            Err(TransferDecodeError::BlankReceiver)
        ));

        let mut data = packet_data("1");
        data.receiver = "a".repeat(MAXIMUM_RECEIVER_LENGTH + 1);
        assert!(matches!(
            TransferRecord::try_from(data),
            Err(TransferDecodeError::ReceiverTooLong(_))
        ));

        let mut data = packet_data("1");
        data.memo = "m".repeat(MAXIMUM_MEMO_LENGTH + 1);
        assert!(matches!(TransferRecord::try_from(data), Err(TransferDecodeError::MemoTooLong(_))));
    }

    #[test]
    fn it_rejects_invalid_denominations() {
        for denom in ["", " ", "transfer//uusdc", "/uusdc", "transfer/channel-1/"] {
            let mut data = packet_data("1");
            data.denom = denom.to_string();
            assert!(
                matches!(TransferRecord::try_from(data), Err(TransferDecodeError::InvalidDenom(_))),
                "{}",
                denom
            );
        }
    }
}
