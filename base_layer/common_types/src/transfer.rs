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

//! Wire format of the fungible token transfer application's packet data.

use serde::{Deserialize, Serialize};

/// Receivers longer than this are rejected by the transfer application
pub const MAXIMUM_RECEIVER_LENGTH: usize = 2048;
/// Memos longer than this are rejected by the transfer application
pub const MAXIMUM_MEMO_LENGTH: usize = 32768;

/// Packet data of a fungible token transfer. The amount is kept as the decimal string it travels as; use
/// the typed record in the `autocctp` crate for anything that needs the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FungibleTokenPacketData {
    pub denom: String,
    pub amount: String,
    pub sender: String,
    pub receiver: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
}

impl FungibleTokenPacketData {
    /// Key-sorted JSON, the canonical form the transfer application commits to
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut value = serde_json::json!({
            "amount": self.amount,
            "denom": self.denom,
            "receiver": self.receiver,
            "sender": self.sender,
        });
        if !self.memo.is_empty() {
            value["memo"] = serde_json::Value::from(self.memo.as_str());
        }
        value.to_string().into_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_reads_packets_without_a_memo() {
        let data = FungibleTokenPacketData::from_bytes(
            br#"{"denom":"uusdc","amount":"150","sender":"osmo1sender","receiver":"noble1receiver"}"#,
        )
        .unwrap();
        assert_eq!(data.denom, "uusdc");
        assert_eq!(data.amount, "150");
        assert_eq!(data.memo, "");
    }

    #[test]
    fn it_writes_sorted_keys() {
        let data = FungibleTokenPacketData {
            denom: "uusdc".to_string(),
            amount: "5".to_string(),
            sender: "a".to_string(),
            receiver: "b".to_string(),
            memo: String::new(),
        };
        assert_eq!(
            data.to_bytes(),
            br#"{"amount":"5","denom":"uusdc","receiver":"b","sender":"a"}"#.to_vec()
        );
    }

    #[test]
    fn it_rejects_numeric_amounts() {
        let result = FungibleTokenPacketData::from_bytes(
            br#"{"denom":"uusdc","amount":150,"sender":"osmo1sender","receiver":"noble1receiver"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn it_rejects_missing_fields() {
        assert!(FungibleTokenPacketData::from_bytes(br#"{"denom":"uusdc","amount":"1"}"#).is_err());
        assert!(FungibleTokenPacketData::from_bytes(b"").is_err());
    }

    #[test]
    fn it_rejects_unknown_fields() {
        let result = FungibleTokenPacketData::from_bytes(
            br#"{"amount":"150","bogus":7,"denom":"uusdc","receiver":"noble1receiver","sender":"osmo1sender"}"#,
        );
        assert!(result.unwrap_err().to_string().contains("unknown field `bogus`"));
    }
}
