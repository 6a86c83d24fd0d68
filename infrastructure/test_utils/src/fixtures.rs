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

use autocctp_common_types::{
    address::AccountAddress,
    packet::{Height, Packet},
    serializers,
    transfer::FungibleTokenPacketData,
};
use serde_json::json;

/// The port and channel transfers arrive on in these fixtures
pub const DESTINATION_PORT: &str = "transfer";
pub const DESTINATION_CHANNEL: &str = "channel-0";
/// The counterparty's end of the channel
pub const SOURCE_PORT: &str = "transfer";
pub const SOURCE_CHANNEL: &str = "channel-4";

/// A valid bech32 account address with prefix `hrp` and a 20 byte payload filled with `seed`
pub fn address(hrp: &str, seed: u8) -> String {
    AccountAddress::new(hrp, vec![seed; 20]).to_bech32().unwrap()
}

/// A 32 byte mint recipient: a 20 byte EVM address left padded with zeros
pub fn mint_recipient(seed: u8) -> Vec<u8> {
    let mut bytes = vec![0u8; 32];
    bytes[12..].copy_from_slice(&[seed; 20]);
    bytes
}

pub fn deposit_for_burn_memo(destination_domain: u32, mint_recipient: &[u8], amount: &str) -> String {
    json!({
        "circle": {
            "cctp": {
                "depositForBurn": {
                    "destinationDomain": destination_domain,
                    "mintRecipient": serializers::base64::encode(mint_recipient),
                    "amount": amount,
                }
            }
        }
    })
    .to_string()
}

pub fn deposit_for_burn_with_caller_memo(
    destination_domain: u32,
    mint_recipient: &[u8],
    amount: &str,
    destination_caller: &[u8],
) -> String {
    json!({
        "circle": {
            "cctp": {
                "depositForBurnWithCaller": {
                    "destinationDomain": destination_domain,
                    "mintRecipient": serializers::base64::encode(mint_recipient),
                    "amount": amount,
                    "destinationCaller": serializers::base64::encode(destination_caller),
                }
            }
        }
    })
    .to_string()
}

/// Transfer packet data sending `amount` of `denom` from a counterparty account to a local `noble` account
pub fn transfer_data(denom: &str, amount: &str, memo: &str) -> FungibleTokenPacketData {
    FungibleTokenPacketData {
        denom: denom.to_string(),
        amount: amount.to_string(),
        sender: address("osmo", 1),
        receiver: address("noble", 2),
        memo: memo.to_string(),
    }
}

/// A packet received on [`DESTINATION_CHANNEL`] carrying `data`
pub fn packet_with_data(sequence: u64, data: Vec<u8>) -> Packet {
    Packet {
        sequence,
        source_port: SOURCE_PORT.to_string(),
        source_channel: SOURCE_CHANNEL.to_string(),
        destination_port: DESTINATION_PORT.to_string(),
        destination_channel: DESTINATION_CHANNEL.to_string(),
        data,
        timeout_height: Height::new(1, 1_000),
        timeout_timestamp: 0,
    }
}

pub fn transfer_packet(sequence: u64, data: &FungibleTokenPacketData) -> Packet {
    packet_with_data(sequence, data.to_bytes())
}
