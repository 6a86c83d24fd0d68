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

//! Resolution of the local denomination a received transfer was credited in. The burn must name the token that
//! actually sits in the receiver's account, which is not always the denom carried by the packet.

use autocctp_common_types::packet::Packet;
use sha2::{Digest, Sha256};

const IBC_DENOM_PREFIX: &str = "ibc";

/// Returns true when the packet's denom was originally sent out from this chain over the packet's source channel,
/// i.e. the tokens are coming home.
pub fn receiver_chain_is_source(packet: &Packet, denom: &str) -> bool {
    denom.starts_with(&trace_prefix(&packet.source_port, &packet.source_channel))
}

/// The denomination the transfer application credits for `denom` received in `packet`.
///
/// Returning tokens lose the hop the counterparty added; a remaining trace is hashed, a bare base denom is used as
/// is. Tokens arriving for the first time over this channel gain a hop on our side and are always hashed.
pub fn local_denom(packet: &Packet, denom: &str) -> String {
    let source_prefix = trace_prefix(&packet.source_port, &packet.source_channel);
    match denom.strip_prefix(&source_prefix) {
        Some(unprefixed) if unprefixed.contains('/') => hashed_denom(unprefixed),
        Some(unprefixed) => unprefixed.to_string(),
        None => {
            let prefixed = format!(
                "{}{}",
                trace_prefix(&packet.destination_port, &packet.destination_channel),
                denom
            );
            hashed_denom(&prefixed)
        },
    }
}

/// `ibc/{SHA256(trace)}` with the hash in upper case hex
pub fn hashed_denom(trace: &str) -> String {
    let hash = Sha256::digest(trace.as_bytes());
    format!("{}/{}", IBC_DENOM_PREFIX, hex::encode_upper(hash))
}

fn trace_prefix(port: &str, channel: &str) -> String {
    format!("{}/{}/", port, channel)
}
