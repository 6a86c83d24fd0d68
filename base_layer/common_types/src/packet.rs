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

use std::fmt::{Display, Error, Formatter};

use serde::{Deserialize, Serialize};

use crate::serializers;

/// Block height on the counterparty chain, as used for packet timeouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height {
    pub revision_number: u64,
    pub revision_height: u64,
}

impl Height {
    pub fn new(revision_number: u64, revision_height: u64) -> Self {
        Self {
            revision_number,
            revision_height,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.revision_number == 0 && self.revision_height == 0
    }
}

impl Display for Height {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}-{}", self.revision_number, self.revision_height)
    }
}

/// A packet received over a channel. `data` is the application payload and is opaque at this level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    pub sequence: u64,
    pub source_port: String,
    pub source_channel: String,
    pub destination_port: String,
    pub destination_channel: String,
    #[serde(with = "serializers::base64")]
    pub data: Vec<u8>,
    pub timeout_height: Height,
    pub timeout_timestamp: u64,
}

impl Packet {
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Display for Packet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "packet #{} {}/{} -> {}/{} ({} bytes)",
            self.sequence,
            self.source_port,
            self.source_channel,
            self.destination_port,
            self.destination_channel,
            self.data.len()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_displays_the_route() {
        let packet = Packet {
            sequence: 9,
            source_port: "transfer".to_string(),
            source_channel: "channel-4".to_string(),
            destination_port: "transfer".to_string(),
            destination_channel: "channel-0".to_string(),
            data: vec![0; 3],
            timeout_height: Height::new(1, 100),
            timeout_timestamp: 0,
        };
        assert_eq!(
            packet.to_string(),
            "packet #9 transfer/channel-4 -> transfer/channel-0 (3 bytes)"
        );
        assert_eq!(packet.timeout_height.to_string(), "1-100");
        assert!(Height::default().is_zero());
    }
}
