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

use autocctp_common::{ConfigList, SubConfigPath};
use serde::{Deserialize, Serialize};

use crate::policy::RoutingPolicy;

/// Parameters of the autocctp module, read from the `[autocctp]` section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AutoCctpConfig {
    /// When false, transfers whose memo asks for a burn are refused with an error acknowledgement
    pub routing_enabled: bool,
    /// Domains a burn may target. Empty allows every domain.
    pub allowed_destination_domains: ConfigList<u32>,
    /// Transfers sent from or to these addresses are not routed
    pub blocked_addresses: ConfigList<String>,
    /// Bech32 prefix of local accounts, e.g. `noble`. When set, the burn originator must carry it.
    pub address_prefix: Option<String>,
}

impl Default for AutoCctpConfig {
    fn default() -> Self {
        Self {
            routing_enabled: true,
            allowed_destination_domains: ConfigList::new(),
            blocked_addresses: ConfigList::new(),
            address_prefix: None,
        }
    }
}

impl SubConfigPath for AutoCctpConfig {
    fn main_key_prefix() -> &'static str {
        "autocctp"
    }
}

impl RoutingPolicy for AutoCctpConfig {
    fn is_routing_enabled(&self) -> bool {
        self.routing_enabled
    }

    fn is_destination_domain_allowed(&self, domain: u32) -> bool {
        self.allowed_destination_domains.is_empty() || self.allowed_destination_domains.contains(&domain)
    }

    fn is_address_blocked(&self, address: &str) -> bool {
        self.blocked_addresses.iter().any(|blocked| blocked == address)
    }

    fn required_address_prefix(&self) -> Option<&str> {
        self.address_prefix.as_deref()
    }
}
