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

use std::sync::Arc;

/// Read-only view of the module parameters the dispatcher consults before burning.
///
/// Implemented by [`crate::AutoCctpConfig`]; hosts that keep these parameters in chain state can implement it over
/// their own store.
pub trait RoutingPolicy {
    /// Module-wide switch. While off, transfers that ask to be routed are refused.
    fn is_routing_enabled(&self) -> bool;

    fn is_destination_domain_allowed(&self, domain: u32) -> bool;

    /// Compliance screening of the transfer's sender and receiver
    fn is_address_blocked(&self, address: &str) -> bool;

    /// Bech32 prefix the burn originator must carry, if any
    fn required_address_prefix(&self) -> Option<&str>;
}

impl<P: RoutingPolicy + ?Sized> RoutingPolicy for &P {
    fn is_routing_enabled(&self) -> bool {
        (**self).is_routing_enabled()
    }

    fn is_destination_domain_allowed(&self, domain: u32) -> bool {
        (**self).is_destination_domain_allowed(domain)
    }

    fn is_address_blocked(&self, address: &str) -> bool {
        (**self).is_address_blocked(address)
    }

    fn required_address_prefix(&self) -> Option<&str> {
        (**self).required_address_prefix()
    }
}

impl<P: RoutingPolicy + ?Sized> RoutingPolicy for Arc<P> {
    fn is_routing_enabled(&self) -> bool {
        (**self).is_routing_enabled()
    }

    fn is_destination_domain_allowed(&self, domain: u32) -> bool {
        (**self).is_destination_domain_allowed(domain)
    }

    fn is_address_blocked(&self, address: &str) -> bool {
        (**self).is_address_blocked(address)
    }

    fn required_address_prefix(&self) -> Option<&str> {
        (**self).required_address_prefix()
    }
}
