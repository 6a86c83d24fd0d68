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

use bech32::{FromBase32, ToBase32, Variant};
use thiserror::Error as ThisError;

/// Longest account address, in bytes, the host chain accepts
pub const MAX_ADDRESS_LENGTH: usize = 255;

#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address `{address}` is not valid bech32: {reason}")]
    InvalidBech32 { address: String, reason: String },
    #[error("Address `{0}` uses the bech32m checksum, bech32 is required")]
    UnexpectedVariant(String),
    #[error("Address `{0}` has an empty payload")]
    Empty(String),
    #[error("Address `{address}` is {len} bytes, at most {max} are allowed", max = MAX_ADDRESS_LENGTH)]
    TooLong { address: String, len: usize },
    #[error("Address `{address}` has prefix `{actual}`, expected `{expected}`")]
    PrefixMismatch {
        address: String,
        expected: String,
        actual: String,
    },
}

/// A decoded bech32 account address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountAddress {
    hrp: String,
    bytes: Vec<u8>,
}

impl AccountAddress {
    pub fn from_bech32(address: &str) -> Result<Self, AddressError> {
        let invalid = |reason: String| AddressError::InvalidBech32 {
            address: address.to_string(),
            reason,
        };
        let (hrp, data, variant) = bech32::decode(address).map_err(|e| invalid(e.to_string()))?;
        if variant != Variant::Bech32 {
            return Err(AddressError::UnexpectedVariant(address.to_string()));
        }
        let bytes = Vec::<u8>::from_base32(&data).map_err(|e| invalid(e.to_string()))?;
        if bytes.is_empty() {
            return Err(AddressError::Empty(address.to_string()));
        }
        if bytes.len() > MAX_ADDRESS_LENGTH {
            return Err(AddressError::TooLong {
                address: address.to_string(),
                len: bytes.len(),
            });
        }
        Ok(Self { hrp, bytes })
    }

    /// Decodes the address and checks that it carries the expected human readable prefix
    pub fn from_bech32_with_prefix(address: &str, expected: &str) -> Result<Self, AddressError> {
        let decoded = Self::from_bech32(address)?;
        if decoded.hrp != expected {
            return Err(AddressError::PrefixMismatch {
                address: address.to_string(),
                expected: expected.to_string(),
                actual: decoded.hrp,
            });
        }
        Ok(decoded)
    }

    pub fn new(hrp: &str, bytes: Vec<u8>) -> Self {
        Self {
            hrp: hrp.to_string(),
            bytes,
        }
    }

    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_bech32(&self) -> Result<String, AddressError> {
        bech32::encode(&self.hrp, self.bytes.to_base32(), Variant::Bech32).map_err(|e| AddressError::InvalidBech32 {
            address: self.hrp.clone(),
            reason: e.to_string(),
        })
    }
}

impl Display for AccountAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self.to_bech32() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{}:<invalid>", self.hrp),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_decodes_what_it_encodes() {
        let address = AccountAddress::new("noble", vec![7u8; 20]);
        let encoded = address.to_bech32().unwrap();
        assert!(encoded.starts_with("noble1"));
        let decoded = AccountAddress::from_bech32(&encoded).unwrap();
        assert_eq!(decoded, address);
        assert_eq!(decoded.hrp(), "noble");
        assert_eq!(decoded.as_bytes(), &[7u8; 20]);
    }

    #[test]
    fn it_checks_the_prefix() {
        let encoded = AccountAddress::new("cosmos", vec![1u8; 20]).to_bech32().unwrap();
        assert!(AccountAddress::from_bech32_with_prefix(&encoded, "cosmos").is_ok());
        let err = AccountAddress::from_bech32_with_prefix(&encoded, "noble").unwrap_err();
        assert!(matches!(err, AddressError::PrefixMismatch { ref actual, .. } if actual == "cosmos"));
    }

    #[test]
    fn it_rejects_garbage() {
        assert!(matches!(
            AccountAddress::from_bech32("transferMetadata.Receiver"),
            Err(AddressError::InvalidBech32 { .. })
        ));
        let mut encoded = AccountAddress::new("noble", vec![3u8; 20]).to_bech32().unwrap();
        // corrupt the checksum
        let last = encoded.pop().unwrap();
        encoded.push(if last == 'q' { 'p' } else { 'q' });
        assert!(AccountAddress::from_bech32(&encoded).is_err());
    }

    #[test]
    fn it_rejects_empty_payloads() {
        let encoded = AccountAddress::new("noble", vec![]).to_bech32().unwrap();
        assert_eq!(
            AccountAddress::from_bech32(&encoded),
            Err(AddressError::Empty(encoded.clone()))
        );
    }

    #[test]
    fn it_rejects_oversized_payloads() {
        // bech32 itself does not bound the data part
        let encoded = AccountAddress::new("noble", vec![9u8; MAX_ADDRESS_LENGTH + 1])
            .to_bech32()
            .unwrap();
        assert_eq!(
            AccountAddress::from_bech32(&encoded),
            Err(AddressError::TooLong {
                address: encoded.clone(),
                len: MAX_ADDRESS_LENGTH + 1,
            })
        );

        let encoded = AccountAddress::new("noble", vec![9u8; MAX_ADDRESS_LENGTH])
            .to_bech32()
            .unwrap();
        assert_eq!(
            AccountAddress::from_bech32(&encoded).unwrap().as_bytes().len(),
            MAX_ADDRESS_LENGTH
        );
    }
}
