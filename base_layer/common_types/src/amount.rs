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
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;

/// A non-negative token amount, bounded to 256 bits like the host chain's integer type.
///
/// Amounts travel as decimal strings on the wire, so that is how they serialize.
///
/// ```
/// use autocctp_common_types::amount::Amount;
///
/// let a: Amount = "150".parse().unwrap();
/// let b = Amount::from(100u64);
/// assert!(b <= a);
/// assert_eq!(a.checked_sub(b), Some(Amount::from(50u64)));
/// assert_eq!(a.to_string(), "150");
/// ```
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(U256);

#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount is empty")]
    Empty,
    #[error("Amount `{0}` is not a base 10 unsigned integer")]
    InvalidDigits(String),
    #[error("Amount `{0}` does not fit in 256 bits")]
    Overflow(String),
}

impl Amount {
    pub const fn zero() -> Self {
        Amount(U256::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, v: Amount) -> Option<Amount> {
        self.0.checked_add(v.0).map(Amount)
    }

    pub fn checked_sub(self, v: Amount) -> Option<Amount> {
        self.0.checked_sub(v.0).map(Amount)
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountError::Empty);
        }
        // digits only: no sign, whitespace or radix prefix
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::InvalidDigits(s.to_string()));
        }
        U256::from_dec_str(s)
            .map(Amount)
            .map_err(|_| AmountError::Overflow(s.to_string()))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(v: u64) -> Self {
        Amount(U256::from(v))
    }
}

impl From<u128> for Amount {
    fn from(v: u128) -> Self {
        Amount(U256::from(v))
    }
}

impl From<U256> for Amount {
    fn from(v: U256) -> Self {
        Amount(v)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
