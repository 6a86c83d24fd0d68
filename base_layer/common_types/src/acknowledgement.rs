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
use thiserror::Error as ThisError;

use crate::serializers;

/// Result byte the fungible token transfer application writes into a successful acknowledgement.
pub const TRANSFER_SUCCESS_RESULT: u8 = 1;

/// The outcome of receiving a packet, in the channel's JSON acknowledgement encoding:
/// `{"result":"<base64>"}` on success and `{"error":"<reason>"}` on failure.
///
/// An error acknowledgement also tells the host to discard every state write made while the packet was being
/// received, so [`Acknowledgement::is_success`] doubles as the commit predicate for the packet's unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acknowledgement {
    Result(#[serde(with = "serializers::base64")] Vec<u8>),
    Error(String),
}

#[derive(Debug, ThisError)]
pub enum AcknowledgementError {
    #[error("Acknowledgement is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Acknowledgement result is empty")]
    EmptyResult,
    #[error("Acknowledgement error reason is empty")]
    EmptyError,
}

impl Acknowledgement {
    pub fn success<T: Into<Vec<u8>>>(result: T) -> Self {
        Acknowledgement::Result(result.into())
    }

    /// The acknowledgement written by the transfer application once funds have been credited
    pub fn transfer_success() -> Self {
        Acknowledgement::Result(vec![TRANSFER_SUCCESS_RESULT])
    }

    pub fn error<T: Display>(reason: T) -> Self {
        Acknowledgement::Error(reason.to_string())
    }

    /// An empty result is not a valid acknowledgement and does not count as success
    pub fn is_success(&self) -> bool {
        matches!(self, Acknowledgement::Result(result) if !result.is_empty())
    }

    pub fn error_reason(&self) -> Option<&str> {
        match self {
            Acknowledgement::Result(_) => None,
            Acknowledgement::Error(reason) => Some(reason),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let value = match self {
            Acknowledgement::Result(result) => serde_json::json!({ "result": serializers::base64::encode(result) }),
            Acknowledgement::Error(reason) => serde_json::json!({ "error": reason }),
        };
        value.to_string().into_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AcknowledgementError> {
        let ack = serde_json::from_slice::<Acknowledgement>(bytes)?;
        match &ack {
            Acknowledgement::Result(result) if result.is_empty() => Err(AcknowledgementError::EmptyResult),
            Acknowledgement::Error(reason) if reason.trim().is_empty() => Err(AcknowledgementError::EmptyError),
            _ => Ok(ack),
        }
    }
}

impl Display for Acknowledgement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Acknowledgement::Result(result) => write!(f, "success ({} byte result)", result.len()),
            Acknowledgement::Error(reason) => write!(f, "error: {}", reason),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_encodes_the_transfer_success_acknowledgement() {
        let ack = Acknowledgement::transfer_success();
        assert!(ack.is_success());
        assert_eq!(ack.to_bytes(), br#"{"result":"AQ=="}"#.to_vec());
    }

    #[test]
    fn it_encodes_error_acknowledgements() {
        let ack = Acknowledgement::error("insufficient funds");
        assert!(!ack.is_success());
        assert_eq!(ack.error_reason(), Some("insufficient funds"));
        assert_eq!(ack.to_bytes(), br#"{"error":"insufficient funds"}"#.to_vec());
    }

    #[test]
    fn it_decodes_channel_acknowledgements() {
        assert_eq!(
            Acknowledgement::from_bytes(br#"{"result":"AQ=="}"#).unwrap(),
            Acknowledgement::transfer_success()
        );
        assert_eq!(
            Acknowledgement::from_bytes(br#"{"error":"boom"}"#).unwrap(),
            Acknowledgement::error("boom")
        );
    }

    #[test]
    fn it_rejects_empty_or_unknown_acknowledgements() {
        assert!(matches!(
            Acknowledgement::from_bytes(br#"{"result":""}"#),
            Err(AcknowledgementError::EmptyResult)
        ));
        assert!(matches!(
            Acknowledgement::from_bytes(br#"{"error":" "}"#),
            Err(AcknowledgementError::EmptyError)
        ));
        assert!(matches!(
            Acknowledgement::from_bytes(br#"{"other":"x"}"#),
            Err(AcknowledgementError::Malformed(_))
        ));
    }

    #[test]
    fn it_only_counts_decodable_results_as_success() {
        let empty = Acknowledgement::success(Vec::new());
        assert!(!empty.is_success());
        assert!(Acknowledgement::from_bytes(&empty.to_bytes()).is_err());

        let ack = Acknowledgement::success(b"ok".to_vec());
        assert!(ack.is_success());
        assert_eq!(Acknowledgement::from_bytes(&ack.to_bytes()).unwrap(), ack);
    }
}
