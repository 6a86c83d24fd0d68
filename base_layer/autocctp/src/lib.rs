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

//! # autocctp
//!
//! Middleware for the fungible token transfer application. When a received transfer carries a memo of the form
//!
//! ```json
//! {"circle":{"cctp":{"depositForBurn":{"destinationDomain":0,"mintRecipient":"<base64>","amount":"100"}}}}
//! ```
//!
//! the funds are first credited by the wrapped transfer application and then handed to the CCTP keeper to be
//! burned, so that they are minted again on the destination domain. Memos without such an instruction leave the
//! transfer untouched.
//!
//! The receive pipeline is:
//!
//! 1. decode the packet data into a [`TransferRecord`], failing closed with an error acknowledgement;
//! 2. forward the packet to the wrapped application and stop unless it acknowledges success;
//! 3. parse the memo into a [`RoutingInstruction`], stopping quietly when there is none;
//! 4. validate the instruction and submit a [`BurnRequest`] through the [`BurnDispatcher`].
//!
//! Every other channel callback is forwarded to the wrapped application unchanged.

pub mod burn;
pub mod callbacks;
pub mod config;
pub mod denom;
pub mod dispatcher;
pub mod error;
pub mod ibc_module;
pub mod memo;
pub mod middleware;
pub mod policy;
pub mod transfer;

pub use burn::{
    BurnRequest,
    BurnRequestBuilder,
    BurnRequestError,
    CctpKeeper,
    CctpKeeperError,
    DepositForBurnResponse,
    MsgDepositForBurn,
    MsgDepositForBurnWithCaller,
};
pub use callbacks::{AutoCctpCallbacks, CallbackError, ContractKeeper};
pub use config::AutoCctpConfig;
pub use dispatcher::BurnDispatcher;
pub use error::{AutoCctpError, RoutingError};
pub use ibc_module::{ChannelOpen, Counterparty, IbcModule, IbcModuleError, Order};
pub use memo::{BurnInstruction, MemoError, RoutingInstruction};
pub use middleware::{AutoCctpLayer, AutoCctpMiddleware, RecvPacket};
pub use policy::RoutingPolicy;
pub use transfer::{TransferDecodeError, TransferRecord};
