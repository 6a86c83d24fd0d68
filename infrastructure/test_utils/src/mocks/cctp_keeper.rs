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

use std::sync::{Arc, Mutex};

use autocctp::{
    BurnRequest,
    CctpKeeper,
    CctpKeeperError,
    DepositForBurnResponse,
    MsgDepositForBurn,
    MsgDepositForBurnWithCaller,
};

pub fn mock_cctp_keeper() -> MockCctpKeeper {
    MockCctpKeeper::new()
}

#[derive(Default)]
struct State {
    requests: Vec<BurnRequest>,
    fail_with: Option<CctpKeeperError>,
    nonce: u64,
}

/// Records every burn it is asked for. Clones share state, so a test can keep a handle while the middleware owns
/// another.
#[derive(Clone, Default)]
pub struct MockCctpKeeper {
    state: Arc<Mutex<State>>,
}

impl MockCctpKeeper {
    pub fn new() -> Self {
        Default::default()
    }

    /// Every subsequent burn is recorded and then refused with `err`
    pub fn set_failure(&self, err: CctpKeeperError) {
        self.state.lock().unwrap().fail_with = Some(err);
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn take_requests(&self) -> Vec<BurnRequest> {
        self.state.lock().unwrap().requests.drain(..).collect()
    }

    pub fn pop_request(&self) -> Option<BurnRequest> {
        self.state.lock().unwrap().requests.pop()
    }

    fn respond(&mut self, request: BurnRequest) -> Result<DepositForBurnResponse, CctpKeeperError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        if let Some(err) = state.fail_with.clone() {
            return Err(err);
        }
        state.nonce += 1;
        Ok(DepositForBurnResponse { nonce: state.nonce })
    }
}

impl CctpKeeper for MockCctpKeeper {
    fn deposit_for_burn(&mut self, msg: MsgDepositForBurn) -> Result<DepositForBurnResponse, CctpKeeperError> {
        self.respond(BurnRequest::DepositForBurn(msg))
    }

    fn deposit_for_burn_with_caller(
        &mut self,
        msg: MsgDepositForBurnWithCaller,
    ) -> Result<DepositForBurnResponse, CctpKeeperError> {
        self.respond(BurnRequest::DepositForBurnWithCaller(msg))
    }
}
