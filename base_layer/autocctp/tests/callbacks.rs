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

use autocctp::{AutoCctpCallbacks, AutoCctpConfig, CallbackError, ContractKeeper, RoutingError};
use autocctp_common_types::acknowledgement::Acknowledgement;
use autocctp_test_utils::{
    fixtures::{address, deposit_for_burn_memo, mint_recipient, packet_with_data, transfer_data, transfer_packet},
    mocks::{mock_cctp_keeper, MockCctpKeeper},
};

const DENOM: &str = "transfer/channel-4/uusdc";

fn callbacks() -> (AutoCctpCallbacks<MockCctpKeeper, AutoCctpConfig>, MockCctpKeeper) {
    let _ = env_logger::builder().is_test(true).try_init();
    let keeper = mock_cctp_keeper();
    (AutoCctpCallbacks::new(keeper.clone(), AutoCctpConfig::default()), keeper)
}

#[test]
fn it_routes_from_the_receive_callback() {
    let (mut callbacks, keeper) = callbacks();
    let memo = deposit_for_burn_memo(0, &mint_recipient(0xaa), "100");
    let packet = transfer_packet(1, &transfer_data(DENOM, "150", &memo));

    callbacks
        .ibc_receive_packet_callback(&packet, &Acknowledgement::transfer_success(), &address("noble", 5))
        .unwrap();

    let request = keeper.pop_request().unwrap();
    assert_eq!(request.from(), address("noble", 2));
    assert_eq!(request.burn_token(), "uusdc");
}

#[test]
fn it_validates_the_contract_address() {
    let (mut callbacks, keeper) = callbacks();
    let memo = deposit_for_burn_memo(0, &mint_recipient(0xaa), "100");
    let packet = transfer_packet(1, &transfer_data(DENOM, "150", &memo));

    let err = callbacks
        .ibc_receive_packet_callback(&packet, &Acknowledgement::transfer_success(), "not-an-address")
        .unwrap_err();
    assert!(matches!(err, CallbackError::InvalidContractAddress(_)));
    assert_eq!(keeper.call_count(), 0);
}

#[test]
fn it_skips_failed_transfers() {
    let (mut callbacks, keeper) = callbacks();
    let memo = deposit_for_burn_memo(0, &mint_recipient(0xaa), "100");
    let packet = transfer_packet(1, &transfer_data(DENOM, "150", &memo));

    callbacks
        .ibc_receive_packet_callback(&packet, &Acknowledgement::error("escrow empty"), &address("noble", 5))
        .unwrap();
    assert_eq!(keeper.call_count(), 0);
}

#[test]
fn it_reports_routing_failures() {
    let (mut callbacks, keeper) = callbacks();
    let contract = address("noble", 5);
    let memo = deposit_for_burn_memo(0, &mint_recipient(0xaa), "100");
    let packet = transfer_packet(1, &transfer_data(DENOM, "50", &memo));

    let err = callbacks
        .ibc_receive_packet_callback(&packet, &Acknowledgement::transfer_success(), &contract)
        .unwrap_err();
    assert!(matches!(
        err,
        CallbackError::Routing(RoutingError::BurnAmountExceedsTransfer { .. })
    ));
    assert!(err.to_string().starts_with("on destination chain callback"));

    let err = callbacks
        .ibc_receive_packet_callback(
            &packet_with_data(2, b"{}".to_vec()),
            &Acknowledgement::transfer_success(),
            &contract,
        )
        .unwrap_err();
    assert!(matches!(err, CallbackError::Decode(_)));
    assert_eq!(keeper.call_count(), 0);
}

#[test]
fn it_ignores_the_other_callbacks() {
    let (mut callbacks, keeper) = callbacks();
    let contract = address("noble", 5);
    let sender = address("noble", 6);
    let memo = deposit_for_burn_memo(0, &mint_recipient(0xaa), "100");
    let packet = transfer_packet(1, &transfer_data(DENOM, "150", &memo));

    callbacks.ibc_send_packet_callback(&packet, &contract, &sender).unwrap();
    callbacks
        .ibc_on_acknowledgement_packet_callback(&packet, b"{}", "noble1relayer", &contract, &sender)
        .unwrap();
    callbacks
        .ibc_on_timeout_packet_callback(&packet, "noble1relayer", &contract, &sender)
        .unwrap();
    assert_eq!(keeper.call_count(), 0);
}
