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

use autocctp::{AutoCctpConfig, AutoCctpLayer, RecvPacket};
use autocctp_common_types::acknowledgement::Acknowledgement;
use autocctp_test_utils::{
    fixtures::{deposit_for_burn_memo, mint_recipient, transfer_data, transfer_packet},
    mocks::{mock_cctp_keeper, mock_transfer_app},
};
use tower::{layer::Layer, Service, ServiceExt};

const DENOM: &str = "transfer/channel-4/uusdc";

#[tokio::test]
async fn it_routes_packets_as_a_service() {
    let _ = env_logger::builder().is_test(true).try_init();
    let app = mock_transfer_app();
    let keeper = mock_cctp_keeper();
    let layer = AutoCctpLayer::new(keeper.clone(), Arc::new(AutoCctpConfig::default()));
    let mut service = layer.layer(app.clone());

    let memo = deposit_for_burn_memo(0, &mint_recipient(0xaa), "100");
    let ack = service
        .ready()
        .await
        .unwrap()
        .call(RecvPacket::new(
            transfer_packet(1, &transfer_data(DENOM, "150", &memo)),
            "noble1relayer",
        ))
        .await
        .unwrap();
    assert_eq!(ack, Acknowledgement::transfer_success());

    let ack = service
        .oneshot(RecvPacket::new(
            transfer_packet(2, &transfer_data(DENOM, "50", &memo)),
            "noble1relayer",
        ))
        .await
        .unwrap();
    assert!(!ack.is_success());

    assert_eq!(app.received_count(), 2);
    assert_eq!(keeper.call_count(), 1);
}

#[tokio::test]
async fn layered_middlewares_share_the_keeper() {
    let keeper = mock_cctp_keeper();
    let layer = AutoCctpLayer::new(keeper.clone(), AutoCctpConfig::default());
    let first = layer.layer(mock_transfer_app());
    let second = layer.layer(mock_transfer_app());

    let memo = deposit_for_burn_memo(0, &mint_recipient(0xaa), "1");
    for (sequence, service) in [(1, first), (2, second)] {
        let ack = service
            .oneshot(RecvPacket::new(
                transfer_packet(sequence, &transfer_data(DENOM, "1", &memo)),
                "noble1relayer",
            ))
            .await
            .unwrap();
        assert!(ack.is_success());
    }
    assert_eq!(keeper.call_count(), 2);
}
