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
    convert::Infallible,
    task::{Context, Poll},
};

use autocctp_common_types::{acknowledgement::Acknowledgement, packet::Packet};
use futures::future;
use log::*;
use tower::{layer::Layer, Service};

use crate::{
    burn::CctpKeeper,
    dispatcher::BurnDispatcher,
    error::AutoCctpError,
    ibc_module::{ChannelOpen, IbcModule, IbcModuleError},
    policy::RoutingPolicy,
    transfer::TransferRecord,
};

const LOG_TARGET: &str = "autocctp::middleware";

/// # AutoCCTP middleware
///
/// Wraps the transfer application. Received packets are first decoded and credited by the wrapped application;
/// only once that succeeded is the memo inspected and, if it asks for it, the credited funds burned towards the
/// destination domain. Every other callback is passed through untouched.
///
/// An error acknowledgement returned after the credit is the host's signal to discard the packet's state writes,
/// the credit included. The middleware itself never reverses the credit.
#[derive(Clone)]
pub struct AutoCctpMiddleware<A, K, P> {
    app: A,
    keeper: K,
    policy: P,
}

impl<A, K, P> AutoCctpMiddleware<A, K, P> {
    pub fn new(app: A, keeper: K, policy: P) -> Self {
        Self { app, keeper, policy }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn keeper(&self) -> &K {
        &self.keeper
    }
}

impl<A, K, P> AutoCctpMiddleware<A, K, P>
where
    A: IbcModule,
    K: CctpKeeper,
    P: RoutingPolicy,
{
    fn handle_recv_packet(&mut self, packet: &Packet, relayer: &str) -> Acknowledgement {
        let record = match TransferRecord::decode(packet.data()) {
            Ok(record) => record,
            Err(err) => {
                let err = AutoCctpError::from(err);
                warn!(target: LOG_TARGET, "Rejecting {}: {}", packet, err);
                return Acknowledgement::error(err);
            },
        };

        let ack = self.app.on_recv_packet(packet, relayer);
        if !ack.is_success() {
            debug!(
                target: LOG_TARGET,
                "Transfer application did not credit packet #{}: {}", packet.sequence, ack
            );
            return ack;
        }

        let mut dispatcher = BurnDispatcher::new(&mut self.keeper, &self.policy);
        match dispatcher.route(packet, &record) {
            Ok(Some(response)) => {
                info!(
                    target: LOG_TARGET,
                    "Routed packet #{} from {} through cctp (nonce {})",
                    packet.sequence,
                    record.sender(),
                    response.nonce
                );
                ack
            },
            Ok(None) => ack,
            Err(err) => {
                warn!(
                    target: LOG_TARGET,
                    "Failed to route packet #{} through cctp: {}", packet.sequence, err
                );
                Acknowledgement::error(AutoCctpError::from(err))
            },
        }
    }
}

impl<A, K, P> IbcModule for AutoCctpMiddleware<A, K, P>
where
    A: IbcModule,
    K: CctpKeeper,
    P: RoutingPolicy,
{
    fn on_chan_open_init(&mut self, open: &ChannelOpen) -> Result<String, IbcModuleError> {
        self.app.on_chan_open_init(open)
    }

    fn on_chan_open_try(&mut self, open: &ChannelOpen, counterparty_version: &str) -> Result<String, IbcModuleError> {
        self.app.on_chan_open_try(open, counterparty_version)
    }

    fn on_chan_open_ack(
        &mut self,
        port_id: &str,
        channel_id: &str,
        counterparty_channel_id: &str,
        counterparty_version: &str,
    ) -> Result<(), IbcModuleError> {
        self.app
            .on_chan_open_ack(port_id, channel_id, counterparty_channel_id, counterparty_version)
    }

    fn on_chan_open_confirm(&mut self, port_id: &str, channel_id: &str) -> Result<(), IbcModuleError> {
        self.app.on_chan_open_confirm(port_id, channel_id)
    }

    fn on_chan_close_init(&mut self, port_id: &str, channel_id: &str) -> Result<(), IbcModuleError> {
        self.app.on_chan_close_init(port_id, channel_id)
    }

    fn on_chan_close_confirm(&mut self, port_id: &str, channel_id: &str) -> Result<(), IbcModuleError> {
        self.app.on_chan_close_confirm(port_id, channel_id)
    }

    fn on_recv_packet(&mut self, packet: &Packet, relayer: &str) -> Acknowledgement {
        self.handle_recv_packet(packet, relayer)
    }

    fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &[u8],
        relayer: &str,
    ) -> Result<(), IbcModuleError> {
        self.app.on_acknowledgement_packet(packet, acknowledgement, relayer)
    }

    fn on_timeout_packet(&mut self, packet: &Packet, relayer: &str) -> Result<(), IbcModuleError> {
        self.app.on_timeout_packet(packet, relayer)
    }
}

/// A packet handed to the middleware as a [`Service`] request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecvPacket {
    pub packet: Packet,
    pub relayer: String,
}

impl RecvPacket {
    pub fn new<T: Into<String>>(packet: Packet, relayer: T) -> Self {
        Self {
            packet,
            relayer: relayer.into(),
        }
    }
}

impl<A, K, P> Service<RecvPacket> for AutoCctpMiddleware<A, K, P>
where
    A: IbcModule,
    K: CctpKeeper,
    P: RoutingPolicy,
{
    type Error = Infallible;
    type Future = future::Ready<Result<Self::Response, Self::Error>>;
    type Response = Acknowledgement;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: RecvPacket) -> Self::Future {
        trace!(target: LOG_TARGET, "Receiving {} from relayer {}", request.packet, request.relayer);
        future::ready(Ok(self.handle_recv_packet(&request.packet, &request.relayer)))
    }
}

/// Wraps an [`IbcModule`] in an [`AutoCctpMiddleware`] that burns through `keeper` under `policy`
#[derive(Clone)]
pub struct AutoCctpLayer<K, P> {
    keeper: K,
    policy: P,
}

impl<K, P> AutoCctpLayer<K, P> {
    pub fn new(keeper: K, policy: P) -> Self {
        Self { keeper, policy }
    }
}

impl<A, K, P> Layer<A> for AutoCctpLayer<K, P>
where
    K: Clone,
    P: Clone,
{
    type Service = AutoCctpMiddleware<A, K, P>;

    fn layer(&self, app: A) -> Self::Service {
        AutoCctpMiddleware::new(app, self.keeper.clone(), self.policy.clone())
    }
}

#[cfg(test)]
mod test {
    use autocctp_common_types::{packet::Height, transfer::FungibleTokenPacketData};

    use super::*;
    use crate::{
        burn::{CctpKeeperError, DepositForBurnResponse, MsgDepositForBurn, MsgDepositForBurnWithCaller},
        config::AutoCctpConfig,
        ibc_module::{Counterparty, Order},
    };

    struct CreditingApp {
        received: usize,
    }

    impl IbcModule for CreditingApp {
        fn on_chan_open_init(&mut self, open: &ChannelOpen) -> Result<String, IbcModuleError> {
            Ok(open.version.clone())
        }

        fn on_chan_open_try(&mut self, _: &ChannelOpen, version: &str) -> Result<String, IbcModuleError> {
            Ok(version.to_string())
        }

        fn on_chan_open_ack(&mut self, _: &str, _: &str, _: &str, _: &str) -> Result<(), IbcModuleError> {
            Ok(())
        }

        fn on_chan_open_confirm(&mut self, _: &str, _: &str) -> Result<(), IbcModuleError> {
            Ok(())
        }

        fn on_chan_close_init(&mut self, _: &str, channel_id: &str) -> Result<(), IbcModuleError> {
            Err(IbcModuleError::InvalidChannelClose(channel_id.to_string()))
        }

        fn on_chan_close_confirm(&mut self, _: &str, _: &str) -> Result<(), IbcModuleError> {
            Ok(())
        }

        fn on_recv_packet(&mut self, _: &Packet, _: &str) -> Acknowledgement {
            self.received += 1;
            Acknowledgement::transfer_success()
        }

        fn on_acknowledgement_packet(&mut self, _: &Packet, _: &[u8], _: &str) -> Result<(), IbcModuleError> {
            Ok(())
        }

        fn on_timeout_packet(&mut self, _: &Packet, _: &str) -> Result<(), IbcModuleError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct NonceKeeper {
        nonce: u64,
    }

    impl CctpKeeper for NonceKeeper {
        fn deposit_for_burn(&mut self, _: MsgDepositForBurn) -> Result<DepositForBurnResponse, CctpKeeperError> {
            self.nonce += 1;
            Ok(DepositForBurnResponse { nonce: self.nonce })
        }

        fn deposit_for_burn_with_caller(
            &mut self,
            _: MsgDepositForBurnWithCaller,
        ) -> Result<DepositForBurnResponse, CctpKeeperError> {
            Err(CctpKeeperError::Paused)
        }
    }

    fn middleware() -> AutoCctpMiddleware<CreditingApp, NonceKeeper, AutoCctpConfig> {
        AutoCctpMiddleware::new(
            CreditingApp { received: 0 },
            NonceKeeper::default(),
            AutoCctpConfig::default(),
        )
    }

    fn packet(data: Vec<u8>) -> Packet {
        Packet {
            sequence: 1,
            source_port: "transfer".to_string(),
            source_channel: "channel-4".to_string(),
            destination_port: "transfer".to_string(),
            destination_channel: "channel-0".to_string(),
            data,
            timeout_height: Height::default(),
            timeout_timestamp: 1_700_000_000_000_000_000,
        }
    }

    fn transfer(amount: &str, memo: &str) -> Vec<u8> {
        FungibleTokenPacketData {
            denom: "uusdc".to_string(),
            amount: amount.to_string(),
            sender: "osmo1sender".to_string(),
            receiver: "noble1receiver".to_string(),
            memo: memo.to_string(),
        }
        .to_bytes()
    }

    const MEMO: &str = r#"{"circle":{"cctp":{"depositForBurn":{"destinationDomain":0,"mintRecipient":"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAE=","amount":"100"}}}}"#;

    #[test]
    fn it_burns_after_crediting() {
        let mut middleware = middleware();
        let ack = middleware.on_recv_packet(&packet(transfer("150", MEMO)), "relayer");
        assert_eq!(ack, Acknowledgement::transfer_success());
        assert_eq!(middleware.app().received, 1);
        assert_eq!(middleware.keeper().nonce, 1);
    }

    #[test]
    fn it_does_not_credit_undecodable_packets() {
        let mut middleware = middleware();
        let ack = middleware.on_recv_packet(&packet(b"not json".to_vec()), "relayer");
        assert!(ack
            .error_reason()
            .unwrap()
            .starts_with("invalid transfer packet data"));
        assert_eq!(middleware.app().received, 0);
    }

    #[test]
    fn it_rejects_oversized_burns() {
        let mut middleware = middleware();
        let ack = middleware.on_recv_packet(&packet(transfer("50", MEMO)), "relayer");
        assert_eq!(
            ack,
            Acknowledgement::error("burn amount 100 exceeds the transferred amount 50")
        );
        assert_eq!(middleware.keeper().nonce, 0);
    }

    #[test]
    fn it_forwards_handshake_callbacks() {
        let mut middleware = middleware();
        assert_eq!(
            middleware.on_chan_close_init("transfer", "channel-0"),
            Err(IbcModuleError::InvalidChannelClose("channel-0".to_string()))
        );
        let open = ChannelOpen {
            order: Order::Unordered,
            connection_hops: vec!["connection-0".to_string()],
            port_id: "transfer".to_string(),
            channel_id: "channel-1".to_string(),
            counterparty: Counterparty {
                port_id: "transfer".to_string(),
                channel_id: Some("channel-9".to_string()),
            },
            version: "ics20-1".to_string(),
        };
        assert_eq!(middleware.on_chan_open_try(&open, "ics20-1"), Ok("ics20-1".to_string()));
    }
}
