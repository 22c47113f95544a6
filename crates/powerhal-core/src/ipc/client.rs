//! IPC-backed implementation of the power service boundary.
//!
//! [`RemotePowerClient`] connects to the power daemon's loopback endpoint
//! and speaks the line-delimited wire from [`wire`](super::wire): one
//! request object out, one reply object back, strictly in order. Every
//! transport failure — connect timeout, broken stream, undecodable or
//! out-of-shape reply, or a fault reported by the daemon — maps into
//! [`PowerHalError`]; a domain-valid `false` support answer stays a
//! successful call.
//!
//! # Thread Safety
//!
//! A tokio `Mutex` serializes the write-then-read exchange, so one client
//! can be shared across tasks; requests queue rather than interleave.

use super::wire::{PowerReply, PowerRequest};
use crate::capability::{Boost, Mode};
use crate::config::IpcConfig;
use crate::service::PowerService;
use crate::{PowerHalError, Result};
use async_trait::async_trait;
use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug)]
struct Channel {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

/// Power service client over a local line-delimited JSON channel.
#[derive(Debug)]
pub struct RemotePowerClient {
    channel: Mutex<Channel>,
    addr: SocketAddr,
}

impl RemotePowerClient {
    /// Connect to the power daemon's IPC endpoint.
    ///
    /// Gives up after [`IpcConfig::CONNECT_TIMEOUT`].
    pub async fn connect(addr: SocketAddr) -> Result<Self> {
        let stream = tokio::time::timeout(IpcConfig::CONNECT_TIMEOUT, TcpStream::connect(addr))
            .await
            .map_err(|_| PowerHalError::ConnectionLost { addr })?
            .map_err(|_| PowerHalError::ConnectionLost { addr })?;

        debug!("Connected to power service at {}", addr);

        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            channel: Mutex::new(Channel {
                reader: BufReader::new(read_half),
                writer: write_half,
            }),
            addr,
        })
    }

    /// Address of the connected daemon.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Send one request and read its reply.
    async fn exchange(&self, request: PowerRequest) -> Result<PowerReply> {
        let mut line = serde_json::to_string(&request)?;
        line.push('\n');

        let mut channel = self.channel.lock().await;

        channel
            .writer
            .write_all(line.as_bytes())
            .await
            .map_err(|_| PowerHalError::ConnectionLost { addr: self.addr })?;

        let mut reply_line = String::new();
        let read = channel
            .reader
            .read_line(&mut reply_line)
            .await
            .map_err(|_| PowerHalError::ConnectionLost { addr: self.addr })?;
        if read == 0 {
            // EOF mid-exchange: the daemon went away.
            return Err(PowerHalError::ConnectionLost { addr: self.addr });
        }

        serde_json::from_str(&reply_line).map_err(|e| PowerHalError::Json {
            message: format!("Failed to parse power service reply: {}", e),
            source: Some(e),
        })
    }
}

/// The daemon answered, but not with the shape this request calls for.
fn unexpected_reply(reply: PowerReply) -> PowerHalError {
    PowerHalError::Validation {
        field: "reply".to_string(),
        message: format!("reply does not match the request: {:?}", reply),
    }
}

#[async_trait]
impl PowerService for RemotePowerClient {
    async fn query_boost_supported(&self, boost: Boost) -> Result<bool> {
        match self.exchange(PowerRequest::IsBoostSupported { boost }).await? {
            PowerReply::Supported { supported } => Ok(supported),
            PowerReply::Error { message } => Err(PowerHalError::Remote { message }),
            reply => Err(unexpected_reply(reply)),
        }
    }

    async fn invoke_boost(&self, boost: Boost, duration_ms: i32) -> Result<()> {
        match self
            .exchange(PowerRequest::SetBoost { boost, duration_ms })
            .await?
        {
            PowerReply::Done => Ok(()),
            PowerReply::Error { message } => Err(PowerHalError::Remote { message }),
            reply => Err(unexpected_reply(reply)),
        }
    }

    async fn query_mode_supported(&self, mode: Mode) -> Result<bool> {
        match self.exchange(PowerRequest::IsModeSupported { mode }).await? {
            PowerReply::Supported { supported } => Ok(supported),
            PowerReply::Error { message } => Err(PowerHalError::Remote { message }),
            reply => Err(unexpected_reply(reply)),
        }
    }

    async fn invoke_mode(&self, mode: Mode, enabled: bool) -> Result<()> {
        match self.exchange(PowerRequest::SetMode { mode, enabled }).await? {
            PowerReply::Done => Ok(()),
            PowerReply::Error { message } => Err(PowerHalError::Remote { message }),
            reply => Err(unexpected_reply(reply)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::HalResult;
    use crate::wrapper::HalWrapper;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::net::TcpListener;

    /// Minimal scripted stand-in for the daemon: accepts one connection and
    /// answers each request line through `respond`.
    async fn spawn_daemon<F>(respond: F) -> SocketAddr
    where
        F: Fn(PowerRequest) -> PowerReply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (read_half, mut write_half) = stream.into_split();
            let mut lines = BufReader::new(read_half).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let request: PowerRequest = serde_json::from_str(&line).unwrap();
                let mut reply = serde_json::to_string(&respond(request)).unwrap();
                reply.push('\n');
                if write_half.write_all(reply.as_bytes()).await.is_err() {
                    break;
                }
            }
        });
        addr
    }

    fn echo_support(
        supported_boosts: Vec<Boost>,
        supported_modes: Vec<Mode>,
    ) -> impl Fn(PowerRequest) -> PowerReply + Send + Sync + 'static {
        move |request| match request {
            PowerRequest::IsBoostSupported { boost } => PowerReply::Supported {
                supported: supported_boosts.contains(&boost),
            },
            PowerRequest::SetBoost { .. } => PowerReply::Done,
            PowerRequest::IsModeSupported { mode } => PowerReply::Supported {
                supported: supported_modes.contains(&mode),
            },
            PowerRequest::SetMode { .. } => PowerReply::Done,
        }
    }

    #[tokio::test]
    async fn test_all_four_operations_roundtrip() {
        let addr =
            spawn_daemon(echo_support(vec![Boost::Interaction], vec![Mode::LowPower])).await;
        let client = RemotePowerClient::connect(addr).await.unwrap();

        assert!(client
            .query_boost_supported(Boost::Interaction)
            .await
            .unwrap());
        client.invoke_boost(Boost::Interaction, 100).await.unwrap();
        assert!(client.query_mode_supported(Mode::LowPower).await.unwrap());
        client.invoke_mode(Mode::LowPower, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_domain_false_is_not_an_error() {
        let addr = spawn_daemon(echo_support(vec![], vec![])).await;
        let client = RemotePowerClient::connect(addr).await.unwrap();

        let supported = client.query_boost_supported(Boost::CameraShot).await.unwrap();
        assert!(!supported);
    }

    #[tokio::test]
    async fn test_daemon_fault_maps_to_remote_error() {
        let addr = spawn_daemon(|request| match request {
            PowerRequest::SetBoost { .. } => PowerReply::Error {
                message: "hal backend fault".to_string(),
            },
            _ => PowerReply::Supported { supported: true },
        })
        .await;
        let client = RemotePowerClient::connect(addr).await.unwrap();

        let err = client.invoke_boost(Boost::Interaction, 100).await.unwrap_err();
        match err {
            PowerHalError::Remote { message } => assert!(message.contains("hal backend fault")),
            other => panic!("Expected Remote, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_out_of_shape_reply_is_rejected() {
        // A query answered with an invocation acknowledgement.
        let addr = spawn_daemon(|_| PowerReply::Done).await;
        let client = RemotePowerClient::connect(addr).await.unwrap();

        let err = client
            .query_boost_supported(Boost::Interaction)
            .await
            .unwrap_err();
        assert!(matches!(err, PowerHalError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_connect_to_dead_endpoint_fails() {
        // Nothing listens on port 1.
        let addr: SocketAddr = "127.0.0.1:1".parse().unwrap();
        let result = RemotePowerClient::connect(addr).await;

        match result.unwrap_err() {
            PowerHalError::ConnectionLost { addr } => assert_eq!(addr.port(), 1),
            other => panic!("Expected ConnectionLost, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_daemon_hangup_maps_to_connection_lost() {
        // Answers exactly one request, then drops the connection.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (read_half, mut write_half) = stream.into_split();
            let mut lines = BufReader::new(read_half).lines();
            if let Ok(Some(_)) = lines.next_line().await {
                let mut reply = serde_json::to_string(&PowerReply::Done).unwrap();
                reply.push('\n');
                let _ = write_half.write_all(reply.as_bytes()).await;
            }
        });

        let client = RemotePowerClient::connect(addr).await.unwrap();
        client.invoke_boost(Boost::Interaction, 100).await.unwrap();

        let err = client.invoke_boost(Boost::Interaction, 100).await.unwrap_err();
        assert!(matches!(err, PowerHalError::ConnectionLost { .. }));
    }

    #[tokio::test]
    async fn test_wrapper_over_loopback() {
        let queries = Arc::new(AtomicUsize::new(0));
        let counted = queries.clone();
        let addr = spawn_daemon(move |request| match request {
            PowerRequest::IsBoostSupported { boost } => {
                counted.fetch_add(1, Ordering::SeqCst);
                PowerReply::Supported {
                    supported: boost == Boost::Interaction,
                }
            }
            PowerRequest::SetBoost { .. } => PowerReply::Done,
            PowerRequest::IsModeSupported { mode } => PowerReply::Supported {
                supported: mode == Mode::LowPower,
            },
            PowerRequest::SetMode { .. } => PowerReply::Done,
        })
        .await;

        let client = Arc::new(RemotePowerClient::connect(addr).await.unwrap());
        let hal = HalWrapper::new(client);

        assert_eq!(
            hal.set_boost(Boost::Interaction, 100).await,
            HalResult::Successful
        );
        assert_eq!(
            hal.set_boost(Boost::Interaction, 100).await,
            HalResult::Successful
        );
        assert_eq!(hal.set_mode(Mode::LowPower, true).await, HalResult::Successful);
        assert_eq!(hal.set_mode(Mode::VrMode, true).await, HalResult::Unsupported);

        // The boost support record crossed the wire exactly once.
        assert_eq!(queries.load(Ordering::SeqCst), 1);
    }
}
