//! Client runtime integration.
//!
//! Bridges the sync frame loop with the async TCP session.

use tokio::net::TcpStream;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::config::ClientConfig;
use crate::session::{run_session, SessionEvent};

/// Running client instance.
///
/// Owns the tokio runtime that hosts the session task. Dropping the client
/// drops the runtime, which aborts the task and closes the socket - the
/// teardown path, and the only one.
pub struct Client {
    _rt: Runtime,
    event_rx: mpsc::Receiver<SessionEvent>,
}

impl Client {
    /// Connect to the configured server and start the session task.
    ///
    /// The TCP connect itself happens here, synchronously, so a missing
    /// server surfaces as an error from construction rather than a dead
    /// event stream.
    pub fn connect(config: ClientConfig) -> anyhow::Result<Self> {
        let (event_tx, event_rx) = mpsc::channel::<SessionEvent>(config.max_pending_events.max(1));

        let rt = Runtime::new()?;
        let stream = rt.block_on(TcpStream::connect(config.endpoint()))?;
        info!(host = %config.host, port = config.port, "connected to simulation server");

        rt.spawn(async move {
            if let Err(e) = run_session(stream, config, event_tx.clone()).await {
                error!(error = %e, "session task failed");
                let _ = event_tx.send(SessionEvent::Closed).await;
            }
        });

        Ok(Self {
            _rt: rt,
            event_rx,
        })
    }

    /// Take at most one pending session event, without blocking.
    ///
    /// The frame loop calls this once per frame, which is what keeps the
    /// one-command-per-frame invariant.
    pub fn try_recv(&mut self) -> Option<SessionEvent> {
        self.event_rx.try_recv().ok()
    }
}
