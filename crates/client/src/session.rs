//! The session task: handshake plus receive loop.
//!
//! Owns the socket for its whole life. One `read()` per logical message
//! into a fixed buffer, exactly the wire contract: the server writes one
//! message per send and nothing here reassembles across receives.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::protocol::{self, ProtocolError, ServerMessage, READY_ACK, READY_QUERY};
use grid_agent_types::AgentCommand;

/// Event delivered to the frame loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Handshake completed; the command stream is live.
    Ready,
    /// A validated move command.
    Command(AgentCommand),
    /// A message that failed to parse; the stream continues.
    Fault(ProtocolError),
    /// The server sent the end signal.
    Ended,
    /// The connection went away without an end signal.
    Closed,
}

/// Run one session over an already-connected stream.
///
/// Clean endings (end signal, peer close, handshake mismatch) emit their
/// own final event and return `Ok`. I/O errors propagate to the caller,
/// which is responsible for emitting `Closed`.
pub(crate) async fn run_session(
    mut stream: TcpStream,
    config: ClientConfig,
    events: mpsc::Sender<SessionEvent>,
) -> anyhow::Result<()> {
    let mut buf = vec![0u8; config.recv_buffer];

    // Handshake: one receive, verbatim compare, one acknowledgment.
    let n = stream.read(&mut buf).await?;
    if n == 0 {
        warn!("server closed the connection before the handshake");
        let _ = events.send(SessionEvent::Closed).await;
        return Ok(());
    }

    match protocol::decode(&buf[..n]) {
        Ok(msg) if msg == READY_QUERY => {}
        Ok(msg) => {
            // The wire contract defines no recovery here; end the session
            // rather than hang waiting for a query that already passed.
            warn!(received = msg, "unexpected handshake message, ending session");
            let _ = events.send(SessionEvent::Closed).await;
            return Ok(());
        }
        Err(e) => {
            warn!(error = %e, "handshake message did not decode, ending session");
            let _ = events.send(SessionEvent::Closed).await;
            return Ok(());
        }
    }

    stream.write_all(READY_ACK.as_bytes()).await?;
    info!("handshake complete, streaming commands");
    if events.send(SessionEvent::Ready).await.is_err() {
        return Ok(());
    }

    loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            info!("server closed the connection");
            let _ = events.send(SessionEvent::Closed).await;
            return Ok(());
        }

        let msg = match protocol::decode(&buf[..n]) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(error = %e, "dropping undecodable message");
                if events.send(SessionEvent::Fault(e)).await.is_err() {
                    return Ok(());
                }
                continue;
            }
        };

        match protocol::parse_message(msg) {
            Ok(ServerMessage::End) => {
                info!("end of session signalled");
                let _ = events.send(SessionEvent::Ended).await;
                return Ok(());
            }
            Ok(ServerMessage::Move(command)) => {
                if events.send(SessionEvent::Command(command)).await.is_err() {
                    // Frame loop is gone; nothing left to drive.
                    return Ok(());
                }
            }
            Ok(ServerMessage::Unhandled) => {
                debug!(message = msg, "ignoring message");
            }
            Err(e) => {
                warn!(message = msg, error = %e, "bad command");
                if events.send(SessionEvent::Fault(e)).await.is_err() {
                    return Ok(());
                }
            }
        }
    }
}
