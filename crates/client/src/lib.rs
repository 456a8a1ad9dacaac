//! Client module - simulation control via TCP socket with a text protocol
//!
//! This module connects the agent to an external simulation server and
//! delivers its commands to the frame loop. The protocol is the server's
//! native one: bare space-delimited ASCII tokens over a raw TCP stream,
//! one logical message per receive, no length framing.
//!
//! # Protocol Overview
//!
//! 1. **Connection**: client connects to the server socket (default:
//!    127.0.0.1:1101)
//! 2. **Handshake**: server sends `R?`, client answers `R`
//! 3. **Streaming**: server sends one command per message until `E`
//!
//! # Message Types
//!
//! ## Server → Client
//!
//! - **`R?`**: readiness query (handshake only)
//! - **`M <x> <y>`**: move the agent to cell `(x, y)`, both in `[0, 30]`
//! - **`E`**: end of session
//!
//! ## Client → Server
//!
//! - **`R`**: readiness acknowledgment
//!
//! Any other message is ignored and the stream continues. Termination
//! compares the whole message verbatim, so `E` followed by anything else
//! is just another ignored message.
//!
//! # Architecture
//!
//! The blocking receive never runs on the frame loop. A background tokio
//! task owns the socket and pushes decoded [`SessionEvent`]s into a bounded
//! channel; the frame loop drains at most one event per frame through
//! [`Client::try_recv`]. A silent server therefore stalls nothing but its
//! own session task.
//!
//! # Environment Variables
//!
//! - `GRID_AGENT_HOST`: server address (default: "127.0.0.1")
//! - `GRID_AGENT_PORT`: server port (default: 1101)
//! - `GRID_AGENT_DISABLED`: set to "1" or "true" to skip connecting entirely
//!
//! # Testing
//!
//! The server end is trivial to script from `nc`:
//!
//! ```bash
//! printf 'R?' | nc -l 127.0.0.1 1101
//! ```

pub mod config;
pub mod protocol;
pub mod runtime;
pub mod session;

pub use config::ClientConfig;
pub use protocol::{ProtocolError, ServerMessage};
pub use runtime::Client;
pub use session::SessionEvent;
