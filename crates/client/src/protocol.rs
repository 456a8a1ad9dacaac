//! Wire protocol: literals, parsing, and the fault taxonomy.
//!
//! Messages are short space-delimited ASCII tokens; there is no framing
//! layer, so parsing works on exactly what one receive returned. Matching
//! is verbatim: no trimming, no case folding. A message that is neither
//! the end signal nor a move is not an error, it is simply not for us.

use grid_agent_types::{AgentCommand, CellIndex, GRID_CELLS};

use thiserror::Error;

/// Readiness query, server → client. Handshake only.
pub const READY_QUERY: &str = "R?";

/// Readiness acknowledgment, client → server.
pub const READY_ACK: &str = "R";

/// First token of a move command.
pub const MOVE_TOKEN: &str = "M";

/// End-of-session signal; compared against the whole message.
pub const END_TOKEN: &str = "E";

/// A fault in a received message.
///
/// Faults are reported, not thrown: the session forwards them as events
/// and keeps streaming. The move that produced one is never applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A `M` message whose arguments are missing or not base-10 integers.
    #[error("malformed move command: {0:?}")]
    MalformedCommand(String),

    /// A move index outside `[0, 30]`.
    #[error("cell index {index} outside the grid (valid range 0..={})", GRID_CELLS - 1)]
    IndexOutOfRange { index: i64 },

    /// A receive that did not decode as UTF-8.
    #[error("message is not valid UTF-8")]
    InvalidEncoding,
}

/// One decoded server message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    /// `M <x> <y>` with both indices validated.
    Move(AgentCommand),
    /// The exact message `E`.
    End,
    /// Anything else; ignored by the session.
    Unhandled,
}

/// Decode one received message as UTF-8 text.
pub fn decode(buf: &[u8]) -> Result<&str, ProtocolError> {
    std::str::from_utf8(buf).map_err(|_| ProtocolError::InvalidEncoding)
}

/// Parse one message.
///
/// The end signal is matched against the full message before any
/// splitting, so `"E 1"` is not termination (nor a move) and falls
/// through to [`ServerMessage::Unhandled`].
pub fn parse_message(raw: &str) -> Result<ServerMessage, ProtocolError> {
    if raw == END_TOKEN {
        return Ok(ServerMessage::End);
    }

    let mut tokens = raw.split(' ');
    match tokens.next() {
        Some(MOVE_TOKEN) => {
            let col = parse_index(tokens.next(), raw)?;
            let row = parse_index(tokens.next(), raw)?;
            Ok(ServerMessage::Move(AgentCommand::MoveTo { col, row }))
        }
        _ => Ok(ServerMessage::Unhandled),
    }
}

fn parse_index(token: Option<&str>, raw: &str) -> Result<CellIndex, ProtocolError> {
    let token = token.ok_or_else(|| ProtocolError::MalformedCommand(raw.to_string()))?;
    let value: i64 = token
        .parse()
        .map_err(|_| ProtocolError::MalformedCommand(raw.to_string()))?;
    CellIndex::new(value).ok_or(ProtocolError::IndexOutOfRange { index: value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(i: i64) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn parses_move_command() {
        assert_eq!(
            parse_message("M 6 0"),
            Ok(ServerMessage::Move(AgentCommand::MoveTo {
                col: cell(6),
                row: cell(0),
            }))
        );
        assert_eq!(
            parse_message("M 30 30"),
            Ok(ServerMessage::Move(AgentCommand::MoveTo {
                col: cell(30),
                row: cell(30),
            }))
        );
    }

    #[test]
    fn end_matches_whole_message_only() {
        assert_eq!(parse_message("E"), Ok(ServerMessage::End));
        // Trailing bytes mean it is not the end signal, and not a move.
        assert_eq!(parse_message("E 1"), Ok(ServerMessage::Unhandled));
        assert_eq!(parse_message("E\n"), Ok(ServerMessage::Unhandled));
    }

    #[test]
    fn unknown_first_token_is_unhandled() {
        assert_eq!(parse_message("X"), Ok(ServerMessage::Unhandled));
        assert_eq!(parse_message("R?"), Ok(ServerMessage::Unhandled));
        assert_eq!(parse_message(""), Ok(ServerMessage::Unhandled));
        assert_eq!(parse_message("m 1 2"), Ok(ServerMessage::Unhandled));
    }

    #[test]
    fn missing_or_non_numeric_arguments_are_malformed() {
        assert_eq!(
            parse_message("M"),
            Err(ProtocolError::MalformedCommand("M".to_string()))
        );
        assert_eq!(
            parse_message("M 1"),
            Err(ProtocolError::MalformedCommand("M 1".to_string()))
        );
        assert_eq!(
            parse_message("M a b"),
            Err(ProtocolError::MalformedCommand("M a b".to_string()))
        );
        assert_eq!(
            parse_message("M 1.5 2"),
            Err(ProtocolError::MalformedCommand("M 1.5 2".to_string()))
        );
    }

    #[test]
    fn out_of_range_index_is_reported_not_clamped() {
        assert_eq!(
            parse_message("M 31 0"),
            Err(ProtocolError::IndexOutOfRange { index: 31 })
        );
        assert_eq!(
            parse_message("M 0 -1"),
            Err(ProtocolError::IndexOutOfRange { index: -1 })
        );
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert_eq!(decode(b"M 1 2"), Ok("M 1 2"));
        assert_eq!(decode(&[0xff, 0xfe]), Err(ProtocolError::InvalidEncoding));
    }
}
