//! Core agent state - pure, deterministic, and testable
//!
//! This module owns the agent's position and session phase. It has **zero
//! dependencies** on networking, terminals, or I/O, making it:
//!
//! - **Deterministic**: the same command sequence yields the same positions
//! - **Testable**: every transition is a plain method call
//! - **Portable**: usable from the terminal runner or a headless harness
//!
//! The frame loop feeds it at most one [`AgentCommand`] per frame; the
//! position write is a single struct assignment, so a render never observes
//! a partially applied move.
//!
//! # Example
//!
//! ```
//! use grid_agent_core::Agent;
//! use grid_agent_types::{AgentCommand, CellIndex, GridTable};
//!
//! let table = GridTable::default();
//! let mut agent = Agent::new(table);
//!
//! let col = CellIndex::new(3).unwrap();
//! let row = CellIndex::new(10).unwrap();
//! agent.apply(AgentCommand::MoveTo { col, row });
//!
//! assert_eq!(agent.position(), table.position(col, row));
//! ```

use grid_agent_types::{AgentCommand, GridTable, Position, SessionPhase};

/// The controlled agent: a position on the grid plus the session phase.
///
/// Owns a copy of the coordinate table so command application needs no
/// outside lookups.
#[derive(Debug, Clone)]
pub struct Agent {
    table: GridTable,
    position: Position,
    phase: SessionPhase,
}

impl Agent {
    /// Create an agent parked at the fixed start cell, disconnected.
    pub fn new(table: GridTable) -> Self {
        Self {
            table,
            position: table.start_position(),
            phase: SessionPhase::Disconnected,
        }
    }

    /// Current world position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The coordinate table this agent moves on.
    pub fn table(&self) -> &GridTable {
        &self.table
    }

    /// Record that the TCP connection is up (pre-handshake).
    pub fn connected(&mut self) {
        self.advance(SessionPhase::Connected);
    }

    /// Record a completed `R?`/`R` handshake; the command stream is live.
    pub fn handshake_complete(&mut self) {
        self.advance(SessionPhase::Ready);
    }

    /// Record end of session, whether signalled (`E`) or by peer close.
    pub fn terminate(&mut self) {
        self.advance(SessionPhase::Terminated);
    }

    /// Apply one command. Indices were validated at parse time, so this
    /// cannot fail; the position is replaced wholesale.
    pub fn apply(&mut self, command: AgentCommand) {
        match command {
            AgentCommand::MoveTo { col, row } => {
                self.position = self.table.position(col, row);
            }
        }
    }

    // Forward-only: a later phase never rolls back to an earlier one.
    fn advance(&mut self, to: SessionPhase) {
        if to > self.phase {
            self.phase = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_agent_types::{CellIndex, AGENT_HEIGHT, CELL_OFFSETS};

    fn cell(i: i64) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn new_agent_starts_at_column_6_row_0() {
        let agent = Agent::new(GridTable::default());
        assert_eq!(
            agent.position(),
            Position::new(CELL_OFFSETS[6], AGENT_HEIGHT, -CELL_OFFSETS[0])
        );
        assert_eq!(agent.phase(), SessionPhase::Disconnected);
    }

    #[test]
    fn apply_moves_to_looked_up_cell() {
        let mut agent = Agent::new(GridTable::default());
        agent.apply(AgentCommand::MoveTo {
            col: cell(6),
            row: cell(0),
        });
        assert_eq!(
            agent.position(),
            Position::new(CELL_OFFSETS[6], AGENT_HEIGHT, -CELL_OFFSETS[0])
        );

        agent.apply(AgentCommand::MoveTo {
            col: cell(0),
            row: cell(30),
        });
        assert_eq!(
            agent.position(),
            Position::new(CELL_OFFSETS[0], AGENT_HEIGHT, -CELL_OFFSETS[30])
        );
    }

    #[test]
    fn phase_transitions_run_forward_only() {
        let mut agent = Agent::new(GridTable::default());
        agent.connected();
        assert_eq!(agent.phase(), SessionPhase::Connected);
        agent.handshake_complete();
        assert_eq!(agent.phase(), SessionPhase::Ready);

        // A stray earlier transition must not roll the machine back.
        agent.connected();
        assert_eq!(agent.phase(), SessionPhase::Ready);

        agent.terminate();
        assert_eq!(agent.phase(), SessionPhase::Terminated);
        agent.handshake_complete();
        assert_eq!(agent.phase(), SessionPhase::Terminated);
    }

    #[test]
    fn terminate_applies_from_any_phase() {
        let mut agent = Agent::new(GridTable::default());
        agent.terminate();
        assert_eq!(agent.phase(), SessionPhase::Terminated);
    }

    #[test]
    fn terminate_leaves_position_unchanged() {
        let mut agent = Agent::new(GridTable::default());
        let before = agent.position();
        agent.terminate();
        assert_eq!(agent.position(), before);
    }
}
