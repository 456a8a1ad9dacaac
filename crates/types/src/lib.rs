//! Shared types module - grid geometry, positions, and commands
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (agent state, terminal view, wire protocol).
//!
//! # Grid Geometry
//!
//! The simulation world is a square grid of 31 cells per axis, indexed 0-30.
//! Cell spacing is not uniform: the server-side world was measured by hand,
//! so each index maps to a fixed real-valued offset rather than `index * step`.
//! The same offset table serves both planar axes:
//!
//! - **x axis**: `offsets[col]`
//! - **z axis**: `-offsets[row]` (the world's second axis runs negative)
//! - **y axis**: fixed height [`AGENT_HEIGHT`]
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame interval (~60 FPS); one command applies per frame |
//!
//! # Examples
//!
//! ```
//! use grid_agent_types::{CellIndex, GridTable, GRID_CELLS};
//!
//! let table = GridTable::default();
//! let col = CellIndex::new(6).unwrap();
//! let row = CellIndex::new(0).unwrap();
//!
//! let pos = table.position(col, row);
//! assert_eq!(pos.x, table.offset(col));
//! assert_eq!(pos.z, -table.offset(row));
//!
//! // Indices outside the grid are rejected at construction.
//! assert!(CellIndex::new(GRID_CELLS as i64).is_none());
//! ```

/// Number of cells along each grid axis (indexed 0-30)
pub const GRID_CELLS: usize = 31;

/// Fixed agent height; the agent never leaves the ground plane
pub const AGENT_HEIGHT: f32 = 0.0;

/// Starting cell column before any command arrives
pub const START_COLUMN: u8 = 6;

/// Starting cell row before any command arrives
pub const START_ROW: u8 = 0;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// World offset for each grid index, shared by both planar axes.
///
/// These are measured values, not a computed progression; they are the
/// source of truth for where a cell sits in world space.
pub const CELL_OFFSETS: [f32; GRID_CELLS] = [
    0.166, 0.465, 0.818, 1.123, 1.453, 1.765, 2.076, 2.412, 2.725, 3.057,
    3.378, 3.71, 4.031, 4.352, 4.678, 5.016, 5.33, 5.608, 5.945, 6.332,
    6.639, 6.957, 7.262, 7.569, 7.908, 8.244, 8.561, 8.863, 9.213, 9.536,
    9.841,
];

/// A validated grid index in `[0, GRID_CELLS)`.
///
/// The only way to construct a `CellIndex` is through [`CellIndex::new`],
/// which range-checks the raw value. Table lookups through a `CellIndex`
/// are therefore infallible.
///
/// # Examples
///
/// ```
/// use grid_agent_types::CellIndex;
///
/// assert_eq!(CellIndex::new(0).map(|c| c.get()), Some(0));
/// assert_eq!(CellIndex::new(30).map(|c| c.get()), Some(30));
/// assert_eq!(CellIndex::new(31), None);
/// assert_eq!(CellIndex::new(-1), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex(u8);

impl CellIndex {
    /// The first cell.
    pub const ZERO: CellIndex = CellIndex(0);

    /// Validate a raw integer as a grid index.
    pub fn new(raw: i64) -> Option<Self> {
        if (0..GRID_CELLS as i64).contains(&raw) {
            Some(CellIndex(raw as u8))
        } else {
            None
        }
    }

    /// The raw index value.
    pub fn get(&self) -> u8 {
        self.0
    }

    /// The index as a table subscript.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Agent placement in world space.
///
/// `y` is always [`AGENT_HEIGHT`]; it is carried explicitly because the
/// transform the host hands us is three-dimensional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// The grid-to-world coordinate table.
///
/// Immutable after construction and cheap to copy. Carried in client
/// configuration rather than read from a global, so tests can substitute
/// their own geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTable {
    offsets: [f32; GRID_CELLS],
}

impl Default for GridTable {
    fn default() -> Self {
        Self {
            offsets: CELL_OFFSETS,
        }
    }
}

impl GridTable {
    /// Build a table from explicit offsets.
    pub fn new(offsets: [f32; GRID_CELLS]) -> Self {
        Self { offsets }
    }

    /// World offset for a validated index.
    pub fn offset(&self, index: CellIndex) -> f32 {
        self.offsets[index.index()]
    }

    /// World position for a cell: `(offsets[col], AGENT_HEIGHT, -offsets[row])`.
    pub fn position(&self, col: CellIndex, row: CellIndex) -> Position {
        Position::new(self.offset(col), AGENT_HEIGHT, -self.offset(row))
    }

    /// Position of the fixed start cell (column 6, row 0).
    pub fn start_position(&self) -> Position {
        // START_COLUMN and START_ROW are in range by definition.
        let col = CellIndex(START_COLUMN);
        let row = CellIndex(START_ROW);
        self.position(col, row)
    }
}

/// A command the simulation server can issue to the agent.
///
/// The wire protocol today only ever moves the agent; end-of-session is a
/// stream-level signal, not a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentCommand {
    /// Reposition the agent to the given grid cell.
    MoveTo { col: CellIndex, row: CellIndex },
}

/// Connection lifecycle phase.
///
/// Transitions only run forward: `Disconnected → Connected → Ready →
/// Terminated`. There is no error phase; faults are reported but do not
/// move the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionPhase {
    Disconnected,
    Connected,
    Ready,
    Terminated,
}

impl SessionPhase {
    /// Human-readable label for status display.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Disconnected => "disconnected",
            SessionPhase::Connected => "connected",
            SessionPhase::Ready => "ready",
            SessionPhase::Terminated => "terminated",
        }
    }
}
