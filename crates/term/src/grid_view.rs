//! GridView: renders the agent on its grid as lines of text.
//!
//! The view is a pure function of the agent: a status line, then one row
//! of cells per grid row. It recovers the agent's cell from its world
//! position by nearest-offset lookup, since the position is the only state
//! the agent keeps.

use grid_agent_core::Agent;
use grid_agent_types::{CellIndex, GridTable, Position, GRID_CELLS};

const EMPTY_CELL: char = '.';
const AGENT_CELL: char = '@';

#[derive(Debug, Default)]
pub struct GridView;

impl GridView {
    /// Render one frame.
    pub fn render(&self, agent: &Agent) -> Vec<String> {
        let pos = agent.position();
        let (col, row) = nearest_cell(agent.table(), pos);

        let mut lines = Vec::with_capacity(GRID_CELLS + 2);
        lines.push(format!(
            "grid-agent  [{}]  cell ({}, {})  pos ({:.3}, {:.3}, {:.3})",
            agent.phase().as_str(),
            col.get(),
            row.get(),
            pos.x,
            pos.y,
            pos.z,
        ));
        lines.push(String::new());

        for r in 0..GRID_CELLS {
            let mut line = String::with_capacity(GRID_CELLS * 2);
            for c in 0..GRID_CELLS {
                let ch = if c == col.index() && r == row.index() {
                    AGENT_CELL
                } else {
                    EMPTY_CELL
                };
                line.push(ch);
                if c + 1 < GRID_CELLS {
                    line.push(' ');
                }
            }
            lines.push(line);
        }

        lines
    }
}

/// Map a world position back to the closest grid cell.
///
/// Positions are only ever written from the table, so on the happy path
/// this is an exact inverse; nearest-match keeps it total anyway.
fn nearest_cell(table: &GridTable, pos: Position) -> (CellIndex, CellIndex) {
    (nearest_index(table, pos.x), nearest_index(table, -pos.z))
}

fn nearest_index(table: &GridTable, value: f32) -> CellIndex {
    let mut best = CellIndex::ZERO;
    let mut best_dist = f32::INFINITY;
    for i in 0..GRID_CELLS as i64 {
        let Some(idx) = CellIndex::new(i) else {
            continue;
        };
        let dist = (table.offset(idx) - value).abs();
        if dist < best_dist {
            best = idx;
            best_dist = dist;
        }
    }
    best
}
