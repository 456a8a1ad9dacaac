//! Grid agent (workspace facade crate).
//!
//! This package keeps a single `grid_agent::{core,client,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use grid_agent_client as client;
pub use grid_agent_core as core;
pub use grid_agent_term as term;
pub use grid_agent_types as types;
