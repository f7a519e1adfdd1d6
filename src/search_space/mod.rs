//! Search-space definition for MnasNet-style mobile networks
//!
//! Provides the configuration layer consumed by an external search engine:
//! - One-of choice primitives for tunable fields
//! - Validated per-block specification records
//! - Search-space construction around a reference architecture

mod block;
mod choice;
mod mnasnet;

pub use block::{build_block_specs, BlockFn, BlockSpec, BlockSpecParams};
pub use choice::Choice;
pub use mnasnet::{build_search_space, search_space, ReferenceArchitecture, TunableBlockSpec};
