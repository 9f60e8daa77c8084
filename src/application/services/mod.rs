//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem) but are themselves
//! concrete structs, not traits.

mod chain;

pub use chain::{find_chains, find_paths, get_employee_chain, ChainService};
