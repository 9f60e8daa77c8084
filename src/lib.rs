//! Reporting-chain search over an organisation hierarchy.
//!
//! Records are `| <id> | <name> | <manager_id> |` lines. Two names are
//! resolved to employee ids and, for every id pair, the chain up to their
//! lowest common manager and back down is rendered as
//! `Batman (16) -> Black Widow (6) <- Catwoman (17)`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::services::get_employee_chain;
