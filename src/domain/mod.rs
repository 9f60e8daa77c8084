//! Domain layer: entities and hierarchy algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod entities;
pub mod error;
pub mod format;
pub mod names;
pub mod pairs;
pub mod parser;
pub mod paths;

pub use arena::{OrgForest, OrgNode};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use format::{format_path, get_employee_names, PathFormatter};
pub use names::{find_employee_ids, normalize_name};
pub use pairs::ensure_uniqueness;
pub use parser::{parse_employee_data, RecordParser, DEFAULT_DELIMITER};
pub use paths::{connect_paths, find_path_to_root};
