//! Root-path construction and lowest-common-manager search.

use std::collections::HashSet;

use tracing::{instrument, trace};

use crate::domain::entities::{Chain, EmployeeId, ManagerMap};
use crate::domain::error::{DomainError, DomainResult};

/// Ids from `employee_id` up to and including the root of its hierarchy.
///
/// Fails with [`DomainError::UnknownIdentifier`] if the walk reaches an id
/// missing from `managers`, and with [`DomainError::CycleDetected`] if an id
/// repeats.
#[instrument(level = "trace", skip(managers))]
pub fn find_path_to_root(employee_id: &str, managers: &ManagerMap) -> DomainResult<Vec<EmployeeId>> {
    let mut path = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = Some(employee_id);

    while let Some(id) = current {
        let (id, manager_id) = managers
            .get_key_value(id)
            .ok_or_else(|| DomainError::UnknownIdentifier(id.to_string()))?;
        if !visited.insert(id.as_str()) {
            return Err(DomainError::CycleDetected(id.clone()));
        }
        path.push(id.clone());
        current = manager_id.as_deref();
    }

    trace!("path to root: {:?}", path);
    Ok(path)
}

/// Join two root-paths at their lowest common manager.
///
/// Both paths are compared from the root end downwards: they agree down to the
/// shared manager and differ from the first depth below it, or one runs out
/// because it belongs to a manager of the other employee.
///
/// `[6, 4, 2, 1]` and `[7, 5, 3, 2, 1]` give `[6, 4]`, `2`, `[3, 5, 7]`.
pub fn connect_paths(path_1: &[EmployeeId], path_2: &[EmployeeId]) -> DomainResult<Chain> {
    let shared_depth = path_1
        .iter()
        .rev()
        .zip(path_2.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    if shared_depth == 0 {
        return Err(DomainError::NoCommonAncestor {
            left: path_1.first().cloned().unwrap_or_default(),
            right: path_2.first().cloned().unwrap_or_default(),
        });
    }

    let split_1 = path_1.len() - shared_depth;
    let split_2 = path_2.len() - shared_depth;

    Ok(Chain {
        left: path_1[..split_1].to_vec(),
        ancestor: path_1[split_1].clone(),
        right: path_2[..split_2].iter().rev().cloned().collect(),
    })
}
