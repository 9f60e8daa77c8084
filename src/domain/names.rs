//! Name lookup with case- and whitespace-insensitive comparison.

use itertools::Itertools;
use tracing::trace;

use crate::domain::entities::{EmployeeId, Person};

/// Standardise a free-form name for comparison.
///
/// Lowercases, splits on whitespace and rejoins with single spaces, so
/// `"  gonzo   ThE    GREAt  "` and `"Gonzo the GREAT"` both become
/// `"gonzo the great"`.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().split_whitespace().join(" ")
}

/// Ids of every person whose normalised name matches `name`, in record order.
///
/// No match is not an error: the result is simply empty.
pub fn find_employee_ids(name: &str, people: &[Person]) -> Vec<EmployeeId> {
    let wanted = normalize_name(name);
    let ids: Vec<EmployeeId> = people
        .iter()
        .filter(|person| normalize_name(&person.name) == wanted)
        .map(|person| person.id.clone())
        .collect();
    trace!("name {:?} matched ids {:?}", wanted, ids);
    ids
}
