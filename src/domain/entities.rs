//! Domain entities: core data structures

use std::collections::HashMap;
use std::fmt;

/// Employee identifier, kept exactly as it appears in the record file.
pub type EmployeeId = String;

/// Maps every known employee id to the id of its manager, `None` for a root.
pub type ManagerMap = HashMap<EmployeeId, Option<EmployeeId>>;

/// Unordered pair of distinct employee ids, stored in the orientation first seen.
pub type IdPair = (EmployeeId, EmployeeId);

/// A single employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: EmployeeId,
    /// Display name as written in the record file, not necessarily unique
    pub name: String,
    /// Manager id, None for the root of a hierarchy
    pub manager_id: Option<EmployeeId>,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>, manager_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            manager_id: manager_id.map(str::to_string),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// All records of one organisation plus the manager mapping derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organisation {
    /// Records in declaration order
    pub people: Vec<Person>,
    pub managers: ManagerMap,
}

/// Two root-paths joined at their lowest common manager.
///
/// Reading `left`, then `ancestor`, then `right` walks from employee 1 up to
/// the shared manager and back down to employee 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// Employee 1 up to, but excluding, the ancestor
    pub left: Vec<EmployeeId>,
    /// Lowest common manager
    pub ancestor: EmployeeId,
    /// Just below the ancestor down to employee 2
    pub right: Vec<EmployeeId>,
}

impl Chain {
    pub fn new(left: Vec<EmployeeId>, ancestor: impl Into<String>, right: Vec<EmployeeId>) -> Self {
        Self {
            left,
            ancestor: ancestor.into(),
            right,
        }
    }

    /// Number of reporting links between the two employees.
    pub fn hops(&self) -> usize {
        self.left.len() + self.right.len()
    }
}
