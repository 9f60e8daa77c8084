//! Rendering of chains as `Name (id) -> ... <- Name (id)` strings.

use std::collections::HashMap;

use crate::domain::entities::{Chain, Person};
use crate::domain::error::{DomainError, DomainResult};

/// Mapping from employee id to the name as written in the records.
pub fn get_employee_names(people: &[Person]) -> HashMap<&str, &str> {
    people
        .iter()
        .map(|person| (person.id.as_str(), person.name.as_str()))
        .collect()
}

/// Renders chains against one fixed set of people.
#[derive(Debug)]
pub struct PathFormatter<'a> {
    names: HashMap<&'a str, &'a str>,
}

impl<'a> PathFormatter<'a> {
    pub fn new(people: &'a [Person]) -> Self {
        Self {
            names: get_employee_names(people),
        }
    }

    /// `Batman (16) -> Black Widow (6) -> Gonzo the Great (2) -> Dangermouse (1) <- Invisible Woman (3) <- Super Ted (15)`
    pub fn format(&self, chain: &Chain) -> DomainResult<String> {
        let mut out = String::new();

        for id in &chain.left {
            self.push_label(&mut out, id)?;
            out.push_str(" -> ");
        }
        self.push_label(&mut out, &chain.ancestor)?;
        for id in &chain.right {
            out.push_str(" <- ");
            self.push_label(&mut out, id)?;
        }

        Ok(out)
    }

    fn push_label(&self, out: &mut String, id: &str) -> DomainResult<()> {
        let name = self
            .names
            .get(id)
            .ok_or_else(|| DomainError::UnknownIdentifier(id.to_string()))?;
        out.push_str(&format!("{} ({})", name, id));
        Ok(())
    }
}

/// Render a single chain; prefer [`PathFormatter`] when rendering many.
pub fn format_path(chain: &Chain, people: &[Person]) -> DomainResult<String> {
    PathFormatter::new(people).format(chain)
}
