//! Record parser for `| <id> | <name> | <manager_id> |` lines.

use tracing::{debug, instrument};

use crate::domain::entities::{ManagerMap, Organisation, Person};
use crate::domain::error::{DomainError, DomainResult};

/// Field delimiter used by the record format.
pub const DEFAULT_DELIMITER: char = '|';

/// id, name, manager id
const FIELD_COUNT: usize = 3;

/// Turns raw record lines into people and their manager mapping.
#[derive(Debug, Clone)]
pub struct RecordParser {
    delimiter: char,
    /// Added to the 1-based line index when reporting errors
    line_offset: usize,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            line_offset: 0,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Report line numbers as if `offset` lines (e.g. a header) preceded the input.
    pub fn with_line_offset(mut self, offset: usize) -> Self {
        self.line_offset = offset;
        self
    }

    /// Parse every line into a [`Person`], failing on the first malformed one.
    ///
    /// Each line is split on the delimiter; the text before the first delimiter
    /// is ignored and the next three fields are id, name and manager id, all
    /// trimmed. An empty manager field marks a root.
    #[instrument(level = "debug", skip_all)]
    pub fn parse<I, S>(&self, lines: I) -> DomainResult<Organisation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut people = Vec::new();
        let mut managers = ManagerMap::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let person = self.parse_line(line.as_ref()).map_err(|message| {
                DomainError::MalformedRecord {
                    line: self.line_offset + idx + 1,
                    message,
                }
            })?;

            if managers
                .insert(person.id.clone(), person.manager_id.clone())
                .is_some()
            {
                return Err(DomainError::DuplicateIdentifier(person.id));
            }
            people.push(person);
        }

        debug!("parsed {} employee records", people.len());
        Ok(Organisation { people, managers })
    }

    fn parse_line(&self, line: &str) -> Result<Person, String> {
        let fields: Vec<&str> = line
            .splitn(FIELD_COUNT + 2, self.delimiter)
            .skip(1)
            .take(FIELD_COUNT)
            .map(str::trim)
            .collect();

        let &[id, name, manager_id] = fields.as_slice() else {
            return Err(format!(
                "expected {} '{}'-delimited fields, found {}",
                FIELD_COUNT,
                self.delimiter,
                fields.len()
            ));
        };
        if id.is_empty() {
            return Err("employee id is empty".to_string());
        }

        let manager_id = (!manager_id.is_empty()).then_some(manager_id);
        Ok(Person::new(id, name, manager_id))
    }
}

/// Parse record lines with the default delimiter.
pub fn parse_employee_data<I, S>(lines: I) -> DomainResult<Organisation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RecordParser::new().parse(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_employee_data() {
        let org = parse_employee_data(["| 16      | Batman  |      6|"]).unwrap();
        let employee = &org.people[0];

        assert_eq!("16", employee.id);
        assert_eq!("Batman", employee.name);
        assert_eq!(Some("6"), employee.manager_id.as_deref());
        assert_eq!(employee.manager_id, org.managers["16"]);
    }

    #[rstest]
    #[case("| 1 | Dangermouse |  |")]
    #[case("| 1 | Dangermouse |")]
    #[case("|1|Dangermouse|   \t |")]
    fn test_blank_manager_is_root(#[case] line: &str) {
        let org = parse_employee_data([line]).unwrap();
        assert_eq!(org.people[0].manager_id, None);
        assert_eq!(org.managers["1"], None);
    }

    #[test]
    fn test_keeps_internal_name_whitespace() {
        let org = parse_employee_data(["|  2 |  Gonzo the   Great | 1 |"]).unwrap();
        assert_eq!(org.people[0].name, "Gonzo the   Great");
    }

    #[test]
    fn test_keeps_declaration_order() {
        let org = parse_employee_data(["| 3 | C | 1 |", "| 1 | A | |", "| 2 | B | 1 |"]).unwrap();
        let ids: Vec<_> = org.people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[rstest]
    #[case("| 16 | Batman")]
    #[case("16, Batman, 6")]
    #[case("")]
    #[case("| | Nobody | 1 |")]
    fn test_malformed_line(#[case] line: &str) {
        let err = parse_employee_data(["| 1 | Dangermouse | |", line]).unwrap_err();
        assert!(
            matches!(err, DomainError::MalformedRecord { line: 2, .. }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_line_offset_is_reported() {
        let err = RecordParser::new()
            .with_line_offset(1)
            .parse(["| 16 | Batman"])
            .unwrap_err();
        assert!(matches!(err, DomainError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_custom_delimiter() {
        let org = RecordParser::new()
            .with_delimiter(';')
            .parse(["; 6 ; Black Widow ; 2 ;"])
            .unwrap();
        assert_eq!(org.people[0], Person::new("6", "Black Widow", Some("2")));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let err = parse_employee_data(["| 17 | Catwoman | 6 |", "| 17 | Catwoman | 1 |"]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateIdentifier("17".to_string()));
    }
}
