//! Employee chain service
//!
//! Resolves two names to ids, fans out over namesakes and renders the chain
//! for every remaining id pair.

use std::io;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    connect_paths, ensure_uniqueness, find_employee_ids, find_path_to_root, parse_employee_data,
    Chain, DomainResult, IdPair, ManagerMap, Organisation, PathFormatter, RecordParser,
};
use crate::infrastructure::traits::FileSystem;

/// Chain for each id pair, in pair order.
pub fn find_paths(
    pairs: &[IdPair],
    managers: &ManagerMap,
    parallel: bool,
) -> DomainResult<Vec<Chain>> {
    let connect = |(id_1, id_2): &IdPair| -> DomainResult<Chain> {
        let path_1 = find_path_to_root(id_1, managers)?;
        let path_2 = find_path_to_root(id_2, managers)?;
        connect_paths(&path_1, &path_2)
    };

    if parallel {
        pairs.par_iter().map(connect).collect()
    } else {
        pairs.iter().map(connect).collect()
    }
}

/// Rendered chains between every employee called `name_1` and every employee
/// called `name_2`.
///
/// Names that match nobody give an empty list, not an error.
#[instrument(level = "debug", skip(org))]
pub fn find_chains(
    org: &Organisation,
    name_1: &str,
    name_2: &str,
    parallel: bool,
) -> DomainResult<Vec<String>> {
    let ids_1 = find_employee_ids(name_1, &org.people);
    let ids_2 = find_employee_ids(name_2, &org.people);
    let pairs = ensure_uniqueness(&ids_1, &ids_2);
    debug!(
        "{} x {} candidate ids, {} unique pairs",
        ids_1.len(),
        ids_2.len(),
        pairs.len()
    );

    let chains = find_paths(&pairs, &org.managers, parallel)?;
    let formatter = PathFormatter::new(&org.people);
    chains
        .iter()
        .map(|chain| {
            debug!("chain {:?} spans {} hops", chain, chain.hops());
            formatter.format(chain)
        })
        .collect()
}

/// Query over raw record lines (header already removed).
pub fn get_employee_chain<I, S>(lines: I, name_1: &str, name_2: &str) -> DomainResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let org = parse_employee_data(lines)?;
    find_chains(&org, name_1, name_2, false)
}

/// Service for answering chain queries against record files.
pub struct ChainService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl ChainService {
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Read and parse a record file, skipping the configured header lines.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Organisation> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("file not found: {}", path.display()),
                source: Box::new(io::Error::new(
                    io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read employee records", path)?;

        let header_lines = self.settings.header_lines;
        let parser = RecordParser::new()
            .with_delimiter(self.settings.delimiter)
            .with_line_offset(header_lines);
        let org = parser.parse(content.lines().skip(header_lines))?;
        debug!("loaded {} employees from {}", org.people.len(), path.display());
        Ok(org)
    }

    /// Rendered chains between two names within already loaded records.
    pub fn chains(
        &self,
        org: &Organisation,
        name_1: &str,
        name_2: &str,
    ) -> ApplicationResult<Vec<String>> {
        Ok(find_chains(org, name_1, name_2, self.settings.parallel)?)
    }

    /// Load `path` and answer a single query.
    pub fn chains_from_file(
        &self,
        path: &Path,
        name_1: &str,
        name_2: &str,
    ) -> ApplicationResult<Vec<String>> {
        let org = self.load(path)?;
        self.chains(&org, name_1, name_2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDS: [&str; 9] = [
        "| 1  | Dangermouse     |   |",
        "| 2  | Gonzo the Great | 1 |",
        "| 3  | Invisible Woman | 1 |",
        "| 6  | Black Widow     | 2 |",
        "| 12 | Hit Girl        | 3 |",
        "| 15 | Super Ted       | 3 |",
        "| 16 | Batman          | 6 |",
        "| 17 | Catwoman        | 6 |",
        "| 18 | Catwoman        | 1 |",
    ];

    #[test]
    fn test_get_employee_chain_through_root() {
        let result = get_employee_chain(RECORDS, "Batman", "Super Ted").unwrap();
        assert_eq!(
            result,
            ["Batman (16) -> Black Widow (6) -> Gonzo the Great (2) -> Dangermouse (1) <- Invisible Woman (3) <- Super Ted (15)"]
        );
    }

    #[test]
    fn test_get_employee_chain_namesakes() {
        let result = get_employee_chain(RECORDS, "Catwoman", "Catwoman").unwrap();
        assert_eq!(
            result,
            ["Catwoman (17) -> Black Widow (6) -> Gonzo the Great (2) -> Dangermouse (1) <- Catwoman (18)"]
        );
    }

    #[test]
    fn test_get_employee_chain_unknown_name() {
        assert!(get_employee_chain(RECORDS, "Batman", "Penfold").unwrap().is_empty());
    }

    #[test]
    fn test_find_paths_parallel_matches_sequential() {
        let org = parse_employee_data(RECORDS).unwrap();
        let ids: Vec<String> = org.people.iter().map(|p| p.id.clone()).collect();
        let pairs = ensure_uniqueness(&ids, &ids);

        let sequential = find_paths(&pairs, &org.managers, false).unwrap();
        let parallel = find_paths(&pairs, &org.managers, true).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 36);
    }

    #[test]
    fn test_find_paths_propagates_unknown_id() {
        let org = parse_employee_data(RECORDS).unwrap();
        let pairs = vec![("16".to_string(), "99".to_string())];
        assert!(find_paths(&pairs, &org.managers, true).is_err());
    }
}
