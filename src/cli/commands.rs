//! Command execution

use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{expand_path, Settings};
use crate::domain::{OrgForest, Organisation};
use crate::infrastructure::ServiceContainer;

/// Run one chain query as described by the parsed command line.
#[instrument(level = "debug", skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let file = cli
        .file
        .as_deref()
        .ok_or_else(|| CliError::Usage("missing employee record file".to_string()))?;
    let [name_1, name_2] = cli.names.as_slice() else {
        return Err(CliError::InvalidArgs(format!(
            "expected 2 employee names, got {}",
            cli.names.len()
        )));
    };

    let config_file = cli.config.as_deref().map(expand_path).transpose()?;
    let settings = Settings::load(config_file.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    let org = container.chain_service.load(file)?;
    if cli.tree {
        print_tree(&org)?;
    }

    let chains = container.chain_service.chains(&org, name_1, name_2)?;
    if chains.is_empty() {
        output::warning(&format!("no chain found between {:?} and {:?}", name_1, name_2));
    }
    for chain in &chains {
        output::info(chain);
    }
    Ok(())
}

fn print_tree(org: &Organisation) -> CliResult<()> {
    let forest = OrgForest::from_organisation(org).map_err(ApplicationError::from)?;
    output::header(&format!(
        "{} employees, {} levels",
        forest.len(),
        forest.depth()
    ));
    for tree in forest.to_termtree() {
        output::info(&tree);
    }
    Ok(())
}
