use anyhow::Result;
use log::debug;
use serde::Deserialize;

use super::error::{CollaboratorError, command_line};
use super::run_tool;
use crate::resolve::DependencyGraph;
use crate::runtime::Runtime;

/// One package entry of `pipdeptree --json`.
#[derive(Debug, Deserialize)]
pub struct TreeRecord {
    pub package: TreePackage,
    #[serde(default)]
    pub dependencies: Vec<TreeDependency>,
}

#[derive(Debug, Deserialize)]
pub struct TreePackage {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct TreeDependency {
    pub package_name: String,
}

/// Build the dependency graph from `pipdeptree --json` output.
pub fn parse_deptree(json: &str) -> serde_json::Result<DependencyGraph> {
    let records: Vec<TreeRecord> = serde_json::from_str(json)?;
    let mut graph = DependencyGraph::new();
    for record in records {
        graph.add_dependencies(
            record.package.key,
            record.dependencies.into_iter().map(|d| d.package_name),
        );
    }
    Ok(graph)
}

/// Read the dependency graph of the active environment.
#[tracing::instrument(skip(runtime))]
pub fn dependency_graph<R: Runtime>(runtime: &R, pipdeptree: &str) -> Result<DependencyGraph> {
    let args = vec!["--json".to_string()];
    let stdout = run_tool(runtime, pipdeptree, &args)?;
    let graph = parse_deptree(&stdout).map_err(|e| CollaboratorError::InvalidOutput {
        command: command_line(pipdeptree, &args),
        reason: e.to_string(),
    })?;
    debug!("Dependency graph has {} package(s)", graph.len());
    Ok(graph)
}
