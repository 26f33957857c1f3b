//! Environment snapshot
//!
//! The resolver never talks to the Python environment directly. This module
//! runs the packaging tools once (`pip freeze`, `pipreqs`, `pipdeptree`) and
//! captures their answers in an [`EnvironmentSnapshot`] value.

mod deptree;
mod error;
mod freeze;
mod imports;

pub use deptree::{dependency_graph, parse_deptree};
pub use error::CollaboratorError;
pub use freeze::{installed_packages, parse_freeze};
pub use imports::{dirs_without_python, imported_packages, parse_imports};

use anyhow::Result;
use log::{debug, info};
use std::path::Path;

use crate::resolve::{DependencyGraph, InstalledPackages, PackageSet};
use crate::runtime::Runtime;
use error::command_line;

/// Programs used to inspect the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub pip: String,
    pub pipreqs: String,
    pub pipdeptree: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            pip: "pip".to_string(),
            pipreqs: "pipreqs".to_string(),
            pipdeptree: "pipdeptree".to_string(),
        }
    }
}

/// Everything resolution needs to know about the environment, fixed at the
/// start of a run.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSnapshot {
    pub installed: InstalledPackages,
    pub imported: PackageSet,
    pub graph: DependencyGraph,
}

impl EnvironmentSnapshot {
    /// Query the environment and scan `project`.
    #[tracing::instrument(skip(runtime))]
    pub fn capture<R: Runtime>(runtime: &R, tools: &Tools, project: &Path) -> Result<Self> {
        info!("get installed packages from env...");
        let installed = installed_packages(runtime, &tools.pip)?;

        info!("get imported packages on project...");
        let ignore = dirs_without_python(runtime, project)?;
        let imported = imported_packages(runtime, &tools.pipreqs, project, &ignore)?;

        info!("get dependency tree from env...");
        let graph = dependency_graph(runtime, &tools.pipdeptree)?;

        Ok(Self {
            installed,
            imported,
            graph,
        })
    }
}

/// Run a tool to completion and return its stdout.
///
/// A tool that cannot be started or exits unsuccessfully ends the run; there
/// is no retry.
pub(crate) fn run_tool<R: Runtime>(runtime: &R, program: &str, args: &[String]) -> Result<String> {
    let command = command_line(program, args);
    debug!("Running {}", command);

    let output = runtime
        .run(program, args)
        .map_err(|e| CollaboratorError::Spawn {
            command: command.clone(),
            reason: format!("{:#}", e),
        })?;

    if !output.success {
        return Err(CollaboratorError::CommandFailed {
            command,
            code: output.code,
            stderr: output.stderr,
        }
        .into());
    }
    Ok(output.stdout)
}
