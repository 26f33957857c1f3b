use anyhow::Result;
use log::debug;

use super::run_tool;
use crate::manifest::package_name;
use crate::resolve::InstalledPackages;
use crate::runtime::Runtime;

/// Parse `pip freeze` output into installed pins keyed by name.
///
/// Lines without `==` (editable or direct-URL installs) are kept whole, keyed
/// by the entire line.
pub fn parse_freeze(output: &str) -> InstalledPackages {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| (package_name(line), line))
        .collect()
}

/// Read the installed packages of the active environment.
#[tracing::instrument(skip(runtime))]
pub fn installed_packages<R: Runtime>(runtime: &R, pip: &str) -> Result<InstalledPackages> {
    let stdout = run_tool(runtime, pip, &["freeze".to_string()])?;
    let installed = parse_freeze(&stdout);
    debug!("Found {} installed package(s)", installed.len());
    Ok(installed)
}
