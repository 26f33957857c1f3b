//! Detection of the packages a project imports, delegated to `pipreqs`.

use anyhow::Result;
use log::debug;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::run_tool;
use crate::cleanup::TempFile;
use crate::manifest::package_name;
use crate::resolve::PackageSet;
use crate::runtime::Runtime;

/// Parse a `pipreqs` requirements file into the imported package names.
pub fn parse_imports(content: &str) -> PackageSet {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| package_name(line).to_string())
        .collect()
}

/// Base names of directories under `root` that hold no `.py` file.
///
/// `pipreqs` treats a local directory as a first-party module and leaves out
/// any distribution of the same name, so directories without Python sources
/// (data, assets, configs) are ignored. Directories are visited depth-first in
/// name order; when several directories share a base name, the last one
/// visited decides.
#[tracing::instrument(skip(runtime))]
pub fn dirs_without_python<R: Runtime>(runtime: &R, root: &Path) -> Result<Vec<String>> {
    let mut without_python = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = runtime.read_dir(&dir)?;
        let (subdirs, files): (Vec<PathBuf>, Vec<PathBuf>) =
            entries.into_iter().partition(|p| runtime.is_dir(p));

        let name = base_name(&dir);
        if files.iter().any(|f| is_python_source(f)) {
            without_python.remove(&name);
        } else {
            without_python.insert(name);
        }

        stack.extend(subdirs.into_iter().rev());
    }

    debug!("Directories without Python sources: {:?}", without_python);
    Ok(without_python.into_iter().collect())
}

fn base_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_python_source(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().ends_with(".py"))
}

/// Arguments for a `pipreqs` run that saves its findings to `savepath`.
pub(crate) fn pipreqs_args(project: &Path, savepath: &Path, ignore: &[String]) -> Vec<String> {
    let mut args = vec![
        project.to_string_lossy().into_owned(),
        "--force".to_string(),
        "--savepath".to_string(),
        savepath.to_string_lossy().into_owned(),
    ];
    if !ignore.is_empty() {
        args.push("--ignore".to_string());
        args.push(ignore.join(","));
    }
    args
}

/// Run `pipreqs` over `project` and collect the imported package names.
///
/// The intermediate requirements file lives in the temp directory and is
/// removed before returning, on success and on failure.
#[tracing::instrument(skip(runtime, ignore))]
pub fn imported_packages<R: Runtime>(
    runtime: &R,
    pipreqs: &str,
    project: &Path,
    ignore: &[String],
) -> Result<PackageSet> {
    let savepath = runtime
        .temp_dir()
        .join(format!("pinreqs-imports-{}.txt", std::process::id()));
    let temp = TempFile::new(runtime, savepath);

    run_tool(runtime, pipreqs, &pipreqs_args(project, temp.path(), ignore))?;
    let content = runtime.read_to_string(temp.path())?;

    let imported = parse_imports(&content);
    debug!("Project imports {} package(s)", imported.len());
    Ok(imported)
}
