use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use crate::environment::Tools;
use crate::resolve::ResolvePolicy;
use crate::runtime::Runtime;

pub const DEFAULT_NECESSARY_FILE: &str = "necessary_packages.txt";

/// Values supplied on the command line; `None` falls back to the environment
/// and then to the defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub src: PathBuf,
    pub output: Option<PathBuf>,
    pub necessary: Option<PathBuf>,
    pub rm_cuda_postfix: bool,
    pub transitive: bool,
    pub pip: Option<String>,
    pub pipreqs: Option<String>,
    pub pipdeptree: Option<String>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project: PathBuf,
    pub output: PathBuf,
    pub necessary: PathBuf,
    pub strip_cuda_postfix: bool,
    pub policy: ResolvePolicy,
    pub tools: Tools,
}

impl Config {
    pub fn load<R: Runtime>(runtime: &R, overrides: ConfigOverrides) -> Result<Self> {
        let defaults = Tools::default();
        let tools = Tools {
            pip: program(runtime, overrides.pip, "PINREQS_PIP", defaults.pip),
            pipreqs: program(runtime, overrides.pipreqs, "PINREQS_PIPREQS", defaults.pipreqs),
            pipdeptree: program(
                runtime,
                overrides.pipdeptree,
                "PINREQS_PIPDEPTREE",
                defaults.pipdeptree,
            ),
        };

        let output = match overrides.output {
            Some(path) => path,
            None => default_output(&overrides.src)?,
        };

        let config = Self {
            project: overrides.src,
            output,
            necessary: overrides
                .necessary
                .unwrap_or_else(|| PathBuf::from(DEFAULT_NECESSARY_FILE)),
            strip_cuda_postfix: overrides.rm_cuda_postfix,
            policy: if overrides.transitive {
                ResolvePolicy::Transitive
            } else {
                ResolvePolicy::ImportGated
            },
            tools,
        };
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }
}

fn program<R: Runtime>(runtime: &R, cli: Option<String>, key: &str, default: String) -> String {
    cli.or_else(|| runtime.env_var(key).ok().filter(|v| !v.is_empty()))
        .unwrap_or(default)
}

/// `requirements_for_<project dir name>.txt` in the working directory.
pub fn default_output(project: &Path) -> Result<PathBuf> {
    let name = project
        .components()
        .next_back()
        .and_then(|c| match c {
            std::path::Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .with_context(|| {
            format!(
                "Cannot derive an output name from {:?}; pass --output",
                project
            )
        })?;
    Ok(PathBuf::from(format!("requirements_for_{}.txt", name)))
}
