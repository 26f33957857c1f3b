use anyhow::Result;
use log::{debug, info};

use crate::{
    environment::EnvironmentSnapshot,
    manifest::{Manifest, load_overrides, write_manifest},
    resolve::needed_pins,
    runtime::Runtime,
};

pub mod config;

use config::{Config, ConfigOverrides};

/// Build the requirements file for a project.
#[tracing::instrument(skip(runtime, overrides))]
pub fn make<R: Runtime>(runtime: R, overrides: ConfigOverrides) -> Result<()> {
    let config = Config::load(&runtime, overrides)?;
    let manifest = run(&runtime, &config)?;
    println!(
        "Filtered requirements written to {} ({} package(s))",
        config.output.display(),
        manifest.len()
    );
    Ok(())
}

/// Load overrides, snapshot the environment, resolve, and write the manifest.
#[tracing::instrument(skip(runtime, config))]
pub fn run<R: Runtime>(runtime: &R, config: &Config) -> Result<Manifest> {
    if !runtime.is_dir(&config.project) {
        anyhow::bail!(
            "Project directory {} does not exist.",
            config.project.display()
        );
    }

    let overrides = load_overrides(runtime, &config.necessary)?;
    let snapshot = EnvironmentSnapshot::capture(runtime, &config.tools, &config.project)?;

    info!("filter needed packages...");
    let needed = needed_pins(
        &snapshot.imported,
        &snapshot.graph,
        &snapshot.installed,
        config.policy,
    );
    debug!(
        "{} of {} imported package(s) pinned",
        needed.len(),
        snapshot.imported.len()
    );

    write_manifest(
        runtime,
        &config.output,
        needed,
        &overrides,
        config.strip_cuda_postfix,
    )
}
