use anyhow::Result;
use log::info;
use std::collections::BTreeMap;
use std::path::Path;

use super::overrides::Overrides;
use super::postfix;
use crate::runtime::Runtime;

/// Final requirements, package name to pin, rendered in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Merge resolved pins with the necessary packages; on a name collision the
    /// override pin replaces the resolved one.
    pub fn merge(needed: BTreeMap<String, String>, overrides: &Overrides) -> Self {
        let mut entries = needed;
        for (name, pin) in overrides.iter() {
            entries.insert(name.clone(), pin.clone());
        }
        Self { entries }
    }

    /// Drop CUDA build tags from every pin.
    pub fn strip_cuda_postfix(self) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(name, pin)| {
                    let stripped = postfix::strip(&pin).to_string();
                    (name, stripped)
                })
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One pin per line, each terminated by a newline.
    pub fn render(&self) -> String {
        self.entries.values().fold(String::new(), |mut out, pin| {
            out.push_str(pin);
            out.push('\n');
            out
        })
    }

    /// Write the rendered manifest to `path`, replacing any existing file.
    #[tracing::instrument(skip(self, runtime))]
    pub fn write<R: Runtime>(&self, runtime: &R, path: &Path) -> Result<()> {
        info!("write {}...", path.display());
        runtime.write(path, self.render().as_bytes())
    }
}

/// Merge, optionally clean, and persist the manifest in one step.
pub fn write_manifest<R: Runtime>(
    runtime: &R,
    path: &Path,
    needed: BTreeMap<String, String>,
    overrides: &Overrides,
    strip_postfix: bool,
) -> Result<Manifest> {
    let mut manifest = Manifest::merge(needed, overrides);
    if strip_postfix {
        manifest = manifest.strip_cuda_postfix();
    }
    manifest.write(runtime, path)?;
    Ok(manifest)
}
