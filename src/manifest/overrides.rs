use anyhow::Result;
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::Path;

use crate::runtime::Runtime;

/// Packages that always go into the manifest, keyed by name.
///
/// Useful when a distribution is imported under another name (`lightning`
/// installed, `pytorch_lightning` imported) or only needed at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: BTreeMap<String, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one entry per line, `name==version` or a bare `name`.
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| (package_name(line), line))
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, pin: impl Into<String>) {
        self.entries.insert(name.into(), pin.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (name, pin) in iter {
            overrides.insert(name, pin);
        }
        overrides
    }
}

/// Name part of a requirement line: everything before the first `==`.
pub fn package_name(line: &str) -> &str {
    line.split_once("==").map_or(line, |(name, _)| name)
}

/// Load the necessary-packages file; a missing file means no overrides.
#[tracing::instrument(skip(runtime))]
pub fn load_overrides<R: Runtime>(runtime: &R, path: &Path) -> Result<Overrides> {
    info!("load necessary packages...");
    if !runtime.is_file(path) {
        debug!("No necessary packages file at {:?}", path);
        return Ok(Overrides::new());
    }

    let content = runtime.read_to_string(path)?;
    let overrides = Overrides::parse(&content);
    debug!("Loaded {} necessary package(s)", overrides.len());
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("lightning==2.2.5"), "lightning");
        assert_eq!(package_name("python-magic"), "python-magic");
        assert_eq!(package_name("a==1==2"), "a");
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let overrides = Overrides::parse("  lightning==2.2.5  \n\ninsightface==0.7.3\r\npython-magic\n");

        let entries: Vec<_> = overrides
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("insightface", "insightface==0.7.3"),
                ("lightning", "lightning==2.2.5"),
                ("python-magic", "python-magic"),
            ]
        );
    }

    #[test]
    fn test_parse_later_line_wins() {
        let overrides = Overrides::parse("cupy-cuda12x==12.2.0\ncupy-cuda12x==12.3.0\n");
        assert_eq!(overrides.len(), 1);
        assert_eq!(
            overrides.iter().next(),
            Some((&"cupy-cuda12x".to_string(), &"cupy-cuda12x==12.3.0".to_string()))
        );
    }

    #[test]
    fn test_load_overrides_missing_file() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/project/necessary_packages.txt");

        runtime
            .expect_is_file()
            .with(eq(path.clone()))
            .returning(|_| false);
        runtime.expect_read_to_string().never();

        let overrides = load_overrides(&runtime, &path).unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_load_overrides_reads_file() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/project/necessary_packages.txt");

        runtime
            .expect_is_file()
            .with(eq(path.clone()))
            .returning(|_| true);
        runtime
            .expect_read_to_string()
            .with(eq(path.clone()))
            .returning(|_| Ok("open-clip-torch==2.24.0\nrequests_toolbelt==1.0.0\n".into()));

        let overrides = load_overrides(&runtime, &path).unwrap();
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn test_load_overrides_read_error_propagates() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/project/necessary_packages.txt");

        runtime.expect_is_file().returning(|_| true);
        runtime
            .expect_read_to_string()
            .returning(|_| Err(anyhow::anyhow!("permission denied")));

        assert!(load_overrides(&runtime, &path).is_err());
    }
}
