use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A set of package names, iterated in name order.
pub type PackageSet = BTreeSet<String>;

/// Installed packages of the environment, keyed by name.
///
/// Each value is the full pin as the environment reports it, e.g.
/// `torch==2.1.0+cu121`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledPackages {
    pins: BTreeMap<String, String>,
}

impl InstalledPackages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, pin: impl Into<String>) {
        self.pins.insert(name.into(), pin.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pins.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InstalledPackages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut installed = Self::new();
        for (name, pin) in iter {
            installed.insert(name, pin);
        }
        installed
    }
}

/// Adjacency list of declared requirements between installed packages.
///
/// Names in the lists need not be installed themselves (optional extras).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `dependencies` to the requirement list of `package`.
    pub fn add_dependencies<I, S>(&mut self, package: impl Into<String>, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edges
            .entry(package.into())
            .or_default()
            .extend(dependencies.into_iter().map(Into::into));
    }

    /// Direct requirements of `package`; empty when the graph has no entry for it.
    pub fn dependencies(&self, package: &str) -> &[String] {
        self.edges.get(package).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
