//! Dependency resolution
//!
//! Pure functions over an environment snapshot: the closure walk that decides
//! which packages a project needs, and the name normalization that maps those
//! packages onto installed pins.

mod closure;
mod graph;
mod normalize;

pub use closure::{ResolvePolicy, resolve, resolve_with};
pub use graph::{DependencyGraph, InstalledPackages, PackageSet};
pub use normalize::{lookup, pin_needed};

use std::collections::BTreeMap;

/// Resolve the needed packages and pin them against `installed`.
pub fn needed_pins(
    imported: &PackageSet,
    graph: &DependencyGraph,
    installed: &InstalledPackages,
    policy: ResolvePolicy,
) -> BTreeMap<String, String> {
    let needed = resolve_with(imported, graph, policy);
    pin_needed(&needed, installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needed_pins_requests_scenario() {
        let imported: PackageSet = ["requests".to_string()].into_iter().collect();
        let mut graph = DependencyGraph::new();
        graph.add_dependencies("requests", ["urllib3", "certifi"]);
        let installed: InstalledPackages = [
            ("requests", "requests==2.31.0"),
            ("urllib3", "urllib3==2.0.0"),
        ]
        .into_iter()
        .collect();

        let pins = needed_pins(&imported, &graph, &installed, ResolvePolicy::ImportGated);

        assert_eq!(pins.len(), 1);
        assert_eq!(pins["requests"], "requests==2.31.0");
    }

    #[test]
    fn test_needed_pins_transitive_keeps_installed_dependencies() {
        let imported: PackageSet = ["requests".to_string()].into_iter().collect();
        let mut graph = DependencyGraph::new();
        graph.add_dependencies("requests", ["urllib3", "certifi"]);
        let installed: InstalledPackages = [
            ("requests", "requests==2.31.0"),
            ("urllib3", "urllib3==2.0.0"),
        ]
        .into_iter()
        .collect();

        let pins = needed_pins(&imported, &graph, &installed, ResolvePolicy::Transitive);

        assert_eq!(pins.len(), 2);
        assert_eq!(pins["urllib3"], "urllib3==2.0.0");
        assert!(!pins.contains_key("certifi"));
    }
}
