//! Dependency closure over the imported packages.

use log::debug;

use super::graph::{DependencyGraph, PackageSet};

/// Which dependency names the closure walk is allowed to enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvePolicy {
    /// Only names that are themselves direct imports are entered, seeds and
    /// dependencies alike. A requirement that the project never imports is not
    /// pinned, and neither is anything reachable only through it.
    #[default]
    ImportGated,
    /// Every requirement reachable from the imports is entered.
    Transitive,
}

impl ResolvePolicy {
    fn admits(self, name: &str, imported: &PackageSet) -> bool {
        match self {
            ResolvePolicy::ImportGated => imported.contains(name),
            ResolvePolicy::Transitive => true,
        }
    }
}

/// Compute the needed packages under [`ResolvePolicy::ImportGated`].
pub fn resolve(imported: &PackageSet, graph: &DependencyGraph) -> PackageSet {
    resolve_with(imported, graph, ResolvePolicy::ImportGated)
}

/// Walk `graph` from every name in `imported` and collect the names admitted
/// by `policy`.
///
/// A name is expanded at most once, so cycles in the graph terminate.
#[tracing::instrument(skip(imported, graph))]
pub fn resolve_with(
    imported: &PackageSet,
    graph: &DependencyGraph,
    policy: ResolvePolicy,
) -> PackageSet {
    let mut needed = PackageSet::new();
    // Stack order mirrors a depth-first walk over imports in name order.
    let mut worklist: Vec<&str> = imported.iter().rev().map(String::as_str).collect();

    while let Some(name) = worklist.pop() {
        if needed.contains(name) {
            continue;
        }
        if !policy.admits(name, imported) {
            debug!("Skipping {}: not imported by the project", name);
            continue;
        }

        needed.insert(name.to_string());
        worklist.extend(graph.dependencies(name).iter().rev().map(String::as_str));
    }

    debug!(
        "Resolved {} needed package(s) from {} import(s)",
        needed.len(),
        imported.len()
    );
    needed
}
