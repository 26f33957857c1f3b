use log::debug;
use std::collections::BTreeMap;

use super::graph::{InstalledPackages, PackageSet};

/// Find the installed pin for `name`.
///
/// Import-side names often use `_` where the distribution uses `-`
/// (`requests_toolbelt` vs `requests-toolbelt`), so the hyphenated spelling is
/// tried when the exact one is not installed.
pub fn lookup<'a>(name: &str, installed: &'a InstalledPackages) -> Option<&'a str> {
    installed
        .get(name)
        .or_else(|| installed.get(&name.replace('_', "-")))
}

/// Pin every needed package to its installed version.
///
/// Names without an installed match are left out.
pub fn pin_needed(needed: &PackageSet, installed: &InstalledPackages) -> BTreeMap<String, String> {
    needed
        .iter()
        .filter_map(|name| match lookup(name, installed) {
            Some(pin) => Some((name.clone(), pin.to_string())),
            None => {
                debug!("Dropping {}: not installed in the environment", name);
                None
            }
        })
        .collect()
}
