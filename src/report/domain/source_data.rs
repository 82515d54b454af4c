use std::collections::HashMap;

/// One entry from the listing source ("list installed packages").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// One entry from the update source ("list outdated packages").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedEntry {
    pub name: String,
    pub latest: String,
}

/// License identifiers keyed by package name, as reported by the license
/// source. A package may report one or many identifiers.
pub type LicenseMap = HashMap<String, Vec<String>>;
