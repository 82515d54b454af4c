//! The merge passes that turn the four collaborator outputs into one table.
//!
//! Each pass is a pure function taking the table plus one parsed collaborator
//! response and returning the updated table. Only [`build_table`] creates
//! records; the enrichment passes ignore names that are not already present.

use crate::report::domain::{
    InstalledPackage, LicenseMap, OutdatedEntry, PackageRecord, PackageTable,
};

/// Builds the initial table from the listing source.
///
/// Entries with an empty name are skipped. Insertion order (and therefore
/// report row order) is the order of `installed`.
pub fn build_table(installed: Vec<InstalledPackage>) -> PackageTable {
    let mut table = PackageTable::new();
    for pkg in installed {
        if pkg.name.is_empty() {
            continue;
        }
        table.insert(PackageRecord::new(pkg.name, pkg.version, pkg.description));
    }
    table
}

/// Merges license identifiers into existing records.
///
/// Multiple identifiers are comma-joined. Records without license data keep
/// the "Unknown" default; license entries for packages not in the table are
/// ignored.
pub fn apply_licenses(mut table: PackageTable, licenses: &LicenseMap) -> PackageTable {
    for (name, identifiers) in licenses {
        if identifiers.is_empty() {
            continue;
        }
        if let Some(record) = table.get_mut(name) {
            record.license = identifiers.join(", ");
        }
    }
    table
}

/// Marks records with an available update.
///
/// A record is flagged iff the reported latest version is non-empty and
/// differs from the installed version by string equality. No semver
/// normalization happens: "1.0" and "1.0.0" count as different versions.
/// Entries for unknown package names are ignored.
pub fn apply_outdated(mut table: PackageTable, outdated: &[OutdatedEntry]) -> PackageTable {
    for entry in outdated {
        if let Some(record) = table.get_mut(&entry.name) {
            if !entry.latest.is_empty() && entry.latest != record.version {
                record.latest_version = entry.latest.clone();
                record.has_update = true;
            } else {
                record.latest_version = record.version.clone();
            }
        }
    }
    table
}

/// Flags records named by the advisory source.
///
/// Returns the updated table plus the advisory names that matched no
/// installed package; those are kept for accounting only and never create
/// records.
pub fn apply_advisories(
    mut table: PackageTable,
    advisories: &[String],
) -> (PackageTable, Vec<String>) {
    let mut unlisted = Vec::new();
    for name in advisories {
        match table.get_mut(name) {
            Some(record) => record.has_security_issue = true,
            None => unlisted.push(name.clone()),
        }
    }
    (table, unlisted)
}
