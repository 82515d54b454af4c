use crate::report::domain::{InstalledPackage, LicenseMap, OutdatedEntry};
use crate::shared::Result;

/// PackageDataSource port for the package manager's structured outputs
///
/// This port abstracts the external collaborator (normally the Composer
/// binary invoked as a subprocess) behind the four queries the report
/// needs, so tests can supply fixture data without spawning processes.
///
/// Each method returns already-parsed data. Errors mean the collaborator
/// could not be invoked or its output could not be parsed; the caller
/// decides whether to degrade to an empty result set or abort.
pub trait PackageDataSource {
    /// Lists installed packages with base metadata.
    ///
    /// # Errors
    /// Returns an error if the collaborator cannot be invoked or its output
    /// is not the expected structure.
    fn list_installed(&self) -> Result<Vec<InstalledPackage>>;

    /// Lists license identifiers keyed by package name.
    fn list_licenses(&self) -> Result<LicenseMap>;

    /// Lists packages for which a newer version exists.
    fn list_outdated(&self) -> Result<Vec<OutdatedEntry>>;

    /// Lists names of packages with known security advisories.
    fn list_advisories(&self) -> Result<Vec<String>>;
}
