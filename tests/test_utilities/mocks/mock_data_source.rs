use composer_report::prelude::*;

/// Mock PackageDataSource serving fixture data, with per-step failure
/// switches to exercise the degradation paths.
#[derive(Default)]
pub struct MockPackageDataSource {
    installed: Vec<InstalledPackage>,
    licenses: LicenseMap,
    outdated: Vec<OutdatedEntry>,
    advisories: Vec<String>,
    fail_listing: bool,
    fail_licenses: bool,
    fail_outdated: bool,
    fail_advisories: bool,
}

impl MockPackageDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(mut self, name: &str, version: &str, description: &str) -> Self {
        self.installed.push(InstalledPackage {
            name: name.to_string(),
            version: Some(version.to_string()),
            description: Some(description.to_string()),
        });
        self
    }

    pub fn with_license(mut self, name: &str, identifiers: &[&str]) -> Self {
        self.licenses.insert(
            name.to_string(),
            identifiers.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn with_outdated(mut self, name: &str, latest: &str) -> Self {
        self.outdated.push(OutdatedEntry {
            name: name.to_string(),
            latest: latest.to_string(),
        });
        self
    }

    pub fn with_advisory(mut self, name: &str) -> Self {
        self.advisories.push(name.to_string());
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn failing_licenses(mut self) -> Self {
        self.fail_licenses = true;
        self
    }

    pub fn failing_outdated(mut self) -> Self {
        self.fail_outdated = true;
        self
    }

    pub fn failing_advisories(mut self) -> Self {
        self.fail_advisories = true;
        self
    }
}

impl PackageDataSource for MockPackageDataSource {
    fn list_installed(&self) -> Result<Vec<InstalledPackage>> {
        if self.fail_listing {
            anyhow::bail!("Mock listing failure");
        }
        Ok(self.installed.clone())
    }

    fn list_licenses(&self) -> Result<LicenseMap> {
        if self.fail_licenses {
            anyhow::bail!("Mock license failure");
        }
        Ok(self.licenses.clone())
    }

    fn list_outdated(&self) -> Result<Vec<OutdatedEntry>> {
        if self.fail_outdated {
            anyhow::bail!("Mock outdated failure");
        }
        Ok(self.outdated.clone())
    }

    fn list_advisories(&self) -> Result<Vec<String>> {
        if self.fail_advisories {
            anyhow::bail!("Mock advisory failure");
        }
        Ok(self.advisories.clone())
    }
}
