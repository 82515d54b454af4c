/// Default value for fields the data sources did not report.
pub const UNKNOWN: &str = "Unknown";

/// One row of merged package data.
///
/// Records originate exclusively from the listing source; the license,
/// update, and advisory passes only enrich fields of existing records.
/// `has_update` and `has_security_issue` are derived fields, set by the
/// merge passes and never by callers directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Comma-joined license identifiers, or "Unknown".
    pub license: String,
    /// Equals `version` until the update pass finds a newer one.
    pub latest_version: String,
    pub has_update: bool,
    pub has_security_issue: bool,
}

impl PackageRecord {
    /// Creates a record from listing-source data.
    ///
    /// A missing version defaults to "Unknown"; a missing description to the
    /// empty string. `latest_version` starts out equal to the installed
    /// version, so a package never touched by the update pass reports no
    /// update.
    pub fn new(name: String, version: Option<String>, description: Option<String>) -> Self {
        let version = version.unwrap_or_else(|| UNKNOWN.to_string());
        Self {
            name,
            latest_version: version.clone(),
            version,
            description: description.unwrap_or_default(),
            license: UNKNOWN.to_string(),
            has_update: false,
            has_security_issue: false,
        }
    }
}
