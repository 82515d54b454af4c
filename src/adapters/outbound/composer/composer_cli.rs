use crate::ports::outbound::PackageDataSource;
use crate::report::domain::{InstalledPackage, LicenseMap, OutdatedEntry};
use crate::shared::error::ReportError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Command;

/// ComposerCli adapter implementing the PackageDataSource port
///
/// Invokes the Composer binary once per query and parses its JSON output:
/// `show`, `licenses`, `outdated`, and `audit`, all with `--format=json`.
///
/// Composer exits non-zero when `outdated` or `audit` find anything, so the
/// adapter parses captured stdout regardless of the exit status. A query
/// fails only when the process cannot be spawned or stdout is not the
/// expected JSON shape.
pub struct ComposerCli {
    program: PathBuf,
    working_dir: PathBuf,
}

impl ComposerCli {
    /// Creates an adapter invoking `program` inside `working_dir`.
    pub fn new(program: PathBuf, working_dir: PathBuf) -> Self {
        Self {
            program,
            working_dir,
        }
    }

    /// Runs one Composer subcommand and returns its captured stdout.
    fn run(&self, args: &[&str]) -> Result<String> {
        let command_line = format!("{} {}", self.program.display(), args.join(" "));
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| ReportError::CommandFailed {
                command: command_line.clone(),
                details: e.to_string(),
            })?;

        // Exit status is deliberately ignored; stdout carries the JSON
        // payload even when composer signals findings via the exit code.
        String::from_utf8(output.stdout).map_err(|e| {
            ReportError::MalformedOutput {
                command: command_line,
                details: format!("stdout is not valid UTF-8: {}", e),
            }
            .into()
        })
    }

    fn parse<'a, T: Deserialize<'a>>(command: &str, raw: &'a str) -> Result<T> {
        serde_json::from_str(raw).map_err(|e| {
            ReportError::MalformedOutput {
                command: command.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    pub(crate) fn parse_show(raw: &str) -> Result<Vec<InstalledPackage>> {
        let parsed: ShowOutput = Self::parse("composer show --format=json", raw)?;
        Ok(parsed
            .installed
            .into_iter()
            .map(|pkg| InstalledPackage {
                name: pkg.name,
                version: pkg.version,
                description: pkg.description,
            })
            .collect())
    }

    pub(crate) fn parse_licenses(raw: &str) -> Result<LicenseMap> {
        let parsed: LicensesOutput = Self::parse("composer licenses --format=json", raw)?;
        Ok(parsed
            .dependencies
            .into_iter()
            .filter_map(|(name, entry)| {
                let identifiers = match entry.license? {
                    LicenseField::One(identifier) => vec![identifier],
                    LicenseField::Many(identifiers) => identifiers,
                };
                Some((name, identifiers))
            })
            .collect())
    }

    pub(crate) fn parse_outdated(raw: &str) -> Result<Vec<OutdatedEntry>> {
        let parsed: OutdatedOutput = Self::parse("composer outdated --format=json", raw)?;
        Ok(parsed
            .installed
            .into_iter()
            .map(|pkg| OutdatedEntry {
                name: pkg.name,
                latest: pkg.latest,
            })
            .collect())
    }

    pub(crate) fn parse_audit(raw: &str) -> Result<Vec<String>> {
        let parsed: AuditOutput = Self::parse("composer audit --format=json", raw)?;
        Ok(match parsed.advisories {
            AdvisoryCollection::ByPackage(by_package) => by_package.into_keys().collect(),
            AdvisoryCollection::Empty(_) => Vec::new(),
        })
    }
}

impl PackageDataSource for ComposerCli {
    fn list_installed(&self) -> Result<Vec<InstalledPackage>> {
        let raw = self.run(&["show", "--format=json"])?;
        Self::parse_show(&raw)
    }

    fn list_licenses(&self) -> Result<LicenseMap> {
        let raw = self.run(&["licenses", "--format=json"])?;
        Self::parse_licenses(&raw)
    }

    fn list_outdated(&self) -> Result<Vec<OutdatedEntry>> {
        let raw = self.run(&["outdated", "--format=json"])?;
        Self::parse_outdated(&raw)
    }

    fn list_advisories(&self) -> Result<Vec<String>> {
        let raw = self.run(&["audit", "--format=json"])?;
        Self::parse_audit(&raw)
    }
}

/// Response shape of `composer show --format=json`
#[derive(Debug, Deserialize)]
struct ShowOutput {
    #[serde(default)]
    installed: Vec<ShowPackage>,
}

#[derive(Debug, Deserialize)]
struct ShowPackage {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Response shape of `composer licenses --format=json`
#[derive(Debug, Deserialize)]
struct LicensesOutput {
    #[serde(default)]
    dependencies: BTreeMap<String, LicenseEntry>,
}

#[derive(Debug, Deserialize)]
struct LicenseEntry {
    #[serde(default)]
    license: Option<LicenseField>,
}

/// Composer reports a single license as a string and multiple licenses as
/// an array of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseField {
    One(String),
    Many(Vec<String>),
}

/// Response shape of `composer outdated --format=json`
#[derive(Debug, Deserialize)]
struct OutdatedOutput {
    #[serde(default)]
    installed: Vec<OutdatedPackage>,
}

#[derive(Debug, Deserialize)]
struct OutdatedPackage {
    name: String,
    #[serde(default)]
    latest: String,
}

/// Response shape of `composer audit --format=json`
#[derive(Debug, Deserialize)]
struct AuditOutput {
    #[serde(default)]
    advisories: AdvisoryCollection,
}

/// Composer emits `advisories` as an object keyed by package name, but as
/// an empty array when there are no advisories.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AdvisoryCollection {
    ByPackage(BTreeMap<String, serde_json::Value>),
    Empty(Vec<serde_json::Value>),
}

impl Default for AdvisoryCollection {
    fn default() -> Self {
        AdvisoryCollection::Empty(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_output() {
        let raw = r#"{
            "installed": [
                {"name": "monolog/monolog", "version": "2.9.1", "description": "Sends your logs to files"},
                {"name": "psr/log", "version": "1.1.4"}
            ]
        }"#;

        let installed = ComposerCli::parse_show(raw).unwrap();
        assert_eq!(installed.len(), 2);
        assert_eq!(installed[0].name, "monolog/monolog");
        assert_eq!(installed[0].version.as_deref(), Some("2.9.1"));
        assert_eq!(
            installed[0].description.as_deref(),
            Some("Sends your logs to files")
        );
        assert_eq!(installed[1].description, None);
    }

    #[test]
    fn test_parse_show_missing_installed_key() {
        let installed = ComposerCli::parse_show("{}").unwrap();
        assert!(installed.is_empty());
    }

    #[test]
    fn test_parse_show_rejects_non_json() {
        let result = ComposerCli::parse_show("Composer could not find a composer.json file");
        assert!(result.is_err());
        let display = format!("{}", result.unwrap_err());
        assert!(display.contains("composer show --format=json"));
    }

    #[test]
    fn test_parse_licenses_single_and_multiple() {
        let raw = r#"{
            "name": "acme/app",
            "dependencies": {
                "monolog/monolog": {"version": "2.9.1", "license": ["MIT"]},
                "dual/licensed": {"version": "1.0.0", "license": ["MIT", "Apache-2.0"]},
                "legacy/pkg": {"version": "0.1.0", "license": "BSD-3-Clause"}
            }
        }"#;

        let licenses = ComposerCli::parse_licenses(raw).unwrap();
        assert_eq!(licenses["monolog/monolog"], vec!["MIT"]);
        assert_eq!(licenses["dual/licensed"], vec!["MIT", "Apache-2.0"]);
        assert_eq!(licenses["legacy/pkg"], vec!["BSD-3-Clause"]);
    }

    #[test]
    fn test_parse_licenses_missing_license_field() {
        let raw = r#"{"dependencies": {"no-license/pkg": {"version": "1.0.0"}}}"#;

        let licenses = ComposerCli::parse_licenses(raw).unwrap();
        assert!(!licenses.contains_key("no-license/pkg"));
    }

    #[test]
    fn test_parse_outdated_output() {
        let raw = r#"{
            "installed": [
                {"name": "monolog/monolog", "version": "2.9.1", "latest": "3.5.0"},
                {"name": "psr/log", "version": "1.1.4", "latest": "1.1.4"}
            ]
        }"#;

        let outdated = ComposerCli::parse_outdated(raw).unwrap();
        assert_eq!(outdated.len(), 2);
        assert_eq!(outdated[0].latest, "3.5.0");
        assert_eq!(outdated[1].latest, "1.1.4");
    }

    #[test]
    fn test_parse_audit_keyed_by_package() {
        let raw = r#"{
            "advisories": {
                "vendor/vulnerable": [{"advisoryId": "PKSA-1234", "title": "RCE"}],
                "other/pkg": [{"advisoryId": "PKSA-5678", "title": "XSS"}]
            }
        }"#;

        let names = ComposerCli::parse_audit(raw).unwrap();
        assert_eq!(names, vec!["other/pkg", "vendor/vulnerable"]);
    }

    #[test]
    fn test_parse_audit_empty_array_shape() {
        // With no findings composer emits an array, not an object
        let names = ComposerCli::parse_audit(r#"{"advisories": []}"#).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_parse_audit_missing_advisories_key() {
        let names = ComposerCli::parse_audit("{}").unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_list_installed_spawn_failure() {
        let cli = ComposerCli::new(
            PathBuf::from("/nonexistent/composer-binary"),
            PathBuf::from("."),
        );
        let result = cli.list_installed();
        assert!(result.is_err());
        let display = format!("{}", result.unwrap_err());
        assert!(display.contains("Failed to run"));
    }
}
