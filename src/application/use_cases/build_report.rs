use crate::application::dto::{ReportRequest, ReportResponse};
use crate::ports::outbound::{PackageDataSource, ProgressReporter};
use crate::report::domain::{InstalledPackage, LicenseMap, OutdatedEntry, PackageTable};
use crate::report::services::merge;
use crate::shared::error::ReportError;
use crate::shared::Result;
use chrono::Local;

/// BuildReportUseCase - Core use case for report generation
///
/// Orchestrates the four sequential data-gathering steps and the three
/// enrichment passes over the shared table, using generic dependency
/// injection for all infrastructure dependencies.
///
/// Each step blocks until its collaborator call returns. A failed step
/// degrades to an empty result set with a warning instead of aborting the
/// run; only a listing failure under `strict_listing` is fatal.
///
/// # Type Parameters
/// * `DS` - PackageDataSource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildReportUseCase<DS, PR> {
    data_source: DS,
    progress_reporter: PR,
}

impl<DS, PR> BuildReportUseCase<DS, PR>
where
    DS: PackageDataSource,
    PR: ProgressReporter,
{
    /// Creates a new BuildReportUseCase with injected dependencies
    pub fn new(data_source: DS, progress_reporter: PR) -> Self {
        Self {
            data_source,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Returns
    /// ReportResponse containing the merged table, any advisory names that
    /// matched no installed package, and the generation timestamp
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let installed = self.gather_installed(&request)?;
        let table = merge::build_table(installed);
        self.progress_reporter
            .report(&format!("Detected {} installed package(s)", table.len()));

        let table = self.license_pass(table);
        let table = self.update_pass(table);
        let (table, unlisted) = self.advisory_pass(table);

        if !unlisted.is_empty() {
            self.progress_reporter.warn(&format!(
                "⚠️  {} advisory package(s) are not in the installed list: {}",
                unlisted.len(),
                unlisted.join(", ")
            ));
        }

        Ok(ReportResponse::new(table, unlisted, Local::now()))
    }

    /// Step 1: obtain the installed-package listing.
    ///
    /// # Errors
    /// Only fails when the listing source fails and the request asked for
    /// strict listing; otherwise a failure degrades to an empty listing.
    fn gather_installed(&self, request: &ReportRequest) -> Result<Vec<InstalledPackage>> {
        self.progress_reporter
            .begin_step("📦 Listing installed packages...");
        match self.data_source.list_installed() {
            Ok(installed) => {
                self.progress_reporter.finish_step("installed packages");
                Ok(installed)
            }
            Err(e) if request.strict_listing => Err(ReportError::ListingUnavailable {
                details: e.to_string(),
            }
            .into()),
            Err(e) => {
                self.progress_reporter.warn(&format!(
                    "⚠️  Could not list installed packages, report will be empty: {}",
                    e
                ));
                Ok(Vec::new())
            }
        }
    }

    /// Step 2: merge license identifiers into the table.
    fn license_pass(&self, table: PackageTable) -> PackageTable {
        self.progress_reporter
            .begin_step("📜 Collecting license information...");
        let licenses: LicenseMap = match self.data_source.list_licenses() {
            Ok(licenses) => {
                self.progress_reporter.finish_step("licenses");
                licenses
            }
            Err(e) => {
                self.progress_reporter.warn(&format!(
                    "⚠️  Could not collect licenses, fields default to Unknown: {}",
                    e
                ));
                LicenseMap::new()
            }
        };
        merge::apply_licenses(table, &licenses)
    }

    /// Step 3: merge available-update information into the table.
    fn update_pass(&self, table: PackageTable) -> PackageTable {
        self.progress_reporter
            .begin_step("🔄 Checking for available updates...");
        let outdated: Vec<OutdatedEntry> = match self.data_source.list_outdated() {
            Ok(outdated) => {
                self.progress_reporter.finish_step("updates");
                outdated
            }
            Err(e) => {
                self.progress_reporter.warn(&format!(
                    "⚠️  Could not check for updates, none will be reported: {}",
                    e
                ));
                Vec::new()
            }
        };
        merge::apply_outdated(table, &outdated)
    }

    /// Step 4: flag packages with known security advisories.
    fn advisory_pass(&self, table: PackageTable) -> (PackageTable, Vec<String>) {
        self.progress_reporter
            .begin_step("🔐 Checking security advisories...");
        let advisories: Vec<String> = match self.data_source.list_advisories() {
            Ok(advisories) => {
                self.progress_reporter.finish_step("advisories");
                advisories
            }
            Err(e) => {
                self.progress_reporter.warn(&format!(
                    "⚠️  Could not check advisories, none will be reported: {}",
                    e
                ));
                Vec::new()
            }
        };
        merge::apply_advisories(table, &advisories)
    }
}
