/// Domain layer - the merged package table and the parsed collaborator data
/// it is built from.
mod package_record;
mod package_table;
mod source_data;

pub use package_record::PackageRecord;
pub use package_table::PackageTable;
pub use source_data::{InstalledPackage, LicenseMap, OutdatedEntry};
