mod list;
mod paths;
mod report;
mod update;

pub use list::list;
pub use paths::{Paths, default_root};
pub use report::{DriftReport, HEADER, NO_UPDATES};
pub use update::{UpdateSummary, outdated_report, update};
