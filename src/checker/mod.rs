mod report;
mod violation;

pub use report::FileReport;
pub use violation::{Violation, check_measurement};
