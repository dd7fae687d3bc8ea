mod report;

pub use report::{banner, download_report, next_steps};
