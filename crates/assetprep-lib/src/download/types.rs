use std::fmt;

/// Aggregate result of one pass over the manifest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub successful: usize,
    pub total: usize,
}

impl DownloadSummary {
    pub fn new(total: usize) -> Self {
        Self {
            successful: 0,
            total,
        }
    }

    pub fn record(&mut self, success: bool) {
        if success {
            self.successful += 1;
        }
    }

    pub fn failed(&self) -> usize {
        self.total - self.successful
    }

    pub fn all_succeeded(&self) -> bool {
        self.successful == self.total
    }
}

impl fmt::Display for DownloadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.successful, self.total)
    }
}
