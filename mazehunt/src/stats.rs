use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use gridmaze::report::{RunRecord, StatsSink};

/// Appends one CSV line per explorer run, writing the header when the file
/// is new or empty.
pub struct CsvStats {
    path: PathBuf,
}

impl CsvStats {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl StatsSink for CsvStats {
    fn record(&mut self, record: &RunRecord) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if file.metadata()?.len() == 0 {
            writeln!(file, "timestamp,algorithm,expansions,path_length")?;
        }

        writeln!(
            file,
            "{},{},{},{}",
            record.timestamp.to_rfc3339(),
            record.algorithm,
            record.expansions,
            record.path_length
        )
    }
}
