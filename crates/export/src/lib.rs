//! Export helpers for call history artifacts.

pub mod history {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use fuel_server::CallRecord;
    use serde::Serialize;

    /// Supported history export encodings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ExportFormat {
        Csv,
        Json,
    }

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Flat CSV row; the route is rendered as `kind:gravity` legs joined with `|`.
    #[derive(Debug, Serialize)]
    struct Row<'a> {
        caller: &'a str,
        timestamp: i64,
        mass: i64,
        route: String,
        fuel: u64,
    }

    impl<'a> From<&'a CallRecord> for Row<'a> {
        fn from(record: &'a CallRecord) -> Self {
            Row {
                caller: record.caller.as_str(),
                timestamp: record.timestamp,
                mass: record.input.mass,
                route: record.input.route.to_string(),
                fuel: record.output,
            }
        }
    }

    /// Write records as CSV with a `caller,timestamp,mass,route,fuel` header.
    pub fn write_csv(records: &[CallRecord], writer: &mut dyn Write) -> io::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        if records.is_empty() {
            csv_writer.write_record(["caller", "timestamp", "mass", "route", "fuel"])?;
        }
        for record in records {
            csv_writer.serialize(Row::from(record))?;
        }
        csv_writer.flush()
    }

    /// Write records as a pretty-printed JSON array.
    pub fn write_json(records: &[CallRecord], writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, records)?;
        writeln!(writer)
    }

    /// Export `records` to `path` (or stdout for `-`) in the requested format.
    pub fn export(records: &[CallRecord], path: &Path, format: ExportFormat) -> io::Result<()> {
        let mut writer = writer_for_path(path)?;
        match format {
            ExportFormat::Csv => write_csv(records, writer.as_mut())?,
            ExportFormat::Json => write_json(records, writer.as_mut())?,
        }
        writer.flush()
    }
}
