use crate::domain::model::Report;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// In-memory ordered collection of reports plus its flat-file persistence.
///
/// The on-disk format is one record per line, six fields joined by `;` in the
/// order name, email, type, description, latitude, longitude, coordinates
/// rendered with 6 fractional digits. Field values are written verbatim, so a
/// `;` inside a value corrupts the record on reload. That matches the legacy
/// file format and is deliberately not worked around.
pub struct ReportStore<S: Storage> {
    storage: S,
    path: String,
    reports: Vec<Report>,
}

impl<S: Storage> ReportStore<S> {
    /// Populates the store from the file at `path`. A missing file yields an
    /// empty store; lines that do not decompose into exactly six fields with
    /// parseable coordinates are skipped.
    pub fn load(storage: S, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let reports = match storage.read_file(&path)? {
            Some(data) => decode(&data),
            None => {
                tracing::debug!("data file {} not found, starting empty", path);
                Vec::new()
            }
        };
        tracing::info!("loaded {} reports from {}", reports.len(), path);
        Ok(Self {
            storage,
            path,
            reports,
        })
    }

    /// Rewrites the whole data file with the current sequence.
    pub fn save(&self) -> Result<()> {
        let data = encode(&self.reports)?;
        self.storage.write_file(&self.path, &data)?;
        tracing::debug!("saved {} reports to {}", self.reports.len(), self.path);
        Ok(())
    }

    pub fn append(&mut self, report: Report) {
        self.reports.push(report);
    }

    /// Stable lexicographic sort on the report name. Equal names keep their
    /// original relative order.
    pub fn sort_by_name(&mut self) {
        self.reports.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

fn decode(data: &[u8]) -> Vec<Report> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(data);

    let mut reports = Vec::new();
    for (line, result) in reader.records().enumerate() {
        match parse_record(result) {
            Ok(report) => reports.push(report),
            Err(reason) => tracing::debug!("skipping malformed line {}: {}", line + 1, reason),
        }
    }
    reports
}

/// A record is accepted only when it has exactly six fields and both
/// coordinate fields parse as numbers.
fn parse_record(result: csv::Result<csv::StringRecord>) -> std::result::Result<Report, String> {
    let record = result.map_err(|e| e.to_string())?;
    if record.len() != 6 {
        return Err(format!("expected 6 fields, got {}", record.len()));
    }
    let latitude = record[4].parse::<f64>().map_err(|e| e.to_string())?;
    let longitude = record[5].parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Report {
        name: record[0].to_string(),
        email: record[1].to_string(),
        disaster_type: record[2].to_string(),
        description: record[3].to_string(),
        latitude,
        longitude,
    })
}

fn encode(reports: &[Report]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(Vec::new());

    for report in reports {
        let latitude = format!("{:.6}", report.latitude);
        let longitude = format!("{:.6}", report.longitude);
        writer.write_record([
            report.name.as_str(),
            report.email.as_str(),
            report.disaster_type.as_str(),
            report.description.as_str(),
            latitude.as_str(),
            longitude.as_str(),
        ])?;
    }

    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}
