// Seeding plan and driver. Each step is a plain description of one HTTP
// call plus a classifier that turns the call's outcome into a log entry;
// `run` executes the plan strictly in order and feeds entries to an
// injectable log sink, so tests can drive the whole sequence without a
// terminal.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::api::{ApiClient, CallOutcome};
use crate::config::{CollectionSpec, RecordSeed, SeedConfig};

/// Severity of one log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// One line of seeding output.
#[derive(Debug)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    fn info(message: String) -> Self {
        LogEntry { level: Level::Info, message }
    }

    fn warn(message: String) -> Self {
        LogEntry { level: Level::Warn, message }
    }

    fn error(message: String) -> Self {
        LogEntry { level: Level::Error, message }
    }
}

/// Sink for seeding progress. The console implementation lives in the
/// `ui` module; tests substitute a recording sink.
pub trait SeedLog {
    /// Announce the step about to run.
    fn step(&mut self, message: &str);
    /// Report a classified call outcome or a summary line.
    fn entry(&mut self, entry: LogEntry);
}

/// What a step is doing, used to classify its outcome.
#[derive(Debug)]
enum StepKind {
    CreateCollection { name: String },
    CreateRecord { label: String },
}

/// A single planned HTTP call: where to POST, what to send, and how to
/// read the result.
pub struct SeedStep {
    path: String,
    body: serde_json::Value,
    kind: StepKind,
}

/// Success body of a record insert. Only the assigned id is of interest.
#[derive(Deserialize)]
struct RecordCreated {
    id: String,
}

impl SeedStep {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }

    /// Progress line shown while the call is in flight.
    fn announce(&self) -> String {
        match &self.kind {
            StepKind::CreateCollection { name } => {
                format!("Creating collection '{}'...", name)
            }
            StepKind::CreateRecord { label } => {
                format!("Inserting record '{}'...", label)
            }
        }
    }

    /// Map the call outcome to a log entry. A rejected collection create is
    /// only a warning (the collection may already exist); a rejected record
    /// insert is an error. An unreadable success body is an `Err` the
    /// caller propagates.
    fn classify(&self, outcome: &CallOutcome) -> Result<LogEntry> {
        match &self.kind {
            StepKind::CreateCollection { name } => Ok(if outcome.succeeded() {
                LogEntry::info(format!("Collection '{}' created", name))
            } else {
                LogEntry::warn(format!(
                    "Collection '{}' may already exist or failed to create: {}",
                    name, outcome.body
                ))
            }),
            StepKind::CreateRecord { label } => {
                if outcome.succeeded() {
                    let created: RecordCreated = serde_json::from_str(&outcome.body)
                        .with_context(|| {
                            format!("Parsing create-record response for '{}'", label)
                        })?;
                    Ok(LogEntry::info(format!(
                        "Record created: {} (ID: {})",
                        label, created.id
                    )))
                } else {
                    Ok(LogEntry::error(format!(
                        "Record failed: {} - {}",
                        label, outcome.body
                    )))
                }
            }
        }
    }
}

fn collection_step(spec: &CollectionSpec) -> Result<SeedStep> {
    Ok(SeedStep {
        path: "/api/collections".into(),
        body: serde_json::to_value(spec)
            .with_context(|| format!("Serializing collection spec '{}'", spec.name))?,
        kind: StepKind::CreateCollection { name: spec.name.clone() },
    })
}

fn record_step(record: &RecordSeed) -> SeedStep {
    SeedStep {
        path: format!("/api/collections/{}/records", record.collection),
        body: record.fields.clone(),
        kind: StepKind::CreateRecord { label: record.label().to_string() },
    }
}

/// Expand the config into the ordered call list: each collection's create
/// step followed by the record inserts targeting it, then any records
/// whose collection is not declared (left for the backend to reject).
pub fn build_plan(config: &SeedConfig) -> Result<Vec<SeedStep>> {
    let mut plan = Vec::new();
    for spec in &config.collections {
        plan.push(collection_step(spec)?);
        for record in config.records.iter().filter(|r| r.collection == spec.name) {
            plan.push(record_step(record));
        }
    }
    for record in &config.records {
        if !config.collections.iter().any(|c| c.name == record.collection) {
            plan.push(record_step(record));
        }
    }
    Ok(plan)
}

// Printed after the plan finishes, regardless of per-step outcomes.
const CLOSING_SUMMARY: [&str; 3] = [
    "Demo data setup finished.",
    "Open the admin dashboard under /_/ on the target instance to inspect it.",
    "Re-running this tool inserts the sample records again.",
];

/// Execute the full seeding sequence against `config.base_url`, feeding
/// progress to `log`. HTTP-level rejections are logged and the sequence
/// continues; anything else (network failure, unparseable success body)
/// aborts the run with `Err`. No step gates on a prior step's success, and
/// nothing is rolled back on failure.
pub fn run(config: &SeedConfig, log: &mut dyn SeedLog) -> Result<()> {
    let api = ApiClient::new(&config.base_url)?;
    for step in build_plan(config)? {
        log.step(&step.announce());
        let outcome = api.post(step.path(), step.body())?;
        log.entry(step.classify(&outcome)?);
    }
    for line in CLOSING_SUMMARY {
        log.entry(LogEntry::info(line.to_string()));
    }
    Ok(())
}
