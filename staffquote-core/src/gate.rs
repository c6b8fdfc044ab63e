use crate::error::QuoteError;
use chrono::NaiveDate;
use serde::Serialize;
use staffquote_schemas::{engagement::ModelKey, lead::LeadForm, quote::Quote};
use std::fs;
use std::path::PathBuf;

/// The payload a downstream lead-capture collaborator accepts: the request
/// fields plus the computed quote.
#[derive(Debug, Clone, Serialize)]
pub struct LeadRecord {
    pub role: String,
    pub seats: u32,
    pub model: ModelKey,
    pub email: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub consent: bool,
    pub quote: Quote,
}

impl LeadRecord {
    pub fn new(form: &LeadForm, quote: &Quote) -> Self {
        Self {
            role: quote.role.clone(),
            seats: quote.seats,
            model: quote.model,
            email: form.email.clone(),
            company: form.company.clone(),
            start_date: form.start_date,
            consent: form.consent,
            quote: quote.clone(),
        }
    }
}

/// Readiness predicate for submission: email and company must be non-blank
/// and consent given.
pub fn can_submit(form: &LeadForm) -> bool {
    !form.email.trim().is_empty() && !form.company.trim().is_empty() && form.consent
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected,
}

/// Where accepted leads go. The real CRM integration lives outside this
/// repository; implementors of this trait stand in for it.
pub trait LeadSink {
    fn deliver(&mut self, record: &LeadRecord) -> Result<(), QuoteError>;
}

/// Discards every record.
#[derive(Debug, Default)]
pub struct NullSink;

impl LeadSink for NullSink {
    fn deliver(&mut self, _record: &LeadRecord) -> Result<(), QuoteError> {
        Ok(())
    }
}

/// Writes each accepted lead as a numbered JSON file in a directory.
#[derive(Debug)]
pub struct JsonFileSink {
    dir: PathBuf,
    delivered: u64,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            delivered: 0,
        }
    }
}

impl LeadSink for JsonFileSink {
    fn deliver(&mut self, record: &LeadRecord) -> Result<(), QuoteError> {
        let path = self.dir.join(format!("lead_{:03}.json", self.delivered + 1));
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json).map_err(|e| QuoteError::FileIO(path.display().to_string(), e))?;
        self.delivered += 1;
        Ok(())
    }
}

/// Runs the gate in front of the sink. An incomplete form is a silent no-op:
/// the sink is never touched and `Rejected` is returned.
pub fn submit(
    form: &LeadForm,
    record: &LeadRecord,
    sink: &mut dyn LeadSink,
) -> Result<SubmissionOutcome, QuoteError> {
    if !can_submit(form) {
        return Ok(SubmissionOutcome::Rejected);
    }
    sink.deliver(record)?;
    Ok(SubmissionOutcome::Accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::quote::engine::compute_quote;

    struct CountingSink {
        delivered: usize,
    }

    impl LeadSink for CountingSink {
        fn deliver(&mut self, _record: &LeadRecord) -> Result<(), QuoteError> {
            self.delivered += 1;
            Ok(())
        }
    }

    fn form(email: &str, company: &str, consent: bool) -> LeadForm {
        LeadForm {
            email: email.to_string(),
            company: company.to_string(),
            start_date: None,
            consent,
        }
    }

    fn sample_quote() -> Quote {
        let catalog = Catalog::builtin();
        compute_quote(
            catalog.default_benchmark(),
            3,
            catalog.model(ModelKey::FullyManaged),
        )
    }

    #[test]
    fn gate_requires_all_three_fields() {
        assert!(can_submit(&form("a@b.com", "Acme", true)));
        assert!(!can_submit(&form("", "Acme", true)));
        assert!(!can_submit(&form("a@b.com", "", true)));
        assert!(!can_submit(&form("a@b.com", "Acme", false)));
        assert!(!can_submit(&form("   ", "Acme", true)));
        assert!(!can_submit(&form("", "", false)));
    }

    #[test]
    fn rejected_submission_never_reaches_the_sink() {
        let quote = sample_quote();
        let incomplete = form("", "Acme", true);
        let record = LeadRecord::new(&incomplete, &quote);
        let mut sink = CountingSink { delivered: 0 };

        let outcome = submit(&incomplete, &record, &mut sink).unwrap();
        assert_eq!(outcome, SubmissionOutcome::Rejected);
        assert_eq!(sink.delivered, 0);
    }

    #[test]
    fn accepted_submission_delivers_once() {
        let quote = sample_quote();
        let complete = form("you@company.com", "Acme, Inc.", true);
        let record = LeadRecord::new(&complete, &quote);
        let mut sink = CountingSink { delivered: 0 };

        let outcome = submit(&complete, &record, &mut sink).unwrap();
        assert_eq!(outcome, SubmissionOutcome::Accepted);
        assert_eq!(sink.delivered, 1);
    }

    #[test]
    fn json_sink_writes_numbered_files() {
        let dir = tempfile::tempdir().unwrap();
        let quote = sample_quote();
        let complete = form("you@company.com", "Acme, Inc.", true);
        let record = LeadRecord::new(&complete, &quote);

        let mut sink = JsonFileSink::new(dir.path());
        sink.deliver(&record).unwrap();
        sink.deliver(&record).unwrap();

        let first = std::fs::read_to_string(dir.path().join("lead_001.json")).unwrap();
        assert!(first.contains("\"company\": \"Acme, Inc.\""));
        assert!(first.contains("\"team_annual\""));
        assert!(dir.path().join("lead_002.json").exists());
    }
}
