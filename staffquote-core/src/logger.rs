use crate::error::QuoteError;
use csv::Writer;
use serde::Serialize;
use staffquote_schemas::quote::Quote;
use std::fs;

#[derive(Debug, Serialize)]
struct QuoteRow {
    role: String,
    seats: u32,
    model: &'static str,
    us_min: u32,
    us_max: u32,
    latin_min: u32,
    latin_max: u32,
    us_avg: f64,
    latin_avg: f64,
    savings: f64,
    savings_pct: i64,
    annual_service: f64,
    total_per_seat: f64,
    team_annual: f64,
}

/// Appends one flat CSV row per computed quote, flushing after each write so
/// the log survives an interrupted run.
pub struct QuoteLogger {
    path: String,
    writer: Writer<fs::File>,
}

impl QuoteLogger {
    pub fn new(path: &str) -> Result<Self, QuoteError> {
        let writer = Writer::from_path(path)
            .map_err(|e| QuoteError::CsvError(path.to_string(), e))?;
        Ok(Self {
            path: path.to_string(),
            writer,
        })
    }

    pub fn log_quote(&mut self, quote: &Quote) -> Result<(), QuoteError> {
        let row = QuoteRow {
            role: quote.role.clone(),
            seats: quote.seats,
            model: quote.model.as_str(),
            us_min: quote.us_range.min,
            us_max: quote.us_range.max,
            latin_min: quote.latin_range.min,
            latin_max: quote.latin_range.max,
            us_avg: quote.us_avg,
            latin_avg: quote.latin_avg,
            savings: quote.savings,
            savings_pct: quote.savings_pct,
            annual_service: quote.annual_service,
            total_per_seat: quote.total_per_seat,
            team_annual: quote.team_annual,
        };
        self.writer
            .serialize(row)
            .map_err(|e| QuoteError::CsvError(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| QuoteError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}
