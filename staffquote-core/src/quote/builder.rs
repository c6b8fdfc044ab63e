use crate::{
    catalog::Catalog,
    error::QuoteError,
    quote::{
        engine::compute_quote,
        resolve::{clamp_seats, parse_seats, resolve_benchmark, MIN_SEATS},
    },
};
use staffquote_schemas::{engagement::ModelKey, quote::Quote};

/// The user-driven input state for a quote, with sanitization at each point
/// of entry.
///
/// Every setter is total: seat counts are clamped, custom role text is
/// accepted as-is and trimmed during resolution. `build` resolves the role
/// against a catalog and computes the derived figures.
#[derive(Debug, Clone, Default)]
pub struct QuoteRequest {
    selected_role: Option<String>,
    custom_role: String,
    seats: Option<u32>,
    model: Option<ModelKey>,
}

impl QuoteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a catalog role by display name.
    pub fn with_selected_role(mut self, role: impl Into<String>) -> Self {
        self.selected_role = Some(role.into());
        self
    }

    /// Sets free-text role input. Non-blank text takes precedence over any
    /// catalog selection.
    pub fn with_custom_role(mut self, text: impl Into<String>) -> Self {
        self.custom_role = text.into();
        self
    }

    /// Sets the seat count, clamped into the allowed range.
    pub fn with_seats(mut self, raw: i64) -> Self {
        self.seats = Some(clamp_seats(raw));
        self
    }

    /// Sets the seat count from text; non-numeric input falls back to one
    /// seat.
    pub fn with_seats_text(mut self, text: &str) -> Self {
        self.seats = Some(parse_seats(text));
        self
    }

    pub fn with_model(mut self, key: ModelKey) -> Self {
        self.model = Some(key);
        self
    }

    /// Resolves the request against the catalog and computes the quote.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::RoleNotFound` when a selected role names no
    /// catalog entry. An unset selection falls back to the catalog default.
    pub fn build(self, catalog: &Catalog) -> Result<Quote, QuoteError> {
        let selected = match &self.selected_role {
            Some(name) => catalog
                .benchmark(name)
                .ok_or_else(|| QuoteError::RoleNotFound(name.clone()))?,
            None => catalog.default_benchmark(),
        };
        let benchmark = resolve_benchmark(&self.custom_role, selected);
        let seats = self.seats.unwrap_or(MIN_SEATS);
        let model = catalog.model(self.model.unwrap_or(ModelKey::FullyManaged));
        Ok(compute_quote(&benchmark, seats, model))
    }
}
