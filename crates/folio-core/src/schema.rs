//! Schema mapping for loosely structured tabular feeds.
//!
//! Spreadsheet exports rename, translate and reorder their columns. A
//! [`FieldMapping`] names each logical field once together with the header
//! spellings it may appear under. [`FieldMapping::resolve`] turns a header row
//! into a [`ResolvedSchema`] holding one column index per field, so row access
//! during ingestion is a plain lookup with no positional guessing.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A logical field and the header names it may appear under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Logical field name used by ingestion code.
    pub name: String,
    /// Candidate header names, in order of preference.
    pub candidates: Vec<String>,
    /// Whether resolution fails when no candidate matches.
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    /// Creates an optional field.
    #[must_use]
    pub fn optional(name: &str, candidates: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            candidates: candidates.iter().map(|c| (*c).to_string()).collect(),
            required: false,
        }
    }

    /// Creates a required field.
    #[must_use]
    pub fn required(name: &str, candidates: &[&str]) -> Self {
        Self {
            required: true,
            ..Self::optional(name, candidates)
        }
    }
}

/// Named field mapping for one feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Declared fields.
    pub fields: Vec<FieldSpec>,
}

impl FieldMapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Mapping for the portfolio holdings sheet (English and Italian headers).
    #[must_use]
    pub fn holdings_feed() -> Self {
        Self::new()
            .with_field(FieldSpec::required(
                "symbol",
                &["Symbol", "Ticker", "Simbolo", "Titolo"],
            ))
            .with_field(FieldSpec::required(
                "quantity",
                &["Quantity", "Qty", "Shares", "Quantità", "Quantita", "Numero"],
            ))
            .with_field(FieldSpec::required(
                "cost_basis",
                &[
                    "Buy Price",
                    "Cost Basis",
                    "Avg Price",
                    "Prezzo di carico",
                    "Prezzo medio",
                    "Prezzo Acquisto",
                    "PMC",
                ],
            ))
            .with_field(FieldSpec::optional("name", &["Name", "Nome", "Descrizione"]))
            .with_field(FieldSpec::optional("currency", &["Currency", "Valuta", "Divisa"]))
            .with_field(FieldSpec::optional("sector", &["Sector", "Settore"]))
            .with_field(FieldSpec::optional("country", &["Country", "Paese", "Nazione"]))
            .with_field(FieldSpec::optional("rating", &["Rating"]))
            .with_field(FieldSpec::optional(
                "value",
                &["Value", "Market Value", "Controvalore", "Valore"],
            ))
    }

    /// Resolves the mapping against a header row.
    ///
    /// Headers are compared case-insensitively after trimming. For each field
    /// the first candidate present in the header row wins.
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S]) -> CoreResult<ResolvedSchema> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize(h.as_ref())).collect();

        let mut columns = Vec::with_capacity(self.fields.len());
        for spec in &self.fields {
            let index = spec.candidates.iter().find_map(|candidate| {
                let wanted = normalize(candidate);
                normalized.iter().position(|h| *h == wanted)
            });

            if index.is_none() && spec.required {
                return Err(CoreError::missing_column(&spec.name, &spec.candidates));
            }
            columns.push((spec.name.clone(), index));
        }

        Ok(ResolvedSchema { columns })
    }
}

/// A mapping bound to concrete column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchema {
    columns: Vec<(String, Option<usize>)>,
}

impl ResolvedSchema {
    /// Returns the column index for a logical field, if it was found.
    #[must_use]
    pub fn column(&self, field: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, idx)| *idx)
    }

    /// Returns true if the field is declared and present in the feed.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.column(field).is_some()
    }

    /// Returns the trimmed cell for a logical field.
    ///
    /// Absent columns, short rows and blank cells all yield `None`.
    #[must_use]
    pub fn get<'r, S: AsRef<str>>(&self, row: &'r [S], field: &str) -> Option<&'r str> {
        let idx = self.column(field)?;
        let cell = row.get(idx)?.as_ref().trim();
        if cell.is_empty() {
            None
        } else {
            Some(cell)
        }
    }

    /// Like [`get`](Self::get) but fails for fields the mapping never declared.
    pub fn try_get<'r, S: AsRef<str>>(
        &self,
        row: &'r [S],
        field: &str,
    ) -> CoreResult<Option<&'r str>> {
        if !self.columns.iter().any(|(name, _)| name == field) {
            return Err(CoreError::UnknownField {
                field: field.to_string(),
            });
        }
        Ok(self.get(row, field))
    }
}

fn normalize(header: &str) -> String {
    header.trim().to_lowercase()
}
