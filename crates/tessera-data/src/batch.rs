//! Batch normalisation of loosely typed input values.
//!
//! # Design
//! - Items are normalised independently; a bad item is logged and dropped
//!   without failing the batch.
//! - Empty-ish values (null, `false`, zero, empty string/array/object) map to
//!   `None` and are kept so output positions line up with accepted inputs.
//! - Persistence hooks are placeholders that only log.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::FpCategory;

use serde_json::Value;
use tracing::{info, warn};

/// Tunables for [`BatchProcessor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorSettings {
    /// Maximum number of items handed to the store in one call.
    pub batch_size: usize,
    /// Store timeout in seconds.
    pub timeout: u64,
    /// Attempts allowed per store call.
    pub retries: u32,
}

impl Default for ProcessorSettings {
    fn default() -> Self {
        Self {
            batch_size: 100,
            timeout: 30,
            retries: 3,
        }
    }
}

/// Reasons a single item cannot be normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The item was a non-empty value that is not a string.
    UnsupportedItem {
        /// JSON type name of the rejected item.
        kind: &'static str,
    },
}

impl Display for BatchError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedItem { kind } => write!(formatter, "cannot normalise {kind} item"),
        }
    }
}

impl Error for BatchError {}

/// Normalises batches of string items.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    settings: ProcessorSettings,
}

impl BatchProcessor {
    /// Build a processor with explicit settings.
    #[must_use]
    pub const fn new(settings: ProcessorSettings) -> Self {
        Self { settings }
    }

    /// Settings in effect for this processor.
    #[must_use]
    pub const fn settings(&self) -> &ProcessorSettings {
        &self.settings
    }

    /// Normalise a single item: trim surrounding whitespace and lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::UnsupportedItem`] for non-empty values that are not strings.
    pub fn process_item(item: &Value) -> Result<Option<String>, BatchError> {
        if is_empty(item) {
            return Ok(None);
        }
        match item {
            Value::String(text) => Ok(Some(text.trim().to_lowercase())),
            other => Err(BatchError::UnsupportedItem {
                kind: kind_of(other),
            }),
        }
    }

    /// Normalise every item, logging and skipping the ones that fail.
    #[must_use]
    pub fn process_batch(&self, items: &[Value]) -> Vec<Option<String>> {
        let mut processed = Vec::with_capacity(items.len());
        for item in items {
            match Self::process_item(item) {
                Ok(result) => processed.push(result),
                Err(err) => Self::handle_error(&err, item),
            }
        }
        processed
    }

    /// Persist processed items.
    pub fn save_to_database(&self, data: &[Option<String>]) {
        info!(
            items = data.len(),
            batch_size = self.settings.batch_size,
            retries = self.settings.retries,
            "saving processed batch"
        );
    }

    /// Load previously processed items matching `query`.
    #[must_use]
    pub fn load_from_database(&self, query: &str) -> Vec<Option<String>> {
        info!(
            query,
            timeout_secs = self.settings.timeout,
            "loading processed items"
        );
        Vec::new()
    }

    /// Process `input` and hand the result to the store.
    #[must_use]
    pub fn run(&self, input: &[Value]) -> Vec<Option<String>> {
        let processed = self.process_batch(input);
        self.save_to_database(&processed);
        processed
    }

    fn handle_error(error: &BatchError, item: &Value) {
        warn!(error = %error, "Error processing {item}: {error}");
    }
}

fn is_empty(item: &Value) -> bool {
    match item {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|value| value.classify() == FpCategory::Zero),
        Value::String(text) => text.is_empty(),
        Value::Array(values) => values.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

const fn kind_of(item: &Value) -> &'static str {
    match item {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
