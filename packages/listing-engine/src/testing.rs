//! Test doubles for the extraction-oracle seam.
//!
//! [`MockOracle`] replays scripted responses and records every call, so
//! pipeline tests can assert both what was asked and what was done with
//! the answers, without a live backend.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{OracleError, OracleResult};
use crate::oracle::ExtractionOracle;
use crate::types::record::RawExtraction;
use crate::vocabulary::FieldHint;

/// One recorded call to the mock oracle.
#[derive(Debug, Clone)]
pub struct MockOracleCall {
    /// The listing text the extraction was asked about
    pub text: String,

    /// The names of the requested fields, in request order
    pub field_names: Vec<String>,
}

/// A scripted [`ExtractionOracle`].
///
/// Responses are consumed in push order, one per `extract` call. When
/// the script runs out, further calls return an empty extraction, which
/// normalizes to an all-empty record.
#[derive(Debug, Default)]
pub struct MockOracle {
    responses: Mutex<VecDeque<OracleResult<RawExtraction>>>,
    calls: Mutex<Vec<MockOracleCall>>,
}

impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful extraction.
    pub fn push_response(&self, raw: RawExtraction) {
        self.responses.lock().unwrap().push_back(Ok(raw));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: OracleError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<MockOracleCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExtractionOracle for MockOracle {
    async fn extract(&self, text: &str, fields: &[FieldHint]) -> OracleResult<RawExtraction> {
        self.calls.lock().unwrap().push(MockOracleCall {
            text: text.to_string(),
            field_names: fields.iter().map(|f| f.name.clone()).collect(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawExtraction::new()))
    }
}

/// A plausible dealer listing for pipeline tests.
pub fn sample_listing_text() -> &'static str {
    "2019 Freightliner Cascadia 126, tandem axle, Detroit DD15 engine, \
     Eaton Fuller 10 speed manual, 455 HP, air ride suspension, \
     stock #A100, $50,000. Located in Columbus, OH."
}
