//! Scripted extractor for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::extractor::{ExtractOptions, Extractor};
use crate::media::ExtractionResult;

enum Script {
    Result(Option<ExtractionResult>),
    Fail(String),
}

/// Extractor returning a canned response and recording its calls.
pub struct MockExtractor {
    script: Script,
    pub calls: Mutex<Vec<(String, ExtractOptions)>>,
}

impl MockExtractor {
    pub fn returning(result: ExtractionResult) -> Self {
        Self::new(Script::Result(Some(result)))
    }

    pub fn empty() -> Self {
        Self::new(Script::Result(None))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Script::Fail(message.to_string()))
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract(&self, url: &str, options: &ExtractOptions) -> Result<Option<ExtractionResult>> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), options.clone()));

        match &self.script {
            Script::Result(result) => Ok(result.clone()),
            Script::Fail(message) => Err(Error::Download(message.clone())),
        }
    }
}
