use crate::error::*;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use reqwest::{StatusCode, Url};

/// One puzzle: a (year, day) pair. Every remote URL and local path derives from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PuzzleRef {
    pub year: u32,
    pub day: u32,
}

impl PuzzleRef {
    pub const fn new(year: u32, day: u32) -> Self {
        Self { year, day }
    }
}

impl fmt::Display for PuzzleRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/day/{}", self.year, self.day)
    }
}

/// Form body posted to the answer endpoint.
/// e.g. `level=1&answer=42`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerPayload {
    /// 1-based level number
    pub level: u8,
    pub answer: String,
}

impl AnswerPayload {
    pub fn new(level: u8, answer: impl Into<String>) -> Self {
        Self {
            level,
            answer: answer.into(),
        }
    }
}

/// Authenticated access to the puzzle service.
/// Both calls fail on a non-success status; no retry is attempted here.
#[async_trait]
pub trait Client: Send + Sync {
    fn root_url(&self) -> &Url;

    async fn fetch(&self, url: &Url) -> Result<String>;

    async fn submit(&self, url: &Url, payload: &AnswerPayload) -> Result<String>;
}
