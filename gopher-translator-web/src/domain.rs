//! Request and response bodies

use gopher_translator::HistoryEntry;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A JSON request body whose field names are matched without regard to case
pub trait JsonRequest: DeserializeOwned {
    const FIELDS: &'static [&'static str];
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct WordRequest {
    #[serde(rename = "english-word")]
    pub english_word: String,
}

impl JsonRequest for WordRequest {
    const FIELDS: &'static [&'static str] = &["english-word"];
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordResponse {
    #[serde(rename = "gopher-word")]
    pub gopher_word: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SentenceRequest {
    #[serde(rename = "english-sentence")]
    pub english_sentence: String,
}

impl JsonRequest for SentenceRequest {
    const FIELDS: &'static [&'static str] = &["english-sentence"];
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceResponse {
    #[serde(rename = "gopher-sentence")]
    pub gopher_sentence: String,
}

/// `{"history": [{"<original>": "<translated>"}, ...]}`
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
