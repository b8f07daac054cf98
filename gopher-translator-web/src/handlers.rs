use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
};
use serde_json::{Map, Value};
use tracing::info;

use gopher_translator::{check_single_word, translate_sentence, translate_word};

use crate::AppState;
use crate::domain::{
    HistoryResponse, JsonRequest, SentenceRequest, SentenceResponse, WordRequest, WordResponse,
};
use crate::error::ApiError;

pub async fn word_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WordResponse>, ApiError> {
    let request: WordRequest = decode_json(&headers, &body)?;
    let word = check_single_word(&request.english_word).map_err(|_| ApiError::NotASingleWord)?;

    let gopher_word = translate_word(word);
    info!("Translated word: {} → {}", word, gopher_word);
    state.history.record(word, &gopher_word);

    Ok(Json(WordResponse { gopher_word }))
}

pub async fn sentence_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SentenceResponse>, ApiError> {
    let request: SentenceRequest = decode_json(&headers, &body)?;
    let sentence = request.english_sentence.trim();

    let gopher_sentence = translate_sentence(sentence);
    info!("Translated sentence: {} → {}", sentence, gopher_sentence);
    state.history.record(sentence, &gopher_sentence);

    Ok(Json(SentenceResponse { gopher_sentence }))
}

pub async fn history_handler(State(state): State<AppState>) -> Json<HistoryResponse> {
    let history = state.history.snapshot();
    info!("Listing {} history entries", history.len());
    Json(HistoryResponse { history })
}

/// Decode a JSON request body, rejecting anything not sent as `application/json`.
///
/// Only the first JSON value in the body is read. Field names match case-insensitively
/// and `null` decodes as an empty request.
fn decode_json<T: JsonRequest>(headers: &HeaderMap, body: &[u8]) -> Result<T, ApiError> {
    if !is_json(headers) {
        return Err(ApiError::UnsupportedMediaType);
    }

    let value = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| ApiError::InvalidBody("EOF".to_string()))?
        .map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let value = match value {
        Value::Null => Value::Object(Map::new()),
        Value::Object(fields) => Value::Object(fold_field_names(fields, T::FIELDS)),
        other => other,
    };
    serde_json::from_value(value).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// Rename keys that match a known field in another case to the field's own name.
fn fold_field_names(fields: Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| {
            let key = known
                .iter()
                .find(|name| name.eq_ignore_ascii_case(&key))
                .map_or(key, |name| name.to_string());
            (key, value)
        })
        .collect()
}

/// Media type check; parameters such as `charset` are ignored.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
}
