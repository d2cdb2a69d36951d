//! Remote character list: request body, response decoding and errors
//!
//! The endpoint is a GraphQL API. A single fixed query is sent, which returns the whole list; no
//! parameter is ever sent, filtering happens locally.
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Default endpoint of the character API
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

/// GraphQL query sent to retrieve all characters
pub const CHARACTERS_QUERY: &str = "{
  characters {
    results {
      name
      id
    }
  }
}";


/// Error returned when the character list cannot be retrieved
///
/// The widget does not distinguish between variants, they are only kept for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP error ({0})")]
    Http(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("GraphQL error: {0}")]
    GraphQl(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}


/// A character, as returned by the API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    /// Opaque identifier
    pub id: String,
    /// Display name
    pub name: String,
}

impl CharacterRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}


/// Body of the POST request sent to the endpoint
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

impl QueryRequest<'static> {
    /// Request for the whole character list
    pub fn characters() -> Self {
        Self { query: CHARACTERS_QUERY }
    }
}


#[derive(Deserialize, Debug)]
struct QueryResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Deserialize, Debug)]
struct ResponseData {
    characters: Option<CharacterPage>,
}

#[derive(Deserialize, Debug)]
struct CharacterPage {
    #[serde(default)]
    results: Vec<CharacterRecord>,
}

#[derive(Deserialize, Debug)]
struct ResponseError {
    message: String,
}

impl QueryResponse {
    fn into_records(self) -> Result<Vec<CharacterRecord>, FetchError> {
        // Any reported error fails the whole fetch, even with partial data
        if let Some(error) = self.errors.into_iter().next() {
            return Err(FetchError::GraphQl(error.message));
        }
        self.data
            .and_then(|data| data.characters)
            .map(|page| page.results)
            .ok_or_else(|| FetchError::Decode("missing 'data.characters'".into()))
    }
}


/// Decode the JSON body of a successful response
pub fn decode_characters(body: &[u8]) -> Result<Vec<CharacterRecord>, FetchError> {
    let response: QueryResponse = serde_json::from_slice(body)?;
    response.into_records()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body() {
        let body = serde_json::to_value(QueryRequest::characters()).unwrap();
        assert_eq!(body, serde_json::json!({ "query": CHARACTERS_QUERY }));
    }

    #[test]
    fn decode_results() {
        let body = br#"{"data":{"characters":{"results":[
            {"name":"Rick Sanchez","id":"1"},
            {"name":"Morty Smith","id":"2"}
        ]}}}"#;
        let records = decode_characters(body).unwrap();
        assert_eq!(records, vec![
            CharacterRecord::new("1", "Rick Sanchez"),
            CharacterRecord::new("2", "Morty Smith"),
        ]);
    }

    #[test]
    fn decode_graphql_error() {
        let body = br#"{"data":null,"errors":[{"message":"boom"}]}"#;
        assert_eq!(decode_characters(body), Err(FetchError::GraphQl("boom".into())));
    }

    #[test]
    fn decode_missing_data() {
        assert!(matches!(decode_characters(br#"{"data":{}}"#), Err(FetchError::Decode(_))));
        assert!(matches!(decode_characters(b"<html>"), Err(FetchError::Decode(_))));
    }
}
