//! Retrieve characters from the remote API, using a blocking HTTP client
//!
//! The whole list is fetched on each call, nothing is cached here.

use reqwest::{Url, blocking::Client};
use thiserror::Error;
use charsearch_core::{
    CharacterRecord,
    FetchError,
    Suggestion,
    filter_and_highlight,
    query::{DEFAULT_ENDPOINT, QueryRequest, decode_characters},
};


/// Error when building a client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid endpoint URL")]
    InvalidUrl(#[from] url::ParseError),
}


/// Client of the character API
pub struct CharacterClient {
    client: Client,
    url: Url,
}

impl CharacterClient {
    /// Default API URL
    pub const DEFAULT_URL: &'static str = DEFAULT_ENDPOINT;

    /// Use default API endpoint
    pub fn new() -> Result<Self, ClientError> {
        Self::from_url(Self::DEFAULT_URL)
    }

    /// Use given GraphQL endpoint
    pub fn from_url(url: &str) -> Result<Self, ClientError> {
        let client = Client::new();
        let url = Url::parse(url)?;
        Ok(Self { client, url })
    }

    /// Endpoint used by the client
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch all characters, in API order
    pub fn fetch_all(&self) -> Result<Vec<CharacterRecord>, FetchError> {
        let response = self.client
            .post(self.url.clone())
            .json(&QueryRequest::characters())
            .send()
            .map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }
        let body = response.bytes().map_err(transport_error)?;
        decode_characters(&body)
    }

    /// Fetch all characters, then filter and highlight them
    pub fn search(&self, query: &str) -> Result<Vec<Suggestion>, FetchError> {
        let records = self.fetch_all()?;
        Ok(filter_and_highlight(&records, query))
    }
}


fn transport_error(e: reqwest::Error) -> FetchError {
    FetchError::Transport(e.to_string())
}
