use gloo_net::http::Request;
use charsearch_core::{
    CharacterRecord,
    FetchError,
    Result,
    query::{QueryRequest, decode_characters},
};
use crate::settings;


/// Fetch the character list from the API
///
/// The whole list is requested on each call. Caching is left to the search state.
#[derive(Clone)]
pub struct CharacterService {
    url: String,
}

impl Default for CharacterService {
    fn default() -> Self {
        Self { url: settings::API_URL.to_string() }
    }
}

impl CharacterService {
    /// Fetch all characters
    pub async fn fetch_all(&self) -> Result<Vec<CharacterRecord>> {
        let response = Request::post(&self.url)
            .json(&QueryRequest::characters())
            .map_err(transport_error)?
            .send().await
            .map_err(transport_error)?;
        if !response.ok() {
            return Err(FetchError::Http(response.status()));
        }
        let data = response.binary().await.map_err(transport_error)?;
        decode_characters(&data)
    }
}


fn transport_error(e: gloo_net::Error) -> FetchError {
    FetchError::Transport(e.to_string())
}
