/// Endpoint of the character API
pub const API_URL: &str = charsearch_core::query::DEFAULT_ENDPOINT;

/// HTML ID of the search input
pub const INPUT_ID: &str = "auto_complete_input";

pub const LABEL: &str = "Rick and Morty Characters";
pub const PLACEHOLDER: &str = "Search for a character";
pub const LOADING_TEXT: &str = "Loading...";
pub const NO_OPTIONS_TEXT: &str = "No options";
pub const CLEAR_TEXT: &str = "Clear";
pub const RETRY_TEXT: &str = "Try again";

/// Error message, one item per line
pub const ERROR_LINES: [&str; 2] = [
    "We`re experiencing technical issues at the moment.",
    "Please try again or contact support.",
];
