use std::rc::Rc;
use crate::{
    CharacterRecord,
    FetchError,
    Suggestion,
    filter_and_highlight,
};


/// Identify a fetch request, to discard stale responses
pub type RequestId = u64;

/// Status of the character list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing requested, nothing displayed
    #[default]
    Idle,
    /// Waiting for the character list
    Loading,
    /// Suggestions are up to date
    Success,
    /// Last fetch failed
    Error,
}

/// Keys handled at the form level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Enter,
    Escape,
}

impl FormKey {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Events consumed by [SearchState::apply()]
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Input text changed, value is not trimmed yet
    InputChanged(String),
    /// A fetch completed
    FetchResolved {
        request: RequestId,
        result: Result<Vec<CharacterRecord>, FetchError>,
    },
    /// A suggestion has been clicked or activated with Enter, identified by its record ID
    SuggestionPicked(String),
    /// Clear control activated
    ClearPressed,
    /// Key pressed anywhere in the form
    FormKey(FormKey),
    /// Drop the cached list, fetch it again if needed
    Refresh,
}

/// Side effects requested by a transition, to be performed by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fetch the character list, then send back [SearchEvent::FetchResolved] with the same ID
    Fetch(RequestId),
    /// Give focus back to the text input
    FocusInput,
}

/// What the suggestion area displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Hidden,
    Loading,
    NoOptions,
    Items(&'a [Suggestion]),
    Error,
}


/// Interaction state of the search widget
///
/// All changes go through [SearchState::apply()]. The character list is fetched once, then
/// cached: following keystrokes only run the filter again. A new fetch is issued when the cache is
/// empty (first search, after an error, after a refresh).
#[derive(Debug, Default, Clone)]
pub struct SearchState {
    /// Input text, always left-trimmed
    input: String,
    status: FetchStatus,
    /// Displayed only on success, left untouched on error
    suggestions: Vec<Suggestion>,
    clear_visible: bool,
    /// Cached character list
    records: Option<Rc<[CharacterRecord]>>,
    /// Last issued request ID
    last_request: RequestId,
    /// Request whose response is awaited, if any
    pending: Option<RequestId>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Current suggestions, possibly stale if status is not `Success`
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn clear_visible(&self) -> bool {
        self.clear_visible
    }

    /// Cached character list, if fetched
    pub fn records(&self) -> Option<&[CharacterRecord]> {
        self.records.as_deref()
    }

    /// Request whose response is awaited, if any
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    /// Return what the suggestion area should display
    pub fn list_view(&self) -> ListView<'_> {
        match self.status {
            FetchStatus::Idle => ListView::Hidden,
            FetchStatus::Loading => ListView::Loading,
            FetchStatus::Success if self.suggestions.is_empty() => ListView::NoOptions,
            FetchStatus::Success => ListView::Items(&self.suggestions),
            FetchStatus::Error => ListView::Error,
        }
    }

    /// Apply an event, return the commands to perform
    pub fn apply(&mut self, event: SearchEvent) -> Vec<Command> {
        match event {
            SearchEvent::InputChanged(text) => self.on_input(&text),
            SearchEvent::FetchResolved { request, result } => {
                self.on_fetch_resolved(request, result);
                vec![]
            }
            SearchEvent::SuggestionPicked(id) => self.on_pick(&id),
            SearchEvent::ClearPressed => self.on_clear(),
            SearchEvent::FormKey(FormKey::Enter) => vec![],
            SearchEvent::FormKey(FormKey::Escape) => self.on_clear(),
            SearchEvent::Refresh => self.on_refresh(),
        }
    }

    fn on_input(&mut self, text: &str) -> Vec<Command> {
        self.input = text.trim_start().to_string();
        if self.input.is_empty() {
            self.reset_list();
            self.clear_visible = false;
            return vec![];
        }

        if let Some(records) = &self.records {
            self.suggestions = filter_and_highlight(records, &self.input);
            self.status = FetchStatus::Success;
            vec![]
        } else if self.pending.is_some() {
            // Response will be filtered against the input at that time
            vec![]
        } else {
            vec![self.issue_request()]
        }
    }

    fn on_fetch_resolved(&mut self, request: RequestId, result: Result<Vec<CharacterRecord>, FetchError>) {
        if self.pending != Some(request) {
            return;  // stale
        }
        self.pending = None;
        match result {
            Ok(records) => {
                let records: Rc<[CharacterRecord]> = records.into();
                self.suggestions = filter_and_highlight(&records, &self.input);
                self.records = Some(records);
                self.status = FetchStatus::Success;
            }
            Err(_) => {
                self.status = FetchStatus::Error;
            }
        }
    }

    fn on_pick(&mut self, id: &str) -> Vec<Command> {
        if self.status != FetchStatus::Success {
            return vec![];
        }
        let Some(suggestion) = self.suggestions.iter().find(|s| s.id == id) else {
            return vec![];
        };
        self.input = suggestion.text().to_string();
        self.clear_visible = true;
        self.reset_list();
        vec![Command::FocusInput]
    }

    fn on_clear(&mut self) -> Vec<Command> {
        self.input.clear();
        self.reset_list();
        self.clear_visible = false;
        vec![Command::FocusInput]
    }

    fn on_refresh(&mut self) -> Vec<Command> {
        self.records = None;
        self.pending = None;
        if self.input.is_empty() {
            vec![]
        } else {
            vec![self.issue_request()]
        }
    }

    /// Clear suggestions, go back to idle, ignore any in-flight response
    fn reset_list(&mut self) {
        self.suggestions.clear();
        self.status = FetchStatus::Idle;
        self.pending = None;
    }

    fn issue_request(&mut self) -> Command {
        self.last_request += 1;
        self.pending = Some(self.last_request);
        self.status = FetchStatus::Loading;
        Command::Fetch(self.last_request)
    }
}
