pub mod settings;
mod services;
mod components;
mod utils;

use std::rc::Rc;
use gloo_console::{debug, error};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use charsearch_core::{
    Command,
    FormKey,
    ListView,
    SearchEvent,
    SearchState,
};

use services::CharacterService;
use components::*;


pub enum AppAction {
    /// Set the runner used to perform commands, once mounted
    Attach(Rc<CommandRunner>),
    /// Apply a search event
    Search(SearchEvent),
}

#[derive(Clone, Default)]
pub struct AppState {
    search: SearchState,
    /// Not set until the app is mounted
    runner: Option<Rc<CommandRunner>>,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let mut this = (*self).clone();
        match action {
            AppAction::Attach(runner) => {
                this.runner = Some(runner);
            }

            AppAction::Search(event) => {
                debug!(describe_event(&event));
                let commands = this.search.apply(event);
                match &this.runner {
                    Some(runner) => commands.into_iter().for_each(|c| runner.run(c)),
                    None if !commands.is_empty() => {
                        error!(format!("commands dropped, app not mounted: {:?}", commands));
                    }
                    None => {}
                }
            }
        }
        this.into()
    }
}


/// Perform commands requested by the search state
pub struct CommandRunner {
    service: CharacterService,
    dispatcher: UseReducerDispatcher<AppState>,
    input_ref: NodeRef,
}

impl CommandRunner {
    fn run(&self, command: Command) {
        match command {
            Command::Fetch(request) => {
                let service = self.service.clone();
                let dispatcher = self.dispatcher.clone();
                yew::platform::spawn_local(async move {
                    let result = service.fetch_all().await;
                    if let Err(e) = &result {
                        error!(format!("failed to fetch characters: {}", e));
                    }
                    dispatcher.dispatch(AppAction::Search(SearchEvent::FetchResolved { request, result }));
                });
            }

            Command::FocusInput => {
                if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                    input.focus().ok();
                }
            }
        }
    }
}


/// Describe an event for logs, without dumping fetched records
fn describe_event(event: &SearchEvent) -> String {
    match event {
        SearchEvent::InputChanged(text) => format!("input changed: {:?}", text),
        SearchEvent::FetchResolved { request, result: Ok(records) } => {
            format!("fetch #{} resolved: {} characters", request, records.len())
        }
        SearchEvent::FetchResolved { request, result: Err(e) } => {
            format!("fetch #{} failed: {}", request, e)
        }
        SearchEvent::SuggestionPicked(id) => format!("suggestion picked: {}", id),
        SearchEvent::ClearPressed => "clear pressed".to_string(),
        SearchEvent::FormKey(key) => format!("form key: {:?}", key),
        SearchEvent::Refresh => "refresh".to_string(),
    }
}


#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);
    let input_ref = use_node_ref();

    use_effect_with((), {
        let dispatcher = state.dispatcher();
        let input_ref = input_ref.clone();
        move |_| {
            let runner = CommandRunner {
                service: CharacterService::default(),
                dispatcher: dispatcher.clone(),
                input_ref,
            };
            dispatcher.dispatch(AppAction::Attach(Rc::new(runner)));
        }
    });

    let dispatch = Callback::from({
        let dispatcher = state.dispatcher();
        move |event: SearchEvent| dispatcher.dispatch(AppAction::Search(event))
    });

    let callbacks = FormCallbacks {
        on_input: dispatch.reform(SearchEvent::InputChanged),
        on_pick: dispatch.reform(SearchEvent::SuggestionPicked),
        on_clear: dispatch.reform(|()| SearchEvent::ClearPressed),
        on_retry: dispatch.reform(|_: MouseEvent| SearchEvent::Refresh),
        on_form_key: dispatch.reform(SearchEvent::FormKey),
    };

    html_form(&state.search, input_ref, callbacks)
}


/// Callbacks of the search form
struct FormCallbacks {
    on_input: Callback<String>,
    on_pick: Callback<String>,
    on_clear: Callback<()>,
    on_retry: Callback<MouseEvent>,
    on_form_key: Callback<FormKey>,
}

/// Render the whole search form for the given state
fn html_form(search: &SearchState, input_ref: NodeRef, callbacks: FormCallbacks) -> Html {
    let FormCallbacks { on_input, on_pick, on_clear, on_retry, on_form_key } = callbacks;

    // Enter must not submit the form, Escape clears the input
    let onkeydown = Callback::from(move |event: KeyboardEvent| {
        if let Some(key) = FormKey::from_key(&event.key()) {
            event.prevent_default();
            on_form_key.emit(key);
        }
    });
    let onsubmit = Callback::from(|event: SubmitEvent| event.prevent_default());

    html! {
        <form class="form" {onkeydown} {onsubmit}>
            <div class="formgroup">
                <label for={settings::INPUT_ID} class="label">
                    { settings::LABEL }
                </label>
                <div class="input-wrapper">
                    <SearchInput value={search.input().to_string()} {input_ref} {on_input} />
                    { html_suggestions(search, &on_pick, on_retry) }
                    if search.clear_visible() {
                        <ClearButton {on_clear} />
                    }
                </div>
            </div>
        </form>
    }
}


/// Return the suggestion list, or the error message
fn html_suggestions(search: &SearchState, on_pick: &Callback<String>, on_retry: Callback<MouseEvent>) -> Html {
    let non_selectable = |text: &str| html! {
        <ul class="list">
            <li class={classes!("option", "non-selectable")}>{ text.to_string() }</li>
        </ul>
    };

    match search.list_view() {
        ListView::Hidden => html! {},
        ListView::Loading => non_selectable(settings::LOADING_TEXT),
        ListView::NoOptions => non_selectable(settings::NO_OPTIONS_TEXT),
        ListView::Items(suggestions) => html! {
            <ul class="list">
            { for suggestions.iter().map(|suggestion| html! {
                  <SuggestionItem
                      key={suggestion.id.clone()}
                      suggestion={suggestion.clone()}
                      on_pick={on_pick.clone()} />
              })
            }
            </ul>
        },
        ListView::Error => {
            let [headline, hint] = settings::ERROR_LINES;
            html! {
                <p class="error">
                    { headline }
                    <br />
                    { hint }
                    {" "}
                    <button type="button" class="retry" onclick={on_retry}>
                        { settings::RETRY_TEXT }
                    </button>
                </p>
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use charsearch_core::{CharacterRecord, FetchError};

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        events: Vec<SearchEvent>,
    }

    /// Render the form after applying events to a fresh state
    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let mut search = SearchState::new();
        for event in &props.events {
            search.apply(event.clone());
        }
        let callbacks = FormCallbacks {
            on_input: Callback::noop(),
            on_pick: Callback::noop(),
            on_clear: Callback::noop(),
            on_retry: Callback::noop(),
            on_form_key: Callback::noop(),
        };
        html_form(&search, NodeRef::default(), callbacks)
    }

    async fn render(events: Vec<SearchEvent>) -> String {
        yew::LocalServerRenderer::<Harness>::with_props(HarnessProps { events })
            .hydratable(false)
            .render()
            .await
    }

    fn fetched(input: &str, result: Result<Vec<CharacterRecord>, FetchError>) -> Vec<SearchEvent> {
        vec![
            SearchEvent::InputChanged(input.into()),
            SearchEvent::FetchResolved { request: 1, result },
        ]
    }

    fn characters() -> Vec<CharacterRecord> {
        vec![
            CharacterRecord::new("1", "Rick Sanchez"),
            CharacterRecord::new("2", "Morty Smith"),
        ]
    }

    #[tokio::test]
    async fn view_hidden_when_empty() {
        let html = render(vec![]).await;
        assert!(html.contains(settings::LABEL));
        assert!(!html.contains(r#"class="list""#));
        assert!(!html.contains(r#"class="error""#));
        assert!(!html.contains(r#"class="clear""#));
    }

    #[tokio::test]
    async fn view_loading() {
        let html = render(vec![SearchEvent::InputChanged("ri".into())]).await;
        assert!(html.contains(settings::LOADING_TEXT));
        assert!(html.contains("non-selectable"));
        assert!(!html.contains(r#"class="clear""#));
    }

    #[tokio::test]
    async fn view_highlighted_items() {
        let html = render(fetched("ri", Ok(characters()))).await;
        assert!(html.contains("<strong>Ri</strong>ck Sanchez"));
        assert!(!html.contains("Morty Smith"));
        assert!(!html.contains(settings::NO_OPTIONS_TEXT));
    }

    #[tokio::test]
    async fn view_escapes_names() {
        let records = vec![CharacterRecord::new("1", "<img src=x onerror=y>Rick")];
        let html = render(fetched("rick", Ok(records))).await;
        assert!(html.contains("&lt;img"));
        assert!(!html.contains("<img"));
        assert!(html.contains("<strong>Rick</strong>"));
    }

    #[tokio::test]
    async fn view_no_options() {
        let html = render(fetched("zzz", Ok(characters()))).await;
        assert!(html.contains(settings::NO_OPTIONS_TEXT));
        assert!(!html.contains("<strong>"));
    }

    #[tokio::test]
    async fn view_error_replaces_list() {
        let html = render(fetched("ri", Err(FetchError::Http(500)))).await;
        assert!(html.contains(r#"class="error""#));
        assert!(html.contains("technical issues"));
        assert!(html.contains(settings::RETRY_TEXT));
        assert!(!html.contains(r#"class="list""#));
    }

    #[tokio::test]
    async fn view_clear_after_pick() {
        let mut events = fetched("ri", Ok(characters()));
        let html = render(events.clone()).await;
        assert!(!html.contains(r#"class="clear""#));

        events.push(SearchEvent::SuggestionPicked("1".into()));
        let html = render(events).await;
        assert!(html.contains(r#"class="clear""#));
        assert!(html.contains(r#"value="Rick Sanchez""#));
        assert!(!html.contains(r#"class="list""#));
    }

    #[test]
    fn describe_events() {
        assert_eq!(describe_event(&SearchEvent::InputChanged("ri".into())), "input changed: \"ri\"");
        let event = SearchEvent::FetchResolved {
            request: 3,
            result: Ok(vec![CharacterRecord::new("1", "Rick Sanchez")]),
        };
        assert_eq!(describe_event(&event), "fetch #3 resolved: 1 characters");
        let event = SearchEvent::FetchResolved { request: 4, result: Err(FetchError::Http(500)) };
        assert_eq!(describe_event(&event), "fetch #4 failed: HTTP error (500)");
        assert_eq!(describe_event(&SearchEvent::FormKey(FormKey::Escape)), "form key: Escape");
    }
}
