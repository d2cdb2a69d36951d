use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Call `f` when Enter is pressed, ignore other keys
pub fn on_enter_key(f: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |event: KeyboardEvent| {
        if event.key() == "Enter" {
            f.emit(());
        }
    })
}

/// Return the value of the input targeted by an event
pub fn input_value(event: &InputEvent) -> String {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.value()
}
