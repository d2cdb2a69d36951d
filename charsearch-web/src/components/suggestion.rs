use yew::prelude::*;
use charsearch_core::{Segment, Suggestion};
use crate::utils::on_enter_key;


#[derive(Properties, PartialEq)]
pub struct Props {
    pub suggestion: Suggestion,
    /// Called with the ID of the picked suggestion
    pub on_pick: Callback<String>,
}


#[function_component(SuggestionItem)]
pub fn suggestion_item(props: &Props) -> Html {
    let pick = {
        let id = props.suggestion.id.clone();
        props.on_pick.reform(move |()| id.clone())
    };
    let onclick = pick.reform(|_: MouseEvent| ());
    let onkeydown = on_enter_key(pick);

    html! {
        <li class="option" tabindex="0" {onclick} {onkeydown}>
            { for props.suggestion.segments().map(view_segment) }
        </li>
    }
}


/// Render a segment as text, matched ones in bold
fn view_segment(segment: Segment) -> Html {
    let text = segment.text.to_string();
    if segment.is_match {
        html! { <strong>{ text }</strong> }
    } else {
        html! { { text } }
    }
}
