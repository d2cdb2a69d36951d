pub use searchinput::SearchInput;
pub use clearbutton::ClearButton;
pub use suggestion::SuggestionItem;

mod searchinput {
    use yew::prelude::*;
    use crate::{settings, utils::input_value};

    #[derive(Clone, PartialEq, Properties)]
    pub struct Props {
        pub value: String,
        pub input_ref: NodeRef,
        /// Called with the raw input value
        pub on_input: Callback<String>,
    }

    #[function_component(SearchInput)]
    pub fn search_input(props: &Props) -> Html {
        let Props { value, input_ref, on_input } = props.clone();
        let oninput = on_input.reform(|e: InputEvent| input_value(&e));

        html! {
            <input
                ref={input_ref}
                id={settings::INPUT_ID}
                type="search"
                autocomplete="off"
                placeholder={settings::PLACEHOLDER}
                class="input"
                {value}
                {oninput} />
        }
    }
}

mod clearbutton {
    use yew::prelude::*;
    use crate::{settings, utils::on_enter_key};

    #[derive(Clone, PartialEq, Properties)]
    pub struct Props {
        pub on_clear: Callback<()>,
    }

    #[function_component(ClearButton)]
    pub fn clear_button(props: &Props) -> Html {
        // Don't let the browser reset the form, the input is driven by the state
        let onclick = props.on_clear.reform(|e: MouseEvent| e.prevent_default());
        let onkeydown = on_enter_key(props.on_clear.clone());

        html! {
            <button type="reset" class="clear" {onclick} {onkeydown}>
                { settings::CLEAR_TEXT }
            </button>
        }
    }
}

mod suggestion;
