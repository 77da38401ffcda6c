use yew::prelude::*;

use crate::utils::window::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct ScrollTopProps {
    pub visible: bool,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());
    html! {
        <button
            type="button"
            class={classes!("scroll-top", props.visible.then_some("visible"))}
            aria-label="Retour en haut"
            onclick={onclick}
        >
            <i class="fas fa-chevron-up"></i>
        </button>
    }
}
