use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::content::SectionId;
use crate::state::scroll::ScrollState;

fn scroll_window_to_top() {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let scroll = use_context::<ScrollState>().unwrap_or_default();

    if !scroll.show_back_to_top {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_window_to_top());

    html! {
        <div class="floating-actions">
            <a class="floating-button accent" href={SectionId::Contact.href()} aria-label="Jump to contact">
                {"💬"}
            </a>
            <button class="floating-button primary" type="button" aria-label="Back to top" onclick={onclick}>
                {"↑"}
            </button>
        </div>
    }
}
