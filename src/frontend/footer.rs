use yew::prelude::*;

use crate::content::{OWNER_FIRST_NAME, OWNER_LAST_NAME};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="container footer-row">
                <p class="muted">
                    {"Built with "}<span class="heart" aria-label="love">{"♥"}</span>{" by "}
                    <span class="accent">{format!("{OWNER_FIRST_NAME} {OWNER_LAST_NAME}")}</span>
                </p>
                <p class="muted">{format!("© {year} All rights reserved.")}</p>
            </div>
        </footer>
    }
}
