use yew::prelude::*;

use super::theme_toggle::ThemeToggle;
use crate::content::{SectionId, OWNER_FIRST_NAME};
use crate::state::scroll::ScrollState;
use crate::state::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scroll = use_context::<ScrollState>().unwrap_or_default();
    let menu_open = use_state(|| false);

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let desktop_links = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(index, id)| {
            let active = scroll.is_active(*id);
            html! {
                <a
                    key={id.as_str()}
                    href={id.href()}
                    class={classes!("nav-link", active.then_some("is-active"))}
                    style={format!("animation-delay: {:.2}s;", 0.1 + index as f64 * 0.05)}
                    aria-current={active.then_some("location")}
                >
                    {id.label()}
                </a>
            }
        })
        .collect::<Html>();

    let mobile_menu = if *menu_open {
        let mobile_links = SectionId::ALL
            .iter()
            .map(|id| {
                html! {
                    <a
                        key={id.as_str()}
                        href={id.href()}
                        class={classes!("mobile-link", scroll.is_active(*id).then_some("is-active"))}
                        onclick={close_menu.clone()}
                    >
                        {id.label()}
                    </a>
                }
            })
            .collect::<Html>();

        html! {
            <div class="mobile-menu" id="mobile-menu">
                {mobile_links}
                <a class="hire-me mobile" href={SectionId::Contact.href()} onclick={close_menu.clone()}>
                    {"✦ Hire Me"}
                </a>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <nav class={classes!("navbar", scroll.scrolled_past_threshold.then_some("is-scrolled"))}>
            <div class="container navbar-row">
                <a class="logo" href="#home">
                    <span class="logo-mark">{&OWNER_FIRST_NAME[..1]}</span>
                    <span class="logo-word">{OWNER_FIRST_NAME}<span class="accent">{"."}</span></span>
                </a>

                <div class="nav-links">{desktop_links}</div>

                <div class="nav-actions">
                    <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                    <a class="hire-me" href={SectionId::Contact.href()}>{"✦ Hire Me"}</a>
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={(*menu_open).to_string()}
                        aria-controls="mobile-menu"
                        onclick={on_menu_toggle}
                    >
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {mobile_menu}
        </nav>
    }
}
