mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod hooks;
mod navbar;
mod projects;
mod scroll_to_top;
mod section_heading;
mod skills;
mod theme_toggle;
mod toaster;

use web_sys::{window, Element};
use yew::prelude::*;

use crate::config::{SiteConfig, MOUNT_POINT_ID};
use crate::state::scroll::ScrollState;
use crate::state::theme::Theme;
use crate::state::toast::{Notice, Toasts};
use crate::telemetry::{log_event, LogLevel};

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use hooks::use_scroll_state;
use navbar::Navbar;
use projects::Projects;
use scroll_to_top::ScrollToTop;
use skills::Skills;
use theme_toggle::{apply_theme, apply_theme_with_transition};
use toaster::{ToastAction, Toaster};

/// Entrance-animation classes: `motion` picks the hidden pose, `is-revealed` plays it.
pub(crate) fn reveal_classes(motion: &'static str, revealed: bool) -> Classes {
    classes!("reveal", motion, revealed.then_some("is-revealed"))
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config;
    let theme = use_state(Theme::default);
    let scroll = use_scroll_state(config);
    let toasts = use_reducer(Toasts::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            log_event(
                &config,
                LogLevel::Info,
                "app_mounted",
                serde_json::json!({ "theme": current.as_str() }),
            );
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = (*theme).toggled();
            apply_theme_with_transition(next);
            log_event(
                &config,
                LogLevel::Info,
                "theme_changed",
                serde_json::json!({ "theme": next.as_str() }),
            );
            theme.set(next);
        })
    };

    let on_notice = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |notice: Notice| dispatcher.dispatch(ToastAction::Push(notice)))
    };

    html! {
        <ContextProvider<SiteConfig> context={config}>
            <ContextProvider<ScrollState> context={scroll}>
                <a class="skip-link" href="#content">{"Skip to main content"}</a>
                <Navbar theme={*theme} on_toggle_theme={on_toggle_theme} />
                <main id="content" class="page">
                    <Hero />
                    <About />
                    <Skills />
                    <Experience />
                    <Projects />
                    <Contact on_notice={on_notice} />
                </main>
                <Footer />
                <ScrollToTop />
                <Toaster toasts={toasts} />
            </ContextProvider<ScrollState>>
        </ContextProvider<SiteConfig>>
    }
}

pub fn run() {
    let root: Element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
        .expect("missing #app mount point");
    let config = SiteConfig::from_mount_point(&root);

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
