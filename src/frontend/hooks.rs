use gloo_timers::callback::Interval;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::SectionId;
use crate::state::reveal::{root_margin, RevealFlag};
use crate::state::rotator::RoleRotator;
use crate::state::scroll::{ScrollState, SectionAnchor};
use crate::telemetry::{log_event, LogLevel};

type IntersectionCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
type ScrollListener = (Window, Closure<dyn FnMut()>);

/// Site config from the root context, or defaults when rendered outside the provider.
#[hook]
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Becomes `true` the first time `node` intersects the viewport shrunk by `margin_px`.
#[hook]
pub fn use_reveal(node: NodeRef, margin_px: u32) -> bool {
    let config = use_site_config();
    let flag = use_state_eq(RevealFlag::default);

    {
        let flag = flag.clone();
        use_effect_with(node, move |node| {
            let observation = node
                .cast::<Element>()
                .and_then(|element| observe_once(&element, margin_px, flag.clone(), config));

            if observation.is_none() {
                log_event(
                    &config,
                    LogLevel::Info,
                    "reveal_observer_unavailable",
                    serde_json::json!({ "margin_px": margin_px }),
                );
                flag.set(RevealFlag::revealed());
            }

            move || {
                if let Some((observer, _callback)) = observation {
                    observer.disconnect();
                }
            }
        });
    }

    flag.is_revealed()
}

fn observe_once(
    element: &Element,
    margin_px: u32,
    flag: UseStateHandle<RevealFlag>,
    config: SiteConfig,
) -> Option<(IntersectionObserver, IntersectionCallback)> {
    let element_id = element.id();
    let mut local = RevealFlag::default();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            if local.observe(intersecting) {
                log_event(
                    &config,
                    LogLevel::Debug,
                    "section_revealed",
                    serde_json::json!({ "id": element_id.as_str() }),
                );
                flag.set(local);
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&root_margin(margin_px));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    Some((observer, callback))
}

/// Subscribes to window scroll events and republishes the derived state when it changes.
#[hook]
pub fn use_scroll_state(config: SiteConfig) -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with(config, move |config| {
            let config = *config;
            let listener = attach_scroll_listener(config, state);

            move || {
                if let Some((win, closure)) = listener {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    (*state).clone()
}

fn attach_scroll_listener(
    config: SiteConfig,
    state: UseStateHandle<ScrollState>,
) -> Option<ScrollListener> {
    let win = window()?;
    let initial = read_scroll_state(&config);
    let mut last_active = initial.active_section;
    state.set(initial);

    let closure = Closure::<dyn FnMut()>::new(move || {
        let next = read_scroll_state(&config);

        if next.active_section != last_active {
            last_active = next.active_section;
            log_event(
                &config,
                LogLevel::Debug,
                "active_section_changed",
                serde_json::json!({
                    "section": next.active_section.map(SectionId::as_str),
                }),
            );
        }

        state.set(next);
    });

    win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .ok()?;

    Some((win, closure))
}

fn read_scroll_state(config: &SiteConfig) -> ScrollState {
    let Some(win) = window() else {
        return ScrollState::default();
    };

    let scroll_offset = win.scroll_y().unwrap_or(0.0);
    let anchors: Vec<SectionAnchor> = win
        .document()
        .map(|document| {
            SectionId::ALL
                .iter()
                .filter_map(|id| {
                    let element = document
                        .get_element_by_id(id.as_str())?
                        .dyn_into::<HtmlElement>()
                        .ok()?;
                    Some(SectionAnchor {
                        id: *id,
                        top: f64::from(element.offset_top()),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    ScrollState::derive(scroll_offset, &anchors, config)
}

/// Rotator over `len` entries, advanced every `interval_ms`. The interval is cancelled when
/// the component unmounts.
#[hook]
pub fn use_role_rotator(len: usize, interval_ms: u32) -> RoleRotator {
    let rotator = use_state_eq(|| RoleRotator::new(len));

    {
        let rotator = rotator.clone();
        use_effect_with((len, interval_ms), move |&(len, interval_ms)| {
            let mut local = RoleRotator::new(len);
            let interval = Interval::new(interval_ms, move || {
                local.advance();
                rotator.set(local);
            });

            move || drop(interval)
        });
    }

    *rotator
}
