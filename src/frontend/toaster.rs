use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use super::hooks::use_site_config;
use crate::state::toast::{Notice, Toasts, Tone};

pub enum ToastAction {
    Push(Notice),
    Dismiss(u64),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ToastAction::Push(notice) => {
                next.push(notice);
                true
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: UseReducerHandle<Toasts>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let config = use_site_config();
    let current_id = props.toasts.current_id();

    {
        let dispatcher = props.toasts.dispatcher();
        let duration_ms = config.toast_duration_ms;
        use_effect_with(current_id, move |current_id| {
            let timeout = current_id.map(|id| {
                Timeout::new(duration_ms, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
            });

            move || drop(timeout)
        });
    }

    let (Some(id), Some(notice)) = (current_id, props.toasts.current()) else {
        return html! {};
    };

    let on_close = {
        let dispatcher = props.toasts.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let tone_class = match notice.tone {
        Tone::Success => "toast-success",
        Tone::Error => "toast-error",
    };

    html! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <div key={id.to_string()} class={classes!("toast", tone_class)}>
                <div class="toast-copy">
                    <p class="toast-title">{notice.title}</p>
                    <p class="toast-description">{notice.description}</p>
                </div>
                <button class="toast-close" type="button" aria-label="Dismiss notification" onclick={on_close}>
                    {"×"}
                </button>
            </div>
        </div>
    }
}
