use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::hooks::{use_reveal, use_site_config};
use super::reveal_classes;
use super::section_heading::SectionHeading;
use crate::content::{
    SectionId, LINKEDIN_URL, OWNER_EMAIL, OWNER_HANDLE, OWNER_LOCATION, SOCIAL_LINKS,
};
use crate::state::contact::{deliver, ContactForm, Field};
use crate::state::reveal::delay_style;
use crate::state::toast::Notice;
use crate::telemetry::{log_event, LogLevel};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub on_notice: Callback<Notice>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config.reveal_margin_px);
    // Held outside Yew state so back-to-back submits see the in-flight guard immediately.
    let form = use_mut_ref(ContactForm::default);
    let rerender = use_force_update();

    let edit = |field: Field| {
        let form = form.clone();
        let rerender = rerender.clone();
        move |value: String| {
            form.borrow_mut().set_field(field, value);
            rerender.force_update();
        }
    };

    let on_name = {
        let apply = edit(Field::Name);
        Callback::from(move |event: InputEvent| {
            apply(event.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let on_email = {
        let apply = edit(Field::Email);
        Callback::from(move |event: InputEvent| {
            apply(event.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let on_message = {
        let apply = edit(Field::Message);
        Callback::from(move |event: InputEvent| {
            apply(event.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };

    let onsubmit = {
        let form = form.clone();
        let rerender = rerender.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let started = form.borrow_mut().begin_submit();
            if let Err(error) = started {
                log_event(
                    &config,
                    LogLevel::Warn,
                    "contact_submit_rejected",
                    serde_json::json!({ "reason": error.as_str() }),
                );
                if let Some(notice) = error.notice() {
                    on_notice.emit(notice);
                }
                return;
            }

            log_event(
                &config,
                LogLevel::Info,
                "contact_submit_started",
                serde_json::json!({ "delay_ms": config.submit_delay_ms }),
            );
            rerender.force_update();

            let form = form.clone();
            let rerender = rerender.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                let notice = deliver(form, TimeoutFuture::new(config.submit_delay_ms)).await;
                log_event(&config, LogLevel::Info, "contact_submit_completed", serde_json::json!({}));
                on_notice.emit(notice);
                rerender.force_update();
            });
        })
    };

    let (name, email, message, submitting) = {
        let form = form.borrow();
        let fields = form.fields();
        (
            fields.get(Field::Name).to_owned(),
            fields.get(Field::Email).to_owned(),
            fields.get(Field::Message).to_owned(),
            form.is_submitting(),
        )
    };

    html! {
        <section id={SectionId::Contact.as_str()} class="section" ref={node}>
            <div class="container">
                <SectionHeading
                    number={5}
                    label="Contact"
                    lead="Let's"
                    accent="Connect"
                    subtitle={AttrValue::from("I'm currently looking for new opportunities. Whether you have a question or just want to say hi, my inbox is always open!")}
                    revealed={revealed}
                />

                <div class="contact-grid">
                    <div class={classes!(reveal_classes("reveal-left", revealed), "contact-info")} style={delay_style(0.2)}>
                        <div>
                            <h3>{"Get in Touch"}</h3>
                            <p class="muted">
                                {"Feel free to reach out if you're looking for a developer, have a question, or just want to connect."}
                            </p>
                        </div>

                        <dl class="contact-facts">
                            <div class="contact-fact">
                                <span class="icon-tile" aria-hidden="true">{"📍"}</span>
                                <div><dt>{"Location"}</dt><dd class="muted">{OWNER_LOCATION}</dd></div>
                            </div>
                            <div class="contact-fact">
                                <span class="icon-tile" aria-hidden="true">{"✉"}</span>
                                <div><dt>{"Email"}</dt><dd class="muted">{OWNER_EMAIL}</dd></div>
                            </div>
                        </dl>

                        <div>
                            <h4>{"Follow Me"}</h4>
                            <div class="social-row">
                                { for SOCIAL_LINKS.iter().map(|link| html! {
                                    <a
                                        key={link.name}
                                        class="social-link"
                                        href={link.href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label={link.name}
                                    >
                                        {link.glyph}
                                    </a>
                                }) }
                            </div>
                        </div>

                        <a class="glass-card linkedin-card" href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">
                            <span class="icon-tile" aria-hidden="true">{"in"}</span>
                            <div>
                                <p>{"Connect on LinkedIn"}</p>
                                <p class="accent">{OWNER_HANDLE}</p>
                            </div>
                        </a>
                    </div>

                    <div class={reveal_classes("reveal-right", revealed)} style={delay_style(0.4)}>
                        <form class="glass-card contact-form" onsubmit={onsubmit}>
                            <label for="name">{"Name"}</label>
                            <input id="name" type="text" placeholder="Your name" value={name} oninput={on_name} />

                            <label for="email">{"Email"}</label>
                            <input id="email" type="email" placeholder="your@email.com" value={email} oninput={on_email} />

                            <label for="message">{"Message"}</label>
                            <textarea id="message" rows="5" placeholder="Your message..." value={message} oninput={on_message} />

                            <button class="button primary wide" type="submit" disabled={submitting}>
                                if submitting {
                                    <span class="pulse">{"Sending..."}</span>
                                } else {
                                    {"Send Message ➤"}
                                }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
