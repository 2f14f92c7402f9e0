use yew::prelude::*;

use super::hooks::{use_reveal, use_site_config};
use super::reveal_classes;
use super::section_heading::SectionHeading;
use crate::content::{Project, SectionId, PROJECTS};
use crate::state::gallery::{tech_preview, ProjectSelection, CARD_TECH_LIMIT};
use crate::state::reveal::{delay_style, stagger_delay};
use crate::telemetry::{log_event, LogLevel};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    index: usize,
    on_view_details: Callback<&'static Project>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), 0);
    let project = props.project;
    let (shown_tech, hidden_tech) = tech_preview(project.tech_stack, CARD_TECH_LIMIT);

    let onclick = {
        let on_view_details = props.on_view_details.clone();
        Callback::from(move |_: MouseEvent| on_view_details.emit(project))
    };

    html! {
        <div
            ref={node}
            class={classes!(reveal_classes("reveal-up", revealed), "project-card-shell")}
            style={delay_style(stagger_delay(0.0, 0.2, props.index))}
        >
            <div class={classes!("project-card-glow", project.accent)} aria-hidden="true"></div>
            <article class="glass-card project-card">
                <div class="project-card-media">
                    <span class="project-emoji" aria-hidden="true">{project.emoji}</span>
                    <div class="project-card-overlay">
                        <a class="round-button primary" href={project.live_url} aria-label={format!("{} live demo", project.title)}>
                            {"↗"}
                        </a>
                        <a class="round-button secondary" href={project.code_url} aria-label={format!("{} source code", project.title)}>
                            {"</>"}
                        </a>
                    </div>
                </div>
                <div class="project-card-body">
                    <h3>{project.title}</h3>
                    <p class="muted clamp-2">{project.description}</p>
                    <div class="chip-row">
                        { for shown_tech.iter().map(|tech| html! { <span key={*tech} class="chip small">{*tech}</span> }) }
                        if hidden_tech > 0 {
                            <span class="chip small overflow">{format!("+{hidden_tech}")}</span>
                        }
                    </div>
                    <button class="text-button" type="button" onclick={onclick}>
                        {"View Details ›"}
                    </button>
                </div>
            </article>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: &'static Project,
    on_close: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div
                class="glass-card modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-modal-title"
                onclick={keep_open}
            >
                <div class="modal-header">
                    <div class="modal-title-row">
                        <span class="modal-emoji" aria-hidden="true">{project.emoji}</span>
                        <div>
                            <h3 id="project-modal-title">{project.title}</h3>
                            <div class="modal-links">
                                <a class="accent" href={project.live_url}>{"↗ Live Demo"}</a>
                                <a class="muted" href={project.code_url}>{"</> GitHub"}</a>
                            </div>
                        </div>
                    </div>
                    <button class="icon-button" type="button" aria-label="Close project details" onclick={close}>
                        {"✕"}
                    </button>
                </div>

                <p class="muted">{project.long_description}</p>

                <div class="modal-block">
                    <h4>{"Key Features"}</h4>
                    <ul class="bullet-list">
                        { for project.features.iter().map(|feature| html! {
                            <li key={*feature}><span class="accent" aria-hidden="true">{"▹"}</span>{*feature}</li>
                        }) }
                    </ul>
                </div>

                <div class="modal-block">
                    <h4>{"Tech Stack"}</h4>
                    <div class="chip-row">
                        { for project.tech_stack.iter().map(|tech| html! { <span key={*tech} class="chip">{*tech}</span> }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config.reveal_margin_px);
    let selection = use_state_eq(ProjectSelection::default);

    let on_view_details = {
        let selection = selection.clone();
        Callback::from(move |project: &'static Project| {
            let mut next = *selection;
            next.select(project);
            log_event(
                &config,
                LogLevel::Info,
                "project_selected",
                serde_json::json!({ "title": project.title }),
            );
            selection.set(next);
        })
    };

    let on_close = {
        let selection = selection.clone();
        Callback::from(move |_: ()| {
            let mut next = *selection;
            if let Some(project) = next.selected() {
                log_event(
                    &config,
                    LogLevel::Info,
                    "project_dismissed",
                    serde_json::json!({ "title": project.title }),
                );
            }
            next.dismiss();
            selection.set(next);
        })
    };

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            html! {
                <ProjectCard
                    key={project.title}
                    project={project}
                    index={index}
                    on_view_details={on_view_details.clone()}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section id={SectionId::Projects.as_str()} class="section section-muted" ref={node}>
            <div class="container">
                <SectionHeading
                    number={4}
                    label="Projects"
                    lead="What I've"
                    accent="Built"
                    subtitle={AttrValue::from("A selection of projects that showcase my skills in building full-stack applications")}
                    revealed={revealed}
                />
                <div class="project-grid">{cards}</div>

                if let Some(project) = selection.selected() {
                    <ProjectModal project={project} on_close={on_close} />
                }
            </div>
        </section>
    }
}
