use yew::prelude::*;

use super::hooks::{use_reveal, use_site_config};
use super::reveal_classes;
use super::section_heading::SectionHeading;
use crate::content::{SectionId, ACHIEVEMENTS, EXPERIENCES};
use crate::state::reveal::{delay_style, stagger_delay};

#[function_component(Experience)]
pub fn experience() -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config.reveal_margin_px);

    let timeline = EXPERIENCES
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry_delay = stagger_delay(0.0, 0.2, index);
            let bullets = entry
                .bullets
                .iter()
                .enumerate()
                .map(|(bullet_index, bullet)| {
                    html! {
                        <li
                            class={reveal_classes("reveal-left", revealed)}
                            style={delay_style(stagger_delay(0.4, 0.1, bullet_index))}
                        >
                            <span class="accent" aria-hidden="true">{"▹"}</span>
                            {*bullet}
                        </li>
                    }
                })
                .collect::<Html>();

            html! {
                <div
                    key={entry.title}
                    class={classes!(reveal_classes("reveal-up", revealed), "timeline-entry")}
                    style={delay_style(entry_delay)}
                >
                    <span
                        class={classes!(reveal_classes("reveal-scale", revealed), "timeline-dot")}
                        style={delay_style(entry_delay + 0.3)}
                        aria-hidden="true"
                    ></span>
                    <div class="timeline-date">
                        <span class="accent mono">{format!("📅 {}", entry.period)}</span>
                    </div>
                    <div class="glass-card timeline-card">
                        <div class="timeline-card-header">
                            <div class="icon-tile" aria-hidden="true">{"💼"}</div>
                            <div>
                                <h3>{entry.title}</h3>
                                <p class="accent">{entry.company}</p>
                            </div>
                        </div>
                        <div class="timeline-meta muted">
                            <span>{format!("📅 {}", entry.period)}</span>
                            <span>{format!("📍 {}", entry.location)}</span>
                        </div>
                        <ul class="bullet-list">{bullets}</ul>
                        <div class="chip-row">
                            { for entry.tech_stack.iter().map(|tech| html! { <span key={*tech} class="chip">{*tech}</span> }) }
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let achievements = ACHIEVEMENTS
        .iter()
        .enumerate()
        .map(|(index, achievement)| {
            html! {
                <div
                    key={achievement.title}
                    class={classes!(reveal_classes("reveal-scale", revealed), "glass-card", "achievement-card")}
                    style={delay_style(stagger_delay(0.5, 0.1, index))}
                >
                    <span class="achievement-icon" aria-hidden="true">{achievement.icon}</span>
                    <h4>{achievement.title}</h4>
                    <p class="muted">{achievement.description}</p>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id={SectionId::Experience.as_str()} class="section" ref={node}>
            <div class="container narrow">
                <SectionHeading number={3} label="Experience" lead="Where I've" accent="Worked" revealed={revealed} />

                <div class="timeline">
                    <div class="timeline-line" aria-hidden="true"></div>
                    {timeline}
                </div>

                <div class={classes!(reveal_classes("reveal-up", revealed), "achievements")} style={delay_style(0.4)}>
                    <h3 class="centered">{"Achievements & "}<span class="accent">{"Recognition"}</span></h3>
                    <div class="achievement-grid">{achievements}</div>
                </div>
            </div>
        </section>
    }
}
