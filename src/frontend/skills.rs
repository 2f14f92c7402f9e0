use yew::prelude::*;

use super::hooks::{use_reveal, use_site_config};
use super::reveal_classes;
use super::section_heading::SectionHeading;
use crate::content::{SectionId, Skill, SKILL_CATEGORIES};
use crate::state::reveal::{delay_style, stagger_delay};

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    skill: &'static Skill,
    delay: f64,
}

#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), 0);
    let width = if revealed { props.skill.level } else { 0 };

    html! {
        <div
            ref={node}
            class={classes!(reveal_classes("reveal-left", revealed), "skill-bar")}
            style={delay_style(props.delay)}
        >
            <div class="skill-bar-label">
                <span class="skill-name">{props.skill.name}</span>
                <span class="skill-level">{format!("{}%", props.skill.level)}</span>
            </div>
            <div
                class="skill-track"
                role="progressbar"
                aria-label={props.skill.name}
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={props.skill.level.to_string()}
            >
                <div
                    class="skill-fill"
                    style={format!("width: {width}%; transition-delay: {:.2}s;", props.delay + 0.2)}
                ></div>
            </div>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config.reveal_margin_px);

    let categories = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(category_index, category)| {
            let bars = category
                .skills
                .iter()
                .enumerate()
                .map(|(skill_index, skill)| {
                    let delay = stagger_delay(0.1 * category_index as f64, 0.05, skill_index);
                    html! { <SkillBar key={skill.name} skill={skill} delay={delay} /> }
                })
                .collect::<Html>();

            html! {
                <div
                    key={category.title}
                    class={classes!(reveal_classes("reveal-up", revealed), "glass-card", "skill-card")}
                    style={delay_style(stagger_delay(0.0, 0.1, category_index))}
                >
                    <h3 class="accent">{category.title}</h3>
                    <div class="skill-list">{bars}</div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id={SectionId::Skills.as_str()} class="section section-muted" ref={node}>
            <div class="container">
                <SectionHeading
                    number={2}
                    label="Skills"
                    lead="Technical"
                    accent="Expertise"
                    subtitle={AttrValue::from("A comprehensive toolkit built through hands-on projects and continuous learning")}
                    revealed={revealed}
                />
                <div class="skill-grid">{categories}</div>
            </div>
        </section>
    }
}
