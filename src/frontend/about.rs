use yew::prelude::*;

use super::hooks::{use_reveal, use_site_config};
use super::reveal_classes;
use super::section_heading::SectionHeading;
use crate::content::{SectionId, ABOUT_PARAGRAPHS, HIGHLIGHTS, OWNER_FIRST_NAME, OWNER_LAST_NAME};
use crate::state::reveal::{delay_style, stagger_delay};

#[function_component(About)]
pub fn about() -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config.reveal_margin_px);

    let highlights = HIGHLIGHTS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            html! {
                <div
                    key={item.title}
                    class={classes!(reveal_classes("reveal-up", revealed), "glass-card", "highlight-card")}
                    style={delay_style(stagger_delay(0.5, 0.1, index))}
                >
                    <div class="highlight-icon" aria-hidden="true">{item.icon}</div>
                    <div>
                        <h3>{item.title}</h3>
                        <p class="muted">{item.description}</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id={SectionId::About.as_str()} class="section" ref={node}>
            <div class="container">
                <SectionHeading number={1} label="About" lead="Get to know" accent="me" revealed={revealed} />

                <div class="about-grid">
                    <div class={reveal_classes("reveal-left", revealed)} style={delay_style(0.2)}>
                        <p class="lede">
                            {"Hey there! I'm "}
                            <span class="accent">{format!("{OWNER_FIRST_NAME} {OWNER_LAST_NAME}")}</span>
                            {", a passionate Full Stack Developer with a love for building products that make a \
                              difference. Currently pursuing my MCA at BIT Mesra, I spend my time turning ideas \
                              into reality through code."}
                        </p>
                        { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p class="lede">{*paragraph}</p> }) }
                    </div>

                    <div class={classes!(reveal_classes("reveal-right", revealed), "highlight-list")} style={delay_style(0.4)}>
                        {highlights}
                    </div>
                </div>
            </div>
        </section>
    }
}
