use yew::prelude::*;

use super::reveal_classes;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub number: u8,
    pub label: AttrValue,
    pub lead: AttrValue,
    pub accent: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub revealed: bool,
}

/// "01. About" kicker plus a two-tone title, sliding up once its section is revealed.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class={classes!(reveal_classes("reveal-up", props.revealed), "section-heading")}>
            <span class="kicker">{format!("{:02}. {}", props.number, props.label)}</span>
            <h2>{props.lead.clone()}{" "}<span class="accent">{props.accent.clone()}</span></h2>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="section-subtitle">{subtitle}</p>
            }
        </div>
    }
}
