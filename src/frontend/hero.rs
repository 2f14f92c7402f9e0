use yew::prelude::*;

use super::hooks::{use_role_rotator, use_site_config};
use crate::content::{
    SectionId, GITHUB_URL, LINKEDIN_URL, OWNER_FIRST_NAME, OWNER_LAST_NAME, PROFILE_PHOTO_PATH,
    RESUME_PATH, ROLES,
};

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_site_config();
    let rotator = use_role_rotator(ROLES.len(), config.role_interval_ms);
    let full_name = format!("{OWNER_FIRST_NAME} {OWNER_LAST_NAME}");

    html! {
        <section id="home" class="hero">
            <div class="hero-glow hero-glow-primary" aria-hidden="true"></div>
            <div class="hero-glow hero-glow-accent" aria-hidden="true"></div>

            <div class="container hero-grid">
                <div class="hero-copy enter-left">
                    <p class="hero-greeting">{"👋 Hello, I'm"}</p>
                    <h1>{OWNER_FIRST_NAME}{" "}<span class="accent">{OWNER_LAST_NAME}</span></h1>
                    <div class="hero-role-slot" aria-live="polite">
                        <span key={rotator.index().to_string()} class="hero-role">
                            {rotator.current(&ROLES).unwrap_or_default()}
                        </span>
                    </div>
                    <p class="hero-summary">
                        {"MCA student at BIT Mesra, passionate about crafting intuitive and scalable web \
                          applications that solve real-world problems."}
                    </p>
                    <div class="hero-actions">
                        <a class="button primary" href={RESUME_PATH} target="_blank" rel="noopener noreferrer">
                            {"📄 View Resume"}
                        </a>
                        <a class="button secondary" href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">
                            {"LinkedIn"}
                        </a>
                        <a class="button secondary" href={GITHUB_URL} target="_blank" rel="noopener noreferrer">
                            {"GitHub"}
                        </a>
                    </div>
                </div>

                <div class="hero-portrait enter-scale">
                    <div class="portrait-glow" aria-hidden="true"></div>
                    <div class="portrait-frame">
                        <img src={PROFILE_PHOTO_PATH} alt={full_name} />
                    </div>
                    <span class="portrait-dot portrait-dot-top" aria-hidden="true"></span>
                    <span class="portrait-dot portrait-dot-bottom" aria-hidden="true"></span>
                </div>
            </div>

            <a class="scroll-indicator" href={SectionId::About.href()} aria-label="Scroll to about">
                <span aria-hidden="true">{"⌄"}</span>
            </a>
        </section>
    }
}
