use leptos::prelude::*;
use leptos_meta::Title;

use crate::portfolio::{FEATURED_PROJECTS, SOFT_SKILLS, TECHNICAL_SKILLS};

use super::about::AboutSection;
use super::contact::ContactSection;
use super::hero::Hero;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;

/// The single page. Owns the static collections and passes read-only views
/// down to each section.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Product Manager & Strategic Thinker" />
        <Hero />
        <Divider />
        <ProjectsSection projects=FEATURED_PROJECTS />
        <Divider />
        <SkillsSection technical=TECHNICAL_SKILLS soft=SOFT_SKILLS />
        <Divider />
        <AboutSection />
        <Divider />
        <ContactSection />
    }
}

#[component]
fn Divider() -> impl IntoView {
    view! { <hr class="my-8 border-gray-800" /> }
}
