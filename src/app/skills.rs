use leptos::prelude::*;

use crate::portfolio::{group_by_category, Skill};
use crate::state::{SkillTab, Tab};

use super::tabs::TabBar;

/// Tabbed skills panel. The active grouping picks one of the two collections,
/// which is partitioned by category and rendered one card per group.
#[component]
pub fn SkillsSection(technical: &'static [Skill], soft: &'static [Skill]) -> impl IntoView {
    let (selected, set_selected) = signal(SkillTab::initial());

    view! {
        <section id="skills" class="py-12 scroll-mt-16">
            <div class="mb-8">
                <h2 class="text-3xl font-bold tracking-tight">"Skills & Expertise"</h2>
                <p class="text-gray-400 mt-2">"My professional toolkit as a Product Manager"</p>
            </div>
            <TabBar selected set_selected />
            <div class="space-y-8">
                {move || {
                    let grouping = selected();
                    let skills = match grouping {
                        SkillTab::Technical => technical,
                        SkillTab::Soft => soft,
                    };
                    group_by_category(skills)
                        .into_iter()
                        .map(|(category, members)| {
                            let members = members.into_iter().copied().collect::<Vec<_>>();
                            view! { <SkillGroupCard grouping category members /> }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn SkillGroupCard(grouping: SkillTab, category: &'static str, members: Vec<Skill>) -> impl IntoView {
    let kind = match grouping {
        SkillTab::Technical => "Technical",
        SkillTab::Soft => "Soft",
    };

    view! {
        <div class="rounded-lg border border-gray-800 bg-gray-900 p-6">
            <h3 class="text-xl font-semibold">{category}</h3>
            <p class="text-sm text-gray-400 mb-6">
                {format!("{kind} skills related to {}", category.to_lowercase())}
            </p>
            <div class="space-y-6">
                {members
                    .into_iter()
                    .map(|skill| view! { <SkillRow skill /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillRow(skill: Skill) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <div class="flex items-center justify-between">
                <span class="group relative text-sm font-medium cursor-help" tabindex="0">
                    {skill.name}
                    // description tooltip, revealed on hover or keyboard focus
                    <span class="absolute left-0 bottom-full z-20 mb-2 hidden w-max max-w-xs rounded-md bg-gray-800 px-3 py-2 text-xs text-gray-100 shadow-lg group-hover:block group-focus:block">
                        {skill.description}
                    </span>
                </span>
                <span class="rounded-full border border-gray-700 px-2 py-0.5 text-xs text-gray-300">
                    {format!("{}%", skill.level)}
                </span>
            </div>
            <div
                class="h-2 w-full overflow-hidden rounded-full bg-gray-800"
                role="progressbar"
                aria-valuenow=skill.level.to_string()
                aria-valuemin="0"
                aria-valuemax="100"
            >
                <div
                    class="h-full rounded-full bg-teal-500"
                    style=format!("width: {}%", skill.level)
                ></div>
            </div>
        </div>
    }
}
