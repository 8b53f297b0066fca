use leptos::prelude::*;

use crate::portfolio::{find_project, Project};
use crate::state::{DetailTab, OverlayState, Tab};

use super::tabs::TabBar;

/// Featured project grid plus the detail overlay it feeds. The overlay state
/// lives here so every card routes through the same open transition.
#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    let (overlay, set_overlay) = signal(OverlayState::default());
    let on_view = Callback::new(move |id: &'static str| {
        set_overlay.update(|state| *state = std::mem::take(state).open(projects, id));
    });

    view! {
        <section id="projects" class="py-12 scroll-mt-16">
            <div class="mb-8">
                <h2 class="text-3xl font-bold tracking-tight">"Featured Projects"</h2>
                <p class="text-gray-400 mt-2">"A selection of my most impactful product work"</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {projects
                    .iter()
                    .map(|project| view! { <ProjectCard project on_view /> })
                    .collect_view()}
            </div>
            <DetailOverlay projects overlay set_overlay />
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_view: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="flex h-full flex-col overflow-hidden rounded-lg border border-gray-800 bg-gray-900">
            <div class="relative h-40 overflow-hidden">
                <img
                    src=project.thumbnail
                    alt=format!("{} thumbnail", project.title)
                    class="w-full h-full object-cover transition-transform hover:scale-105 duration-300"
                />
            </div>
            <div class="p-6 pb-2">
                <h3 class="text-xl font-bold">{project.title}</h3>
                <p class="mt-1 text-sm text-gray-400 line-clamp-2">{project.description}</p>
            </div>
            <div class="flex-grow px-6 py-4">
                <p class="text-sm font-medium text-gray-300 mb-2">"Key Outcomes:"</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .metrics
                        .iter()
                        .map(|metric| {
                            view! {
                                <span class="rounded-full bg-gray-800 px-2.5 py-1 text-xs text-gray-300">
                                    {*metric}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="p-6 pt-0">
                <button
                    type="button"
                    class="flex w-full items-center justify-between rounded-md border border-gray-700 px-4 py-2 text-sm font-medium hover:border-teal-400 hover:text-teal-400 transition-colors duration-200"
                    on:click=move |_| on_view.run(project.id)
                >
                    "View Details"
                    <span aria-hidden="true">"→"</span>
                </button>
            </div>
        </div>
    }
}

/// Modal overlay showing the full record for the open project. Renders
/// nothing while closed. Scroll locking is on by default but opt-out via
/// `lock_scroll`.
#[component]
fn DetailOverlay(
    projects: &'static [Project],
    overlay: ReadSignal<OverlayState>,
    set_overlay: WriteSignal<OverlayState>,
    #[prop(default = true)] lock_scroll: bool,
) -> impl IntoView {
    let (active_tab, set_active_tab) = signal(DetailTab::initial());
    let (image_index, set_image_index) = signal(0usize);

    // inner tab and carousel state follow the overlay target, not the session
    Effect::new(move |prev: Option<OverlayState>| {
        let current = overlay.get();
        if prev.is_some_and(|p| p != current) {
            set_active_tab(DetailTab::initial());
            set_image_index(0);
        }
        current
    });

    Effect::new(move |_| {
        let open = overlay.with(|state| state.is_open());
        if !lock_scroll {
            return;
        }
        if let Some(body) = document().body() {
            let _ = if open {
                body.class_list().add_1("overflow-hidden")
            } else {
                body.class_list().remove_1("overflow-hidden")
            };
        }
    });

    let on_close = Callback::new(move |_: ()| {
        set_overlay.update(|state| *state = std::mem::take(state).close());
    });

    view! {
        {move || {
            overlay
                .with(|state| state.open_id().map(str::to_owned))
                .and_then(|id| find_project(projects, &id).ok())
                .map(|project| {
                    view! {
                        <DetailDialog
                            project
                            active_tab
                            set_active_tab
                            image_index
                            set_image_index
                            on_close
                        />
                    }
                })
        }}
    }
}

#[component]
fn DetailDialog(
    project: &'static Project,
    active_tab: ReadSignal<DetailTab>,
    set_active_tab: WriteSignal<DetailTab>,
    image_index: ReadSignal<usize>,
    set_image_index: WriteSignal<usize>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-30 flex items-center justify-center bg-black/70 p-4"
            on:click=move |_| on_close.run(())
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-label=project.title
                class="max-h-[90vh] w-full max-w-4xl overflow-y-auto rounded-lg border border-gray-800 bg-gray-900 p-6 shadow-2xl"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="mb-4 flex items-center justify-between">
                    <button
                        type="button"
                        aria-label="Close"
                        class="flex h-8 w-8 items-center justify-center rounded-md hover:bg-gray-800 transition-colors duration-200"
                        on:click=move |_| on_close.run(())
                    >
                        "←"
                    </button>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="rounded-full bg-gray-800 px-2.5 py-1 text-xs text-gray-300">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <h2 class="text-2xl font-bold">{project.title}</h2>
                <p class="mt-2 text-base text-gray-400">{project.description}</p>

                <div class="mt-6">
                    <ImageCarousel
                        images=project.images
                        title=project.title
                        index=image_index
                        set_index=set_image_index
                    />
                </div>

                <div class="mt-8">
                    <div class="mb-4 flex items-center gap-4 text-sm text-gray-400">
                        <span>"📅 " {project.timeline}</span>
                        <span>"👥 " {project.team}</span>
                    </div>

                    <TabBar selected=active_tab set_selected=set_active_tab />
                    {move || match active_tab() {
                        DetailTab::Problem => {
                            view! {
                                <div class="space-y-4">
                                    <h3 class="text-lg font-medium">"Problem Statement"</h3>
                                    <p class="text-gray-400">{project.problem_statement}</p>
                                </div>
                            }
                                .into_any()
                        }
                        DetailTab::Approach => {
                            view! {
                                <div class="space-y-4">
                                    <h3 class="text-lg font-medium">"Approach"</h3>
                                    <p class="text-gray-400">{project.approach}</p>
                                </div>
                            }
                                .into_any()
                        }
                        DetailTab::Deliverables => {
                            view! {
                                <div class="space-y-4">
                                    <h3 class="text-lg font-medium">"Deliverables"</h3>
                                    <ul class="space-y-2">
                                        {project
                                            .deliverables
                                            .iter()
                                            .map(|deliverable| {
                                                view! {
                                                    <li class="flex items-start gap-2">
                                                        <span class="mt-0.5 shrink-0 text-teal-400">"✓"</span>
                                                        <span class="text-gray-400">{*deliverable}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                                .into_any()
                        }
                        DetailTab::Results => {
                            view! {
                                <div class="space-y-4">
                                    <h3 class="text-lg font-medium">"Results & Impact"</h3>
                                    <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
                                        {project
                                            .results
                                            .iter()
                                            .map(|result| {
                                                view! {
                                                    <div class="rounded-lg border border-gray-800 bg-gray-950 p-4 text-center">
                                                        <p class="text-sm text-gray-400">{result.label}</p>
                                                        <p class="text-2xl font-bold text-teal-400">{result.value}</p>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>

                {(!project.links.is_empty())
                    .then(|| {
                        view! {
                            <div class="mt-8 flex gap-4 border-t border-gray-800 pt-4">
                                {project
                                    .links
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="inline-flex items-center gap-2 rounded-md border border-gray-700 px-3 py-1.5 text-sm hover:border-teal-400 hover:text-teal-400 transition-colors duration-200"
                                            >
                                                {link.title}
                                                <span aria-hidden="true">"↗"</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn ImageCarousel(
    images: &'static [&'static str],
    title: &'static str,
    index: ReadSignal<usize>,
    set_index: WriteSignal<usize>,
) -> impl IntoView {
    let len = images.len();

    (len > 0).then(|| {
        view! {
            <div class="relative">
                <div class="aspect-video overflow-hidden rounded-md bg-gray-800">
                    <img
                        src=move || images[index() % len]
                        alt=move || format!("{title} image {}", index() % len + 1)
                        class="h-full w-full object-cover"
                    />
                </div>
                {(len > 1)
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                aria-label="Previous image"
                                class="absolute left-2 top-1/2 -translate-y-1/2 rounded-full bg-gray-950/70 px-3 py-1 text-lg hover:bg-gray-950 transition-colors duration-200"
                                on:click=move |_| set_index.update(|i| *i = (*i + len - 1) % len)
                            >
                                "‹"
                            </button>
                            <button
                                type="button"
                                aria-label="Next image"
                                class="absolute right-2 top-1/2 -translate-y-1/2 rounded-full bg-gray-950/70 px-3 py-1 text-lg hover:bg-gray-950 transition-colors duration-200"
                                on:click=move |_| set_index.update(|i| *i = (*i + 1) % len)
                            >
                                "›"
                            </button>
                        }
                    })}
            </div>
        }
    })
}
