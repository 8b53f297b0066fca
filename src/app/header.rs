use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀️",
        }
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = signal(Theme::default());

    // theme lives on the body class so it covers content outside the app root
    Effect::new(move |_| {
        let theme = theme.get();
        if let Some(body) = document().body() {
            let classes = body.class_list();
            let _ = match theme {
                Theme::Light => classes.add_1("light"),
                Theme::Dark => classes.remove_1("light"),
            };
        }
    });

    view! {
        <header class="sticky top-0 z-10 w-full border-b border-gray-800 bg-gray-950/95 backdrop-blur">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <a href="/" class="flex items-center gap-2">
                        <span class="flex h-8 w-8 items-center justify-center rounded-full bg-teal-500/20 text-sm font-bold text-teal-400">
                            "PM"
                        </span>
                        <span class="text-lg font-semibold">"PM Portfolio"</span>
                    </a>
                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-sm font-medium text-gray-400 hover:text-teal-400 transition-colors duration-200"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            aria-label="Toggle color theme"
                            class="rounded-md border border-gray-700 px-2 py-1 text-sm hover:border-teal-400 transition-colors duration-200"
                            on:click=move |_| set_theme.update(|t| *t = t.toggled())
                        >
                            {move || theme.get().icon()}
                        </button>
                        <a
                            href="/resume.pdf"
                            download="resume.pdf"
                            class="hidden md:inline-flex items-center rounded-md border border-gray-700 px-3 py-1.5 text-sm font-medium hover:border-teal-400 transition-colors duration-200"
                        >
                            "Resume"
                        </a>
                        <a
                            href="#contact"
                            class="inline-flex items-center rounded-md bg-teal-500 px-3 py-1.5 text-sm font-medium text-gray-950 hover:bg-teal-400 transition-colors duration-200"
                        >
                            "Contact Me"
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}
