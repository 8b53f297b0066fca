use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="border-t border-gray-800 bg-gray-900/40">
            <div class="mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8">
                <div class="flex flex-col items-center justify-between gap-4 md:flex-row">
                    <div class="flex items-center gap-2">
                        <span class="flex h-8 w-8 items-center justify-center rounded-full bg-teal-500/20 text-sm font-bold text-teal-400">
                            "PM"
                        </span>
                        <span class="font-semibold">"PM Portfolio"</span>
                    </div>
                    <div class="text-sm text-gray-400">
                        {format!("© {year} PM Portfolio. All rights reserved.")}
                        <span class="ml-2 text-xs text-gray-500">
                            {format!("Built {}", &env!("BUILD_TIME")[..10])}
                        </span>
                    </div>
                    <div class="flex gap-4 text-sm text-gray-400">
                        <a
                            href="https://linkedin.com/in/pmportfolio"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-teal-400 transition-colors duration-200"
                        >
                            "LinkedIn"
                        </a>
                        <a
                            href="https://github.com/pmportfolio"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-teal-400 transition-colors duration-200"
                        >
                            "GitHub"
                        </a>
                        <a
                            href="mailto:hello@pmportfolio.com"
                            class="hover:text-teal-400 transition-colors duration-200"
                        >
                            "Email"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
