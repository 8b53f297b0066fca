use leptos::prelude::*;

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("https://linkedin.com/in/pmportfolio", "LinkedIn", "in"),
    ("https://github.com/pmportfolio", "GitHub", "gh"),
    ("https://twitter.com/pmportfolio", "Twitter", "tw"),
    ("mailto:hello@pmportfolio.com", "Email", "@"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="py-12 md:py-20">
            <div class="flex flex-col md:flex-row gap-8 items-center">
                <div class="flex-1">
                    <h1 class="text-4xl md:text-5xl font-bold tracking-tight mb-4">
                        "Product Manager & " <span class="text-teal-400">"Strategic Thinker"</span>
                    </h1>
                    <p class="text-xl text-gray-400 mb-6">
                        "I transform complex problems into elegant product solutions that drive business growth and enhance user experiences."
                    </p>
                    <div class="flex gap-4">
                        <a
                            href="#projects"
                            class="inline-flex items-center rounded-md bg-teal-500 px-6 py-3 font-medium text-gray-950 hover:bg-teal-400 transition-colors duration-200"
                        >
                            "View My Work →"
                        </a>
                        <a
                            href="/resume.pdf"
                            download="resume.pdf"
                            class="inline-flex items-center rounded-md border border-gray-700 px-6 py-3 font-medium hover:border-teal-400 transition-colors duration-200"
                        >
                            "Download Resume"
                        </a>
                    </div>
                    <div class="flex gap-4 mt-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(href, label, short)| {
                                view! {
                                    <a
                                        href=*href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=*label
                                        class="flex h-9 w-9 items-center justify-center rounded-full border border-gray-700 text-sm text-gray-400 hover:text-teal-400 hover:border-teal-400 transition-colors duration-200"
                                    >
                                        {*short}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="flex-1 flex justify-center">
                    <div class="relative">
                        <div class="absolute -z-10 rounded-full bg-teal-500/20 w-72 h-72 blur-3xl"></div>
                        <img
                            src="https://api.dicebear.com/7.x/avataaars/svg?seed=portfolio-large"
                            alt="Product Manager"
                            class="w-64 h-64 rounded-full border-4 border-gray-800 shadow-xl bg-gray-900"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
