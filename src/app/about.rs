use leptos::prelude::*;

struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    summary: &'static str,
}

const BACKGROUND: &[Role] = &[
    Role {
        title: "Senior Product Manager",
        company: "Company A",
        period: "2020 - Present",
        summary: "Led the development of flagship analytics platform, resulting in 40% revenue growth.",
    },
    Role {
        title: "Product Manager",
        company: "Company B",
        period: "2018 - 2020",
        summary: "Managed mobile app redesign that improved user retention by 25%.",
    },
    Role {
        title: "Associate Product Manager",
        company: "Company C",
        period: "2016 - 2018",
        summary: "Supported e-commerce platform development and launch.",
    },
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-12 scroll-mt-16">
            <div class="flex flex-col md:flex-row gap-12">
                <div class="flex-1">
                    <h2 class="text-3xl font-bold tracking-tight mb-6">"About Me"</h2>
                    <div class="space-y-4 text-lg">
                        <p>
                            "I'm a strategic product manager with over 8 years of experience building digital products that solve real user problems while driving business growth."
                        </p>
                        <p>
                            "My approach combines deep user empathy, data-driven decision making, and cross-functional leadership to deliver exceptional product experiences."
                        </p>
                        <p>
                            "Previously, I've led product teams at Company A, Company B, and Company C, where I launched products used by millions of users worldwide."
                        </p>
                    </div>
                    <div class="mt-8">
                        <a
                            href="/resume.pdf"
                            download="resume.pdf"
                            class="inline-flex items-center rounded-md bg-teal-500 px-4 py-2 font-medium text-gray-950 hover:bg-teal-400 transition-colors duration-200"
                        >
                            "Download Full Resume"
                        </a>
                    </div>
                </div>
                <div class="flex-1">
                    <div class="rounded-lg border border-gray-800 bg-gray-900 p-6">
                        <h3 class="text-xl font-semibold mb-4">"Professional Background"</h3>
                        <div class="space-y-6">
                            {BACKGROUND
                                .iter()
                                .map(|role| {
                                    view! {
                                        <div>
                                            <div class="flex justify-between">
                                                <h4 class="font-medium">{role.title}</h4>
                                                <span class="text-gray-400">{role.period}</span>
                                            </div>
                                            <p class="text-teal-400">{role.company}</p>
                                            <p class="text-sm mt-1 text-gray-400">{role.summary}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
