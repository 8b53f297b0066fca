use leptos::form::ActionForm;
use leptos::prelude::*;

/// Accepts a contact form message. Nothing is stored (this site keeps no
/// state); a valid submission is logged for the site operator to follow up.
#[server]
pub async fn send_message(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ServerFnError::new("All fields are required"));
    }
    if !email.contains('@') {
        return Err(ServerFnError::new("Please enter a valid email address"));
    }

    tracing::info!(from = %email, "contact form message from {name}: {message}");
    Ok(())
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let send = ServerAction::<SendMessage>::new();
    let pending = send.pending();
    let value = send.value();

    view! {
        <section id="contact" class="py-12 scroll-mt-16">
            <div class="flex flex-col md:flex-row gap-12">
                <div class="flex-1">
                    <h2 class="text-3xl font-bold tracking-tight mb-4">"Get In Touch"</h2>
                    <p class="text-lg mb-6 text-gray-400">
                        "Interested in working together or have a question? Feel free to reach out using the contact form or through my social profiles."
                    </p>
                    <div class="space-y-4">
                        <div class="flex items-center gap-3">
                            <span class="text-teal-400">"✉"</span>
                            <span>"hello@pmportfolio.com"</span>
                        </div>
                        <div class="flex items-center gap-3">
                            <span class="text-teal-400">"in"</span>
                            <a
                                href="https://linkedin.com/in/pmportfolio"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hover:text-teal-400 transition-colors duration-200"
                            >
                                "linkedin.com/in/pmportfolio"
                            </a>
                        </div>
                        <div class="flex items-center gap-3">
                            <span class="text-teal-400">"tw"</span>
                            <a
                                href="https://twitter.com/pmportfolio"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hover:text-teal-400 transition-colors duration-200"
                            >
                                "@pmportfolio"
                            </a>
                        </div>
                    </div>
                </div>
                <div class="flex-1">
                    <ActionForm
                        action=send
                        attr:class="space-y-4 rounded-lg border border-gray-800 bg-gray-900 p-6"
                    >
                        <div>
                            <label for="contact_name" class="mb-1 block text-sm font-medium">
                                "Name"
                            </label>
                            <input
                                id="contact_name"
                                name="name"
                                required
                                placeholder="Your name"
                                class="w-full rounded-md border border-gray-700 bg-gray-950 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-teal-400"
                            />
                        </div>
                        <div>
                            <label for="contact_email" class="mb-1 block text-sm font-medium">
                                "Email"
                            </label>
                            <input
                                id="contact_email"
                                name="email"
                                type="email"
                                required
                                placeholder="you@example.com"
                                class="w-full rounded-md border border-gray-700 bg-gray-950 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-teal-400"
                            />
                        </div>
                        <div>
                            <label for="contact_message" class="mb-1 block text-sm font-medium">
                                "Message"
                            </label>
                            <textarea
                                id="contact_message"
                                name="message"
                                required
                                rows="5"
                                placeholder="What would you like to talk about?"
                                class="w-full rounded-md border border-gray-700 bg-gray-950 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-teal-400"
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            disabled=move || pending()
                            class="w-full rounded-md bg-teal-500 px-4 py-2 font-medium text-gray-950 hover:bg-teal-400 transition-colors duration-200 disabled:opacity-60"
                        >
                            {move || if pending() { "Sending..." } else { "Send Message" }}
                        </button>
                        {move || {
                            value()
                                .map(|result| match result {
                                    Ok(()) => {
                                        view! {
                                            <p class="text-sm text-green-400">
                                                "Thanks for reaching out! I'll get back to you soon."
                                            </p>
                                        }
                                            .into_any()
                                    }
                                    Err(err) => {
                                        view! {
                                            <p class="text-sm text-red-400">{err.to_string()}</p>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </ActionForm>
                </div>
            </div>
        </section>
    }
}
