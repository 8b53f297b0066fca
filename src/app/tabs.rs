use leptos::prelude::*;

use crate::state::Tab;

/// Tab trigger row shared by the skills panel and the project detail overlay.
/// Clicking a trigger routes through [`Tab::select`], so a value outside the
/// tab set never changes the selection.
#[component]
pub fn TabBar<T>(selected: ReadSignal<T>, set_selected: WriteSignal<T>) -> impl IntoView
where
    T: Tab + Send + Sync + 'static,
{
    view! {
        <div role="tablist" class="inline-flex flex-wrap gap-1 p-1 mb-6 rounded-lg bg-gray-800">
            {T::ALL
                .iter()
                .map(|tab| {
                    let tab = *tab;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || (selected() == tab).to_string()
                            class=move || {
                                if selected() == tab {
                                    "px-4 py-2 rounded-md text-sm font-medium bg-gray-950 text-teal-400"
                                } else {
                                    "px-4 py-2 rounded-md text-sm font-medium text-gray-400 hover:text-gray-100 transition-colors duration-200"
                                }
                            }
                            on:click=move |_| {
                                set_selected.update(|current| *current = current.select(tab.value()))
                            }
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
