//! Search input used by the discovery and producer list screens. Emits the
//! raw query on every keystroke; filtering stays with the caller.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] placeholder: String,
    on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="w-full rounded-lg border border-gray-300 bg-gray-50 px-4 py-2.5 text-sm text-gray-900 focus:border-emerald-500 focus:ring-emerald-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white dark:placeholder-gray-400"
            placeholder=placeholder
            on:input=move |event| on_search.run(event_target_value(&event))
        />
    }
}
