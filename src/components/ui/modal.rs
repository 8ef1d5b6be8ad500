//! Modal dialog used by the producer CRUD screens. The overlay closes the
//! dialog; clicks inside the panel do not propagate to the overlay.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    class="w-full max-w-lg max-h-[90vh] overflow-y-auto rounded-lg bg-white p-6 shadow-xl dark:bg-gray-800"
                    on:click=|event: MouseEvent| event.stop_propagation()
                >
                    <div class="mb-4 flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                            {title.clone()}
                        </h2>
                        <button
                            type="button"
                            class="text-gray-400 hover:text-gray-900 dark:hover:text-white"
                            aria-label="Fechar"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
