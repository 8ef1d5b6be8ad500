//! Messaging screen, open to both roles. The conversation backend does not
//! exist yet, so this renders the empty inbox shell.

use crate::components::AppShell;
use crate::features::auth::RequireAuth;
use leptos::prelude::*;

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Mensagens"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Converse com produtores e consumidores."
                        </p>
                    </div>

                    <div class="rounded-lg border border-gray-200 bg-white py-16 text-center text-gray-500 dark:border-gray-700 dark:bg-gray-800 dark:text-gray-400">
                        <h2 class="text-lg font-medium">"Nenhuma conversa ainda"</h2>
                        <p class="text-sm">
                            "O envio de mensagens está em desenvolvimento e chega em breve."
                        </p>
                    </div>
                </div>
            </RequireAuth>
        </AppShell>
    }
}
