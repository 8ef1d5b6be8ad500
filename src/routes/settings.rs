//! Settings screen, open to both roles. Shows account data, the sign-out
//! action, and build metadata. Password change depends on a backend endpoint
//! that does not exist yet.

use crate::app_lib::build_info;
use crate::components::AppShell;
use crate::features::auth::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <SettingsContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn SettingsContent() -> impl IntoView {
    let auth = use_auth();
    let version = env!("CARGO_PKG_VERSION");
    let commit: String = build_info::git_commit_hash().chars().take(7).collect();

    view! {
        <div class="mx-auto max-w-xl space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Configurações"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Preferências da sua conta."
                </p>
            </div>

            <div class="space-y-4 rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800">
                <h2 class="text-sm font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400">
                    "Conta"
                </h2>
                {move || {
                    auth.user
                        .get()
                        .map(|user| {
                            view! {
                                <div class="space-y-1 text-sm">
                                    <p class="text-gray-900 dark:text-white">{user.email.clone()}</p>
                                    <p class="text-gray-500 dark:text-gray-400">
                                        {user.user_type.label()}
                                    </p>
                                </div>
                            }
                        })
                }}
                <button
                    type="button"
                    class="rounded-lg border border-red-300 px-4 py-2 text-sm font-medium text-red-600 hover:bg-red-50 dark:border-red-500 dark:text-red-400 dark:hover:bg-red-900/20"
                    on:click=move |_| {
                        auth.logout();
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(paths::LOGIN);
                        }
                    }
                >
                    "Sair da conta"
                </button>
            </div>

            <div class="space-y-2 rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800">
                <h2 class="text-sm font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400">
                    "Segurança"
                </h2>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Alteração de senha estará disponível em breve."
                </p>
            </div>

            <div class="space-y-1 rounded-lg border border-gray-200 bg-white p-6 text-sm text-gray-500 dark:border-gray-700 dark:bg-gray-800 dark:text-gray-400">
                <h2 class="text-sm font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400">
                    "Sobre"
                </h2>
                <p>{format!("Versão {version}")}</p>
                <p>{format!("Build {commit}")}</p>
            </div>
        </div>
    }
}
