//! Profile screen, open to both roles. Shows the account data and lets the
//! user edit name and phone through PATCH `/users/me/`; the refreshed profile
//! replaces the session snapshot on success.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, permissions, state::use_auth, storage, types::ProfileUpdate};
use crate::features::auth::RequireAuth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const FIELD: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-emerald-500 dark:focus:border-emerald-500";

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <ProfileContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let auth = use_auth();
    let (editing, set_editing) = signal(false);
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (saved, set_saved) = signal(false);

    let needs_completion = Signal::derive(move || {
        auth.user
            .with(|user| permissions::needs_profile_completion(user.as_ref()))
    });

    let start_editing = move |_| {
        auth.user.with_untracked(|user| {
            if let Some(user) = user.as_ref() {
                set_first_name.set(user.first_name.clone());
                set_last_name.set(user.last_name.clone());
                set_phone.set(user.phone.clone());
            }
        });
        set_saved.set(false);
        set_error.set(None);
        set_editing.set(true);
    };

    let save_action = Action::new_local(move |update: &ProfileUpdate| {
        let update = update.clone();
        async move { client::update_profile(&update).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(user) => {
                    storage::store_cached_user(&user);
                    auth.user.set(Some(user));
                    set_editing.set(false);
                    set_saved.set(true);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        save_action.dispatch(ProfileUpdate {
            first_name: Some(first_name.get_untracked().trim().to_string()),
            last_name: Some(last_name.get_untracked().trim().to_string()),
            phone: Some(phone.get_untracked().trim().to_string()),
        });
    };

    view! {
        <div class="mx-auto max-w-xl space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Meu Perfil"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Gerencie suas informações pessoais."
                    </p>
                </div>
                <Show when=move || !editing.get()>
                    <button
                        type="button"
                        class="rounded-lg border border-emerald-600 px-4 py-2 text-sm font-medium text-emerald-700 hover:bg-emerald-50 dark:text-emerald-400 dark:hover:bg-emerald-900/20"
                        on:click=start_editing
                    >
                        "Editar perfil"
                    </button>
                </Show>
            </div>

            <Show when=move || needs_completion.get()>
                <Alert
                    kind=AlertKind::Info
                    message="Complete seu perfil com nome e sobrenome para aparecer melhor nas buscas."
                        .to_string()
                />
            </Show>

            {move || {
                saved
                    .get()
                    .then_some(view! {
                        <Alert
                            kind=AlertKind::Success
                            message="Perfil atualizado!".to_string()
                        />
                    })
            }}

            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.user_message() /> })
            }}

            {move || {
                if editing.get() {
                    view! {
                        <form class="space-y-4" on:submit=on_submit>
                            <div class="grid grid-cols-2 gap-4">
                                <div>
                                    <label
                                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                        for="profile_first_name"
                                    >
                                        "Nome"
                                    </label>
                                    <input
                                        id="profile_first_name"
                                        type="text"
                                        class=FIELD
                                        prop:value=move || first_name.get()
                                        on:input=move |event| {
                                            set_first_name.set(event_target_value(&event));
                                        }
                                    />
                                </div>
                                <div>
                                    <label
                                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                        for="profile_last_name"
                                    >
                                        "Sobrenome"
                                    </label>
                                    <input
                                        id="profile_last_name"
                                        type="text"
                                        class=FIELD
                                        prop:value=move || last_name.get()
                                        on:input=move |event| {
                                            set_last_name.set(event_target_value(&event));
                                        }
                                    />
                                </div>
                            </div>
                            <div>
                                <label
                                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                    for="profile_phone"
                                >
                                    "Telefone"
                                </label>
                                <input
                                    id="profile_phone"
                                    type="tel"
                                    class=FIELD
                                    prop:value=move || phone.get()
                                    on:input=move |event| set_phone.set(event_target_value(&event))
                                />
                            </div>
                            <div class="flex items-center gap-3">
                                <Button button_type="submit" disabled=save_action.pending()>
                                    "Salvar"
                                </Button>
                                <button
                                    type="button"
                                    class="text-sm font-medium text-gray-500 hover:underline dark:text-gray-400"
                                    on:click=move |_| set_editing.set(false)
                                >
                                    "Cancelar"
                                </button>
                                {move || {
                                    save_action
                                        .pending()
                                        .get()
                                        .then_some(view! { <Spinner /> })
                                }}
                            </div>
                        </form>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="space-y-4 rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800">
                            {move || {
                                auth.user
                                    .get()
                                    .map(|user| {
                                        view! {
                                            <div class="space-y-4">
                                                <div>
                                                    <span class="block text-sm font-medium text-gray-500 dark:text-gray-400">
                                                        "Nome completo"
                                                    </span>
                                                    <div class="text-gray-900 dark:text-white">
                                                        {if user.full_name.is_empty() {
                                                            format!(
                                                                "{} {}",
                                                                user.first_name, user.last_name
                                                            )
                                                        } else {
                                                            user.full_name.clone()
                                                        }}
                                                    </div>
                                                </div>
                                                <div>
                                                    <span class="block text-sm font-medium text-gray-500 dark:text-gray-400">
                                                        "Email"
                                                    </span>
                                                    <div class="text-gray-900 dark:text-white">
                                                        {user.email.clone()}
                                                    </div>
                                                </div>
                                                <div>
                                                    <span class="block text-sm font-medium text-gray-500 dark:text-gray-400">
                                                        "Telefone"
                                                    </span>
                                                    <div class="text-gray-900 dark:text-white">
                                                        {if user.phone.is_empty() {
                                                            "Não informado".to_string()
                                                        } else {
                                                            user.phone.clone()
                                                        }}
                                                    </div>
                                                </div>
                                                <div>
                                                    <span class="block text-sm font-medium text-gray-500 dark:text-gray-400">
                                                        "Tipo de conta"
                                                    </span>
                                                    <span class="mt-1 inline-block rounded-full bg-emerald-50 px-3 py-1 text-sm font-medium text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300">
                                                        {user.user_type.label()}
                                                    </span>
                                                </div>
                                            </div>
                                        }
                                    })
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
