//! Signup route. Validates the form locally (matching passwords, minimum
//! length), creates the account, and signs in with the same credentials.
//! Field errors from the API are flattened into one display line.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::permissions;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{RegisterData, UserRole};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Minimum password length enforced by the client for early feedback; the
/// backend applies the same rule.
const MIN_PASSWORD_LENGTH: usize = 8;

const FIELD: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-emerald-500 dark:focus:border-emerald-500";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (role, set_role) = signal(UserRole::Consumer);
    let (password, set_password) = signal(String::new());
    let (password_confirm, set_password_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let register_action = Action::new_local(move |data: &RegisterData| {
        let data = data.clone();
        async move { auth.register(data).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    let target = auth
                        .user
                        .with(|user| permissions::home_route_for(user.as_ref()));
                    navigate(target, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let password_value = password.get_untracked();
        if password_value != password_confirm.get_untracked() {
            set_error.set(Some(AppError::Config(
                "As senhas não coincidem.".to_string(),
            )));
            return;
        }
        if password_value.len() < MIN_PASSWORD_LENGTH {
            set_error.set(Some(AppError::Config(format!(
                "A senha deve ter no mínimo {MIN_PASSWORD_LENGTH} caracteres."
            ))));
            return;
        }

        register_action.dispatch(RegisterData {
            email: email.get_untracked().trim().to_string(),
            password: password_value.clone(),
            password_confirm: password_value,
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            user_type: role.get_untracked(),
            phone: phone.get_untracked().trim().to_string(),
        });
    };

    view! {
        <AppShell>
            <form class="max-w-md mx-auto space-y-5" on:submit=on_submit>
                <div class="text-center">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Criar nova conta"
                    </h1>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="first_name"
                        >
                            "Nome"
                        </label>
                        <input
                            id="first_name"
                            type="text"
                            class=FIELD
                            placeholder="João"
                            required
                            on:input=move |event| set_first_name.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="last_name"
                        >
                            "Sobrenome"
                        </label>
                        <input
                            id="last_name"
                            type="text"
                            class=FIELD
                            placeholder="Silva"
                            required
                            on:input=move |event| set_last_name.set(event_target_value(&event))
                        />
                    </div>
                </div>

                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="email"
                    >
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=FIELD
                        autocomplete="email"
                        placeholder="seu@email.com"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>

                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="phone"
                    >
                        "Telefone (opcional)"
                    </label>
                    <input
                        id="phone"
                        type="tel"
                        class=FIELD
                        placeholder="(11) 99999-9999"
                        on:input=move |event| set_phone.set(event_target_value(&event))
                    />
                </div>

                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="user_type"
                    >
                        "Tipo de usuário"
                    </label>
                    <select
                        id="user_type"
                        class=FIELD
                        on:change=move |event| {
                            let value = event_target_value(&event);
                            set_role.set(if value == "PRODUCER" {
                                UserRole::Producer
                            } else {
                                UserRole::Consumer
                            });
                        }
                    >
                        <option value="CONSUMER">"Consumidor"</option>
                        <option value="PRODUCER">"Produtor"</option>
                    </select>
                    <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                        {move || {
                            if role.get() == UserRole::Producer {
                                "Poderá cadastrar pontos de venda e produtos"
                            } else {
                                "Poderá buscar e favoritar produtores"
                            }
                        }}
                    </p>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="password"
                        >
                            "Senha"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class=FIELD
                            autocomplete="new-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="password_confirm"
                        >
                            "Confirmar senha"
                        </label>
                        <input
                            id="password_confirm"
                            type="password"
                            class=FIELD
                            autocomplete="new-password"
                            required
                            on:input=move |event| {
                                set_password_confirm.set(event_target_value(&event));
                            }
                        />
                    </div>
                </div>

                <Button button_type="submit" disabled=register_action.pending()>
                    "Cadastrar"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.user_message() />
                                </div>
                            }
                        })
                }}
                <p class="text-center text-sm text-gray-500 dark:text-gray-400">
                    "Já tem uma conta? "
                    <A
                        href=paths::LOGIN
                        attr:class="font-medium text-emerald-700 hover:underline dark:text-emerald-400"
                    >
                        "Faça login"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
