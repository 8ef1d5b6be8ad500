//! Location detail route. Loads the full record by id, shows address,
//! schedule, contact, and product data, and lets consumers toggle the
//! favorite state checked on entry.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::{permissions, state::use_auth};
use crate::features::favorites::client as favorites;
use crate::features::locations::client;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct LocationParams {
    id: Option<String>,
}

#[component]
pub fn LocationDetailPage() -> impl IntoView {
    let params = use_params::<LocationParams>();
    let parsed_id = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let auth = use_auth();
    let can_favorite = Signal::derive(move || {
        auth.user
            .with(|user| permissions::can_favorite_locations(user.as_ref()))
    });

    let location = LocalResource::new(move || {
        let id = parsed_id();
        async move {
            match id {
                Some(id) => client::get_location(id).await,
                None => Err(AppError::Config("Localização inválida.".to_string())),
            }
        }
    });

    let favorited = RwSignal::new(false);
    let favorite_check = LocalResource::new(move || {
        let id = parsed_id();
        let allowed = can_favorite.get();
        async move {
            if !allowed {
                return Ok(false);
            }
            match id {
                Some(id) => favorites::check_favorite(id).await.map(|res| res.favorited),
                None => Ok(false),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(Ok(value)) = favorite_check.get() {
            favorited.set(value);
        }
    });

    let (favorite_error, set_favorite_error) = signal::<Option<AppError>>(None);
    let toggle_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { favorites::toggle_favorite(id, None).await }
    });

    Effect::new(move |_| {
        if let Some(result) = toggle_action.value().get() {
            match result {
                Ok(response) => favorited.set(response.favorited),
                Err(err) => set_favorite_error.set(Some(err)),
            }
        }
    });

    view! {
        <AppShell>
            <Suspense fallback=move || {
                view! {
                    <div class="flex justify-center py-16">
                        <Spinner />
                    </div>
                }
            }>
                {move || match location.get() {
                    Some(Ok(location)) => {
                        let id = location.id;
                        let producer_id = location.producer;
                        let can_manage = Signal::derive(move || {
                            auth.user.with(|user| {
                                permissions::can_manage_location(user.as_ref(), producer_id)
                            })
                        });
                        let type_label = location.location_type.label();
                        let address = location.address.clone();
                        let address_line = format!(
                            "{}, {}{}",
                            address.street,
                            address.number,
                            if address.complement.is_empty() {
                                String::new()
                            } else {
                                format!(" - {}", address.complement)
                            },
                        );
                        let city_line = format!(
                            "{}, {} - {}",
                            address.neighborhood, address.city, address.state
                        );
                        let products = location.products.clone();

                        view! {
                            <div class="space-y-6">
                                <div class="flex flex-wrap items-start justify-between gap-4">
                                    <div class="space-y-1">
                                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                            {location.name.clone()}
                                        </h1>
                                        <div class="flex items-center gap-2 text-xs">
                                            <span class="rounded-full bg-emerald-50 px-2 py-0.5 font-medium text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300">
                                                {type_label}
                                            </span>
                                            {location.is_verified.then_some(view! {
                                                <span class="rounded-full bg-lime-50 px-2 py-0.5 font-medium text-lime-700 dark:bg-lime-900/30 dark:text-lime-300">
                                                    "Certificado"
                                                </span>
                                            })}
                                        </div>
                                        <p class="text-sm text-gray-500 dark:text-gray-400">
                                            {location.producer_name.clone()}
                                        </p>
                                    </div>
                                    <div class="flex items-center gap-3">
                                        <Show when=move || can_favorite.get()>
                                            <button
                                                type="button"
                                                class="rounded-lg border border-emerald-600 px-4 py-2 text-sm font-medium text-emerald-700 hover:bg-emerald-50 dark:text-emerald-400 dark:hover:bg-emerald-900/20"
                                                disabled=move || toggle_action.pending().get()
                                                on:click=move |_| {
                                                    toggle_action.dispatch(id);
                                                }
                                            >
                                                {move || {
                                                    if favorited.get() {
                                                        "♥ Remover dos favoritos"
                                                    } else {
                                                        "♡ Favoritar"
                                                    }
                                                }}
                                            </button>
                                        </Show>
                                        <Show when=move || can_manage.get()>
                                            <A
                                                href=paths::MY_LOCATIONS
                                                attr:class="text-sm font-medium text-emerald-700 hover:underline dark:text-emerald-400"
                                            >
                                                "Gerenciar esta feira"
                                            </A>
                                        </Show>
                                    </div>
                                </div>

                                {(!location.description.is_empty()).then_some(view! {
                                    <p class="text-gray-700 dark:text-gray-300">
                                        {location.description.clone()}
                                    </p>
                                })}

                                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                                    <div class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800">
                                        <h2 class="mb-2 text-sm font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400">
                                            "Endereço"
                                        </h2>
                                        <p class="text-gray-900 dark:text-white">{address_line}</p>
                                        <p class="text-gray-900 dark:text-white">{city_line}</p>
                                        <p class="text-sm text-gray-500 dark:text-gray-400">
                                            {format!("CEP {}", address.zip_code)}
                                        </p>
                                    </div>
                                    <div class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800">
                                        <h2 class="mb-2 text-sm font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400">
                                            "Funcionamento"
                                        </h2>
                                        <p class="text-gray-900 dark:text-white">
                                            {location.operation_days.clone()}
                                        </p>
                                        <p class="text-gray-900 dark:text-white">
                                            {location.operation_hours.clone()}
                                        </p>
                                    </div>
                                    <div class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800">
                                        <h2 class="mb-2 text-sm font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400">
                                            "Contato"
                                        </h2>
                                        <p class="text-gray-900 dark:text-white">
                                            {if location.phone.is_empty() {
                                                "Telefone não informado".to_string()
                                            } else {
                                                location.phone.clone()
                                            }}
                                        </p>
                                        {(!location.whatsapp.is_empty()).then_some(view! {
                                            <p class="text-gray-900 dark:text-white">
                                                {format!("WhatsApp: {}", location.whatsapp)}
                                            </p>
                                        })}
                                    </div>
                                    <div class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800">
                                        <h2 class="mb-2 text-sm font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400">
                                            "Produtos"
                                        </h2>
                                        {if products.is_empty() {
                                            view! {
                                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                                    "Nenhum produto cadastrado."
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="flex flex-wrap gap-2">
                                                    {products
                                                        .iter()
                                                        .map(|product| {
                                                            view! {
                                                                <span class="rounded-full bg-gray-100 px-3 py-1 text-sm text-gray-700 dark:bg-gray-700 dark:text-gray-200">
                                                                    {product.name.clone()}
                                                                </span>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                                .into_any()
                                        }}
                                    </div>
                                </div>

                                {move || {
                                    favorite_error
                                        .get()
                                        .map(|err| {
                                            view! {
                                                <Alert
                                                    kind=AlertKind::Error
                                                    message=err.user_message()
                                                />
                                            }
                                        })
                                }}
                            </div>
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="flex justify-center py-16">
                                <Spinner />
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Suspense>
        </AppShell>
    }
}
