//! Favorites route, consumer-only. Lists the saved locations with their
//! notes and supports removal and an external "how to get there" link when
//! the location has coordinates.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireConsumer;
use crate::features::favorites::{client, types::Favorite};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireConsumer>
                <FavoritesContent />
            </RequireConsumer>
        </AppShell>
    }
}

#[component]
fn FavoritesContent() -> impl IntoView {
    let favorites = RwSignal::new(Vec::<Favorite>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<AppError>>(None);

    spawn_local(async move {
        match client::list_favorites().await {
            Ok(data) => favorites.set(data),
            Err(err) => set_error.set(Some(err)),
        }
        set_loading.set(false);
    });

    let remove_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::remove_favorite(id).await.map(|()| id) }
    });

    Effect::new(move |_| {
        if let Some(result) = remove_action.value().get() {
            match result {
                Ok(id) => favorites.update(|list| list.retain(|favorite| favorite.id != id)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Meus Favoritos"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Locais que você salvou para visitar depois."
                </p>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.user_message() /> })
            }}

            {move || {
                if loading.get() {
                    return view! {
                        <div class="flex justify-center py-16">
                            <Spinner />
                        </div>
                    }
                        .into_any();
                }

                let items = favorites.get();
                if items.is_empty() {
                    return view! {
                        <div class="py-16 text-center text-gray-500 dark:text-gray-400">
                            <h2 class="text-lg font-medium">"Nenhum favorito ainda"</h2>
                            <p class="text-sm">
                                "Explore o mapa e adicione locais aos seus favoritos!"
                            </p>
                        </div>
                    }
                        .into_any();
                }

                view! {
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        {items
                            .into_iter()
                            .map(|favorite| {
                                let favorite_id = favorite.id;
                                let location = favorite.location_details.clone();
                                let place = format!("{} - {}", location.city, location.state);
                                let directions = location
                                    .latitude
                                    .zip(location.longitude)
                                    .map(|(latitude, longitude)| {
                                        format!(
                                            "https://www.google.com/maps/dir/?api=1&destination={latitude},{longitude}"
                                        )
                                    });

                                view! {
                                    <div class="flex flex-col rounded-lg border border-gray-200 bg-white p-4 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                                        <div class="flex items-start justify-between">
                                            <A
                                                href=paths::location_detail(location.id)
                                                attr:class="text-base font-semibold text-gray-900 hover:text-emerald-700 dark:text-white dark:hover:text-emerald-400"
                                            >
                                                {location.name.clone()}
                                            </A>
                                            <button
                                                type="button"
                                                class="text-xl leading-none text-emerald-600"
                                                aria-label="Remover dos favoritos"
                                                on:click=move |_| {
                                                    remove_action.dispatch(favorite_id);
                                                }
                                            >
                                                "♥"
                                            </button>
                                        </div>
                                        <div class="mt-2 space-y-1 text-sm text-gray-500 dark:text-gray-400">
                                            <p>{location.producer_name.clone()}</p>
                                            <p>{place}</p>
                                        </div>
                                        {(!favorite.note.is_empty()).then_some(view! {
                                            <p class="mt-2 text-sm italic text-gray-600 dark:text-gray-300">
                                                {favorite.note.clone()}
                                            </p>
                                        })}
                                        {directions.map(|href| {
                                            view! {
                                                <a
                                                    href=href
                                                    target="_blank"
                                                    rel="noopener"
                                                    class="mt-3 text-sm font-medium text-emerald-700 hover:underline dark:text-emerald-400"
                                                >
                                                    "Como chegar"
                                                </a>
                                            }
                                        })}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
