//! Discovery home page. Loads the public map data and filters it client-side
//! by search term and location type; consumers can favorite straight from the
//! cards. Map tiles are rendered by an external layer, so this screen owns
//! the list half of the discovery experience.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, LocationCard, SearchBar, Spinner};
use crate::features::auth::{permissions, state::use_auth};
use crate::features::favorites::client as favorites;
use crate::features::locations::{client, types::LocationListItem, types::LocationType};
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let can_favorite = Signal::derive(move || {
        auth.user
            .with(|user| permissions::can_favorite_locations(user.as_ref()))
    });

    let locations = RwSignal::new(Vec::<LocationListItem>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (query, set_query) = signal(String::new());
    let (type_filter, set_type_filter) = signal::<Option<LocationType>>(None);

    spawn_local(async move {
        match client::map_data().await {
            Ok(data) => locations.set(data),
            Err(err) => {
                log::warn!("failed to load map data: {err}");
                set_error.set(Some(err));
            }
        }
        set_loading.set(false);
    });

    let filtered = Signal::derive(move || {
        let term = query.get().trim().to_lowercase();
        let wanted_type = type_filter.get();

        locations
            .get()
            .into_iter()
            .filter(|item| {
                wanted_type.is_none_or(|wanted| item.location_type == wanted)
            })
            .filter(|item| {
                term.is_empty()
                    || item.name.to_lowercase().contains(&term)
                    || item.producer_name.to_lowercase().contains(&term)
                    || item.city.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    });

    let toggle_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move {
            favorites::toggle_favorite(id, None).await.map(|response| {
                log::debug!("favorite toggle: {}", response.message);
                (id, response.favorited)
            })
        }
    });

    Effect::new(move |_| {
        if let Some(result) = toggle_action.value().get() {
            match result {
                Ok((id, favorited)) => locations.update(|list| {
                    if let Some(item) = list.iter_mut().find(|item| item.id == id) {
                        item.is_favorited = Some(favorited);
                    }
                }),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_favorite = Callback::new(move |id: i64| {
        toggle_action.dispatch(id);
    });
    let on_search = Callback::new(move |term: String| set_query.set(term));

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Encontre orgânicos perto de você"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Feiras, lojas e produtores com venda direta."
                    </p>
                </div>

                <div class="flex flex-col gap-3 sm:flex-row">
                    <div class="flex-1">
                        <SearchBar
                            placeholder="Buscar por nome, produtor ou cidade"
                            on_search=on_search
                        />
                    </div>
                    <select
                        class="rounded-lg border border-gray-300 bg-gray-50 px-3 py-2.5 text-sm text-gray-900 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                        on:change=move |event| {
                            let value = event_target_value(&event);
                            set_type_filter.set(LocationType::from_code(&value));
                        }
                    >
                        <option value="ALL">"Todos os tipos"</option>
                        {LocationType::all()
                            .into_iter()
                            .map(|variant| {
                                view! { <option value=variant.code()>{variant.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                        })
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

                    let items = filtered.get();
                    if items.is_empty() {
                        return view! {
                            <div class="py-16 text-center text-gray-500 dark:text-gray-400">
                                <h3 class="text-lg font-medium">"Nenhum local encontrado"</h3>
                                <p class="text-sm">
                                    "Tente ajustar os filtros ou buscar por outro termo."
                                </p>
                            </div>
                        }
                            .into_any();
                    }

                    let allow_favorite = can_favorite.get();
                    view! {
                        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                            {items
                                .into_iter()
                                .map(|item| {
                                    let favorited = item.is_favorited.unwrap_or(false);
                                    if allow_favorite {
                                        view! {
                                            <LocationCard
                                                item=item
                                                favorited=favorited
                                                on_favorite=on_favorite
                                            />
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <LocationCard item=item favorited=favorited />
                                        }
                                            .into_any()
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </AppShell>
    }
}
