//! Producer's own locations, producer-only. Lists, filters, and manages the
//! producer's points of sale through a modal form. Create and update send the
//! JSON payload; ownership is enforced by the backend and a 403 is surfaced
//! with a dedicated message.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Modal, SearchBar, Spinner};
use crate::features::auth::RequireProducer;
use crate::features::locations::{
    client,
    types::{AddressPayload, Location, LocationListItem, LocationPayload, LocationType},
};
use leptos::ev::SubmitEvent;
use leptos::{prelude::*, task::spawn_local};

const FIELD: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-emerald-500 dark:focus:border-emerald-500";

#[component]
pub fn MyLocationsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireProducer>
                <MyLocationsContent />
            </RequireProducer>
        </AppShell>
    }
}

/// Projects a full location onto the compact list shape used by the screen.
fn list_item_from(location: &Location) -> LocationListItem {
    LocationListItem {
        id: location.id,
        name: location.name.clone(),
        location_type: location.location_type,
        producer_name: location.producer_name.clone(),
        main_image: location.main_image.clone(),
        latitude: location.address.latitude,
        longitude: location.address.longitude,
        city: location.address.city.clone(),
        state: location.address.state.clone(),
        product_count: location.products.len() as i64,
        is_verified: location.is_verified,
        is_favorited: None,
    }
}

#[component]
fn MyLocationsContent() -> impl IntoView {
    let locations = RwSignal::new(Vec::<LocationListItem>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (query, set_query) = signal(String::new());
    let (type_filter, set_type_filter) = signal::<Option<LocationType>>(None);
    let (show_form, set_show_form) = signal(false);
    let editing = RwSignal::new(None::<Location>);

    spawn_local(async move {
        match client::my_locations().await {
            Ok(data) => locations.set(data),
            Err(err) => set_error.set(Some(err)),
        }
        set_loading.set(false);
    });

    let filtered = Signal::derive(move || {
        let term = query.get().trim().to_lowercase();
        let wanted_type = type_filter.get();

        locations
            .get()
            .into_iter()
            .filter(|item| wanted_type.is_none_or(|wanted| item.location_type == wanted))
            .filter(|item| {
                term.is_empty()
                    || item.name.to_lowercase().contains(&term)
                    || item.city.to_lowercase().contains(&term)
                    || item.state.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    });

    // Fetches the full record before opening the edit form; the list shape
    // has no address fields.
    let edit_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::get_location(id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = edit_action.value().get() {
            match result {
                Ok(location) => {
                    editing.set(Some(location));
                    set_show_form.set(true);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::delete_location(id).await.map(|()| id) }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(id) => locations.update(|list| list.retain(|item| item.id != id)),
                Err(err) => {
                    if err.status() == Some(403) {
                        set_error.set(Some(AppError::Config(
                            "Você não tem permissão para excluir esta feira.".to_string(),
                        )));
                    } else {
                        set_error.set(Some(err));
                    }
                }
            }
        }
    });

    let submit_action = Action::new_local(move |input: &(Option<i64>, LocationPayload)| {
        let (id, payload) = input.clone();
        async move {
            match id {
                Some(id) => client::update_location(id, &payload).await,
                None => client::create_location(&payload).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(location) => {
                    let item = list_item_from(&location);
                    locations.update(|list| {
                        match list.iter_mut().find(|existing| existing.id == item.id) {
                            Some(existing) => *existing = item,
                            None => list.push(item),
                        }
                    });
                    editing.set(None);
                    set_show_form.set(false);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_form_submit = Callback::new(move |payload: LocationPayload| {
        let id = editing.with(|editing| editing.as_ref().map(|location| location.id));
        submit_action.dispatch((id, payload));
    });
    let close_form = Callback::new(move |()| {
        editing.set(None);
        set_show_form.set(false);
    });
    let on_search = Callback::new(move |term: String| set_query.set(term));

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Minhas Feiras"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Gerencie seus pontos de venda."
                    </p>
                </div>
                <button
                    type="button"
                    class="text-white bg-emerald-700 hover:bg-emerald-800 focus:ring-4 focus:outline-none focus:ring-emerald-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center dark:bg-emerald-600 dark:hover:bg-emerald-700 dark:focus:ring-emerald-800"
                    on:click=move |_| {
                        editing.set(None);
                        set_show_form.set(true);
                    }
                >
                    "Nova feira"
                </button>
            </div>

            <div class="flex flex-col gap-3 sm:flex-row">
                <div class="flex-1">
                    <SearchBar placeholder="Buscar por nome, cidade ou estado" on_search=on_search />
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

                let items = filtered.get();
                if items.is_empty() {
                    return view! {
                        <div class="py-16 text-center text-gray-500 dark:text-gray-400">
                            <h2 class="text-lg font-medium">"Nenhuma feira cadastrada"</h2>
                            <p class="text-sm">
                                "Cadastre seu primeiro ponto de venda para aparecer no mapa."
                            </p>
                        </div>
                    }
                        .into_any();
                }

                view! {
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        {items
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                let place = format!("{} - {}", item.city, item.state);
                                view! {
                                    <div class="flex flex-col rounded-lg border border-gray-200 bg-white p-4 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                                        <div class="flex items-start justify-between">
                                            <h3 class="text-base font-semibold text-gray-900 dark:text-white">
                                                {item.name.clone()}
                                            </h3>
                                            <span class="rounded-full bg-emerald-50 px-2 py-0.5 text-xs font-medium text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300">
                                                {item.location_type.label()}
                                            </span>
                                        </div>
                                        <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                                            {place}
                                        </p>
                                        <div class="mt-4 flex gap-3 text-sm font-medium">
                                            <button
                                                type="button"
                                                class="text-emerald-700 hover:underline dark:text-emerald-400"
                                                on:click=move |_| {
                                                    edit_action.dispatch(id);
                                                }
                                            >
                                                "Editar"
                                            </button>
                                            <button
                                                type="button"
                                                class="text-red-600 hover:underline dark:text-red-400"
                                                on:click=move |_| {
                                                    let confirmed = web_sys::window()
                                                        .map(|window| {
                                                            window
                                                                .confirm_with_message(
                                                                    "Deseja realmente excluir esta feira?",
                                                                )
                                                                .unwrap_or(false)
                                                        })
                                                        .unwrap_or(false);
                                                    if confirmed {
                                                        delete_action.dispatch(id);
                                                    }
                                                }
                                            >
                                                "Excluir"
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}

            <Modal open=show_form title="Dados da feira" on_close=close_form>
                {move || {
                    view! {
                        <LocationForm
                            initial=editing.get()
                            pending=submit_action.pending()
                            on_submit=on_form_submit
                        />
                    }
                }}
            </Modal>
        </div>
    }
}

#[component]
fn LocationForm(
    initial: Option<Location>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<LocationPayload>,
) -> impl IntoView {
    let address = initial.as_ref().map(|location| location.address.clone());
    let (name, set_name) = signal(
        initial
            .as_ref()
            .map(|location| location.name.clone())
            .unwrap_or_default(),
    );
    let (location_type, set_location_type) = signal(
        initial
            .as_ref()
            .map(|location| location.location_type)
            .unwrap_or(LocationType::Fair),
    );
    let (description, set_description) = signal(
        initial
            .as_ref()
            .map(|location| location.description.clone())
            .unwrap_or_default(),
    );
    let (street, set_street) = signal(
        address
            .as_ref()
            .map(|address| address.street.clone())
            .unwrap_or_default(),
    );
    let (number, set_number) = signal(
        address
            .as_ref()
            .map(|address| address.number.clone())
            .unwrap_or_default(),
    );
    let (complement, set_complement) = signal(
        address
            .as_ref()
            .map(|address| address.complement.clone())
            .unwrap_or_default(),
    );
    let (neighborhood, set_neighborhood) = signal(
        address
            .as_ref()
            .map(|address| address.neighborhood.clone())
            .unwrap_or_default(),
    );
    let (city, set_city) = signal(
        address
            .as_ref()
            .map(|address| address.city.clone())
            .unwrap_or_default(),
    );
    let (state, set_state) = signal(
        address
            .as_ref()
            .map(|address| address.state.clone())
            .unwrap_or_default(),
    );
    let (zip_code, set_zip_code) = signal(
        address
            .as_ref()
            .map(|address| address.zip_code.clone())
            .unwrap_or_default(),
    );
    let coordinates = address
        .as_ref()
        .and_then(|address| address.latitude.zip(address.longitude));
    let (operation_days, set_operation_days) = signal(
        initial
            .as_ref()
            .map(|location| location.operation_days.clone())
            .unwrap_or_default(),
    );
    let (operation_hours, set_operation_hours) = signal(
        initial
            .as_ref()
            .map(|location| location.operation_hours.clone())
            .unwrap_or_default(),
    );
    let (phone, set_phone) = signal(
        initial
            .as_ref()
            .map(|location| location.phone.clone())
            .unwrap_or_default(),
    );
    let (whatsapp, set_whatsapp) = signal(
        initial
            .as_ref()
            .map(|location| location.whatsapp.clone())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit_event = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        let street_value = street.get_untracked().trim().to_string();
        let city_value = city.get_untracked().trim().to_string();
        let state_value = state.get_untracked().trim().to_string();
        let zip_value = zip_code.get_untracked().trim().to_string();
        if name_value.is_empty()
            || street_value.is_empty()
            || city_value.is_empty()
            || state_value.is_empty()
            || zip_value.is_empty()
        {
            set_error.set(Some(
                "Preencha nome, rua, cidade, estado e CEP.".to_string(),
            ));
            return;
        }

        on_submit.run(LocationPayload {
            name: name_value,
            location_type: location_type.get_untracked(),
            description: description.get_untracked().trim().to_string(),
            address: AddressPayload {
                street: street_value,
                number: number.get_untracked().trim().to_string(),
                complement: complement.get_untracked().trim().to_string(),
                neighborhood: neighborhood.get_untracked().trim().to_string(),
                city: city_value,
                state: state_value,
                zip_code: zip_value,
                latitude: coordinates.map(|(latitude, _)| latitude),
                longitude: coordinates.map(|(_, longitude)| longitude),
            },
            operation_days: operation_days.get_untracked().trim().to_string(),
            operation_hours: operation_hours.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            whatsapp: whatsapp.get_untracked().trim().to_string(),
            product_ids: None,
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit_event>
            <div>
                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="location_name">
                    "Nome"
                </label>
                <input
                    id="location_name"
                    type="text"
                    class=FIELD
                    required
                    prop:value=move || name.get()
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </div>

            <div>
                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="location_type">
                    "Tipo"
                </label>
                <select
                    id="location_type"
                    class=FIELD
                    prop:value=move || location_type.get().code().to_string()
                    on:change=move |event| {
                        let value = event_target_value(&event);
                        set_location_type
                            .set(LocationType::from_code(&value).unwrap_or(LocationType::Fair));
                    }
                >
                    {LocationType::all()
                        .into_iter()
                        .map(|variant| {
                            view! { <option value=variant.code()>{variant.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <div>
                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="location_description">
                    "Descrição"
                </label>
                <textarea
                    id="location_description"
                    class=FIELD
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |event| set_description.set(event_target_value(&event))
                ></textarea>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="street">
                        "Rua"
                    </label>
                    <input
                        id="street"
                        type="text"
                        class=FIELD
                        required
                        prop:value=move || street.get()
                        on:input=move |event| set_street.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="number">
                        "Número"
                    </label>
                    <input
                        id="number"
                        type="text"
                        class=FIELD
                        prop:value=move || number.get()
                        on:input=move |event| set_number.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="complement">
                        "Complemento"
                    </label>
                    <input
                        id="complement"
                        type="text"
                        class=FIELD
                        prop:value=move || complement.get()
                        on:input=move |event| set_complement.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="neighborhood">
                        "Bairro"
                    </label>
                    <input
                        id="neighborhood"
                        type="text"
                        class=FIELD
                        prop:value=move || neighborhood.get()
                        on:input=move |event| set_neighborhood.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="city">
                        "Cidade"
                    </label>
                    <input
                        id="city"
                        type="text"
                        class=FIELD
                        required
                        prop:value=move || city.get()
                        on:input=move |event| set_city.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="state">
                        "Estado"
                    </label>
                    <input
                        id="state"
                        type="text"
                        class=FIELD
                        maxlength="2"
                        placeholder="SP"
                        required
                        prop:value=move || state.get()
                        on:input=move |event| set_state.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="zip_code">
                        "CEP"
                    </label>
                    <input
                        id="zip_code"
                        type="text"
                        class=FIELD
                        placeholder="00000-000"
                        required
                        prop:value=move || zip_code.get()
                        on:input=move |event| set_zip_code.set(event_target_value(&event))
                    />
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="operation_days">
                        "Dias de funcionamento"
                    </label>
                    <input
                        id="operation_days"
                        type="text"
                        class=FIELD
                        placeholder="Sábados e domingos"
                        prop:value=move || operation_days.get()
                        on:input=move |event| set_operation_days.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="operation_hours">
                        "Horário"
                    </label>
                    <input
                        id="operation_hours"
                        type="text"
                        class=FIELD
                        placeholder="07h às 13h"
                        prop:value=move || operation_hours.get()
                        on:input=move |event| set_operation_hours.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="location_phone">
                        "Telefone"
                    </label>
                    <input
                        id="location_phone"
                        type="tel"
                        class=FIELD
                        prop:value=move || phone.get()
                        on:input=move |event| set_phone.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="location_whatsapp">
                        "WhatsApp"
                    </label>
                    <input
                        id="location_whatsapp"
                        type="tel"
                        class=FIELD
                        prop:value=move || whatsapp.get()
                        on:input=move |event| set_whatsapp.set(event_target_value(&event))
                    />
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}

            <Button button_type="submit" disabled=pending>
                "Salvar"
            </Button>
        </form>
    }
}
