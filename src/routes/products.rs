//! Product catalog, producer-only. Lists products with their categories and
//! manages them through a modal form. Updates use PUT, matching the API
//! contract for this resource.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Modal, SearchBar, Spinner};
use crate::features::auth::RequireProducer;
use crate::features::products::{
    client,
    types::{Category, Product, ProductListItem, ProductPayload},
};
use leptos::ev::SubmitEvent;
use leptos::{prelude::*, task::spawn_local};

const FIELD: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-emerald-500 dark:focus:border-emerald-500";

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireProducer>
                <ProductsContent />
            </RequireProducer>
        </AppShell>
    }
}

fn list_item_from(product: &Product) -> ProductListItem {
    ProductListItem {
        id: product.id,
        name: product.name.clone(),
        category_name: product.category_name.clone(),
        image: product.image.clone(),
    }
}

#[component]
fn ProductsContent() -> impl IntoView {
    let products = RwSignal::new(Vec::<ProductListItem>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (query, set_query) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let editing = RwSignal::new(None::<Product>);

    spawn_local(async move {
        match client::list_products().await {
            Ok(data) => products.set(data),
            Err(err) => set_error.set(Some(err)),
        }
        set_loading.set(false);
    });

    let categories = LocalResource::new(move || async move { client::list_categories().await });

    let filtered = Signal::derive(move || {
        let term = query.get().trim().to_lowercase();
        products
            .get()
            .into_iter()
            .filter(|item| {
                term.is_empty()
                    || item.name.to_lowercase().contains(&term)
                    || item.category_name.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    });

    let edit_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::get_product(id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = edit_action.value().get() {
            match result {
                Ok(product) => {
                    editing.set(Some(product));
                    set_show_form.set(true);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::delete_product(id).await.map(|()| id) }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(id) => products.update(|list| list.retain(|item| item.id != id)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let submit_action = Action::new_local(move |input: &(Option<i64>, ProductPayload)| {
        let (id, payload) = input.clone();
        async move {
            match id {
                Some(id) => client::update_product(id, &payload).await,
                None => client::create_product(&payload).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(product) => {
                    let item = list_item_from(&product);
                    products.update(|list| {
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

    let on_form_submit = Callback::new(move |payload: ProductPayload| {
        let id = editing.with(|editing| editing.as_ref().map(|product| product.id));
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
                        "Produtos"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Itens oferecidos nos seus pontos de venda."
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
                    "Novo produto"
                </button>
            </div>

            <SearchBar placeholder="Buscar por nome ou categoria" on_search=on_search />

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
                            <h2 class="text-lg font-medium">"Nenhum produto cadastrado"</h2>
                            <p class="text-sm">
                                "Cadastre produtos para exibi-los nas suas feiras."
                            </p>
                        </div>
                    }
                        .into_any();
                }

                view! {
                    <div class="overflow-hidden rounded-lg border border-gray-200 bg-white shadow-sm dark:border-gray-700 dark:bg-gray-800">
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                <tr>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                        "Produto"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                        "Categoria"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-right text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                        "Ações"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                {items
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id;
                                        view! {
                                            <tr class="transition-colors hover:bg-gray-50 dark:hover:bg-gray-700/50">
                                                <td class="whitespace-nowrap px-6 py-4 text-sm font-medium text-gray-900 dark:text-white">
                                                    {item.name.clone()}
                                                </td>
                                                <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-500 dark:text-gray-400">
                                                    {if item.category_name.is_empty() {
                                                        "Sem categoria".to_string()
                                                    } else {
                                                        item.category_name.clone()
                                                    }}
                                                </td>
                                                <td class="whitespace-nowrap px-6 py-4 text-right text-sm font-medium">
                                                    <button
                                                        type="button"
                                                        class="mr-3 text-emerald-700 hover:underline dark:text-emerald-400"
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
                                                                            "Deseja realmente excluir este produto?",
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
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }}

            <Modal open=show_form title="Dados do produto" on_close=close_form>
                {move || {
                    let category_options = match categories.get() {
                        Some(Ok(list)) => list,
                        _ => Vec::new(),
                    };
                    view! {
                        <ProductForm
                            initial=editing.get()
                            categories=category_options
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
fn ProductForm(
    initial: Option<Product>,
    categories: Vec<Category>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<ProductPayload>,
) -> impl IntoView {
    let (name, set_name) = signal(
        initial
            .as_ref()
            .map(|product| product.name.clone())
            .unwrap_or_default(),
    );
    let (category, set_category) = signal(initial.as_ref().and_then(|product| product.category));
    let (description, set_description) = signal(
        initial
            .as_ref()
            .map(|product| product.description.clone())
            .unwrap_or_default(),
    );
    let (is_active, set_is_active) = signal(
        initial
            .as_ref()
            .map(|product| product.is_active)
            .unwrap_or(true),
    );
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit_event = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_error.set(Some("Informe o nome do produto.".to_string()));
            return;
        }

        on_submit.run(ProductPayload {
            name: name_value,
            category: category.get_untracked(),
            description: description.get_untracked().trim().to_string(),
            is_active: is_active.get_untracked(),
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit_event>
            <div>
                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="product_name">
                    "Nome"
                </label>
                <input
                    id="product_name"
                    type="text"
                    class=FIELD
                    placeholder="Alface crespa"
                    required
                    prop:value=move || name.get()
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </div>

            <div>
                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="product_category">
                    "Categoria"
                </label>
                <select
                    id="product_category"
                    class=FIELD
                    prop:value=move || {
                        category
                            .get()
                            .map(|id| id.to_string())
                            .unwrap_or_default()
                    }
                    on:change=move |event| {
                        let value = event_target_value(&event);
                        set_category.set(value.parse::<i64>().ok());
                    }
                >
                    <option value="">"Sem categoria"</option>
                    {categories
                        .iter()
                        .map(|category| {
                            view! {
                                <option value=category.id.to_string()>
                                    {category.name.clone()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div>
                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="product_description">
                    "Descrição"
                </label>
                <textarea
                    id="product_description"
                    class=FIELD
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |event| set_description.set(event_target_value(&event))
                ></textarea>
            </div>

            <label class="flex items-center gap-2 text-sm text-gray-900 dark:text-white">
                <input
                    type="checkbox"
                    class="h-4 w-4 rounded border-gray-300 text-emerald-600 focus:ring-emerald-500"
                    prop:checked=move || is_active.get()
                    on:change=move |event| set_is_active.set(event_target_checked(&event))
                />
                "Produto ativo"
            </label>

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
