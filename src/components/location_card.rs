//! Card for a sale location in discovery grids. The heart action only shows
//! for users allowed to favorite; ownership screens render their own actions.

use crate::features::locations::types::LocationListItem;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LocationCard(
    item: LocationListItem,
    #[prop(optional)] favorited: bool,
    #[prop(optional)] on_favorite: Option<Callback<i64>>,
) -> impl IntoView {
    let detail_href = paths::location_detail(item.id);
    let type_label = item.location_type.label();
    let place = format!("{} - {}", item.city, item.state);
    let product_count = item.product_count;
    let id = item.id;

    view! {
        <div class="flex flex-col rounded-lg border border-gray-200 bg-white p-4 shadow-sm transition-colors hover:border-emerald-300 dark:border-gray-700 dark:bg-gray-800">
            <div class="flex items-start justify-between">
                <A
                    href=detail_href
                    attr:class="text-base font-semibold text-gray-900 hover:text-emerald-700 dark:text-white dark:hover:text-emerald-400"
                >
                    {item.name.clone()}
                </A>
                {on_favorite.map(|callback| {
                    view! {
                        <button
                            type="button"
                            class="text-xl leading-none"
                            class:text-emerald-600=favorited
                            class:text-gray-300=!favorited
                            aria-label=if favorited {
                                "Remover dos favoritos"
                            } else {
                                "Adicionar aos favoritos"
                            }
                            on:click=move |_| callback.run(id)
                        >
                            {if favorited { "♥" } else { "♡" }}
                        </button>
                    }
                })}
            </div>

            <div class="mt-1 flex items-center gap-2 text-xs">
                <span class="rounded-full bg-emerald-50 px-2 py-0.5 font-medium text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300">
                    {type_label}
                </span>
                {item.is_verified.then_some(view! {
                    <span class="rounded-full bg-lime-50 px-2 py-0.5 font-medium text-lime-700 dark:bg-lime-900/30 dark:text-lime-300">
                        "Certificado"
                    </span>
                })}
            </div>

            <div class="mt-2 space-y-1 text-sm text-gray-500 dark:text-gray-400">
                <p>{item.producer_name.clone()}</p>
                <p>{place}</p>
                {(product_count > 0).then_some(view! {
                    <p>{format!("{product_count} produtos")}</p>
                })}
            </div>
        </div>
    }
}
