//! Producer statistics, producer-only. Location and product counts come from
//! the real endpoints; view and favorite metrics have no backend yet and are
//! shown as placeholders.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireProducer;
use crate::features::locations::client as locations;
use crate::features::products::client as products;
use leptos::prelude::*;

#[component]
pub fn StatsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireProducer>
                <StatsContent />
            </RequireProducer>
        </AppShell>
    }
}

#[component]
fn StatsContent() -> impl IntoView {
    let counts = LocalResource::new(move || async move {
        let locations = locations::my_locations().await?;
        let products = products::list_products().await?;
        Ok::<_, AppError>((locations.len(), products.len()))
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Estatísticas"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Acompanhe o desempenho das suas feiras e produtos."
                </p>
            </div>

            <Suspense fallback=move || {
                view! {
                    <div class="flex justify-center py-16">
                        <Spinner />
                    </div>
                }
            }>
                {move || match counts.get() {
                    Some(Ok((location_count, product_count))) => {
                        view! {
                            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                                <StatCard
                                    title="Feiras Ativas"
                                    value=location_count.to_string()
                                    detail="Pontos de venda cadastrados"
                                />
                                <StatCard
                                    title="Produtos"
                                    value=product_count.to_string()
                                    detail="Itens no catálogo"
                                />
                                <StatCard
                                    title="Visualizações"
                                    value="—".to_string()
                                    detail="Disponível em breve"
                                />
                                <StatCard
                                    title="Favoritos"
                                    value="—".to_string()
                                    detail="Disponível em breve"
                                />
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

            <div class="rounded-lg border border-dashed border-gray-300 py-16 text-center text-gray-500 dark:border-gray-600 dark:text-gray-400">
                <h2 class="text-lg font-medium">"Gráficos em desenvolvimento"</h2>
                <p class="text-sm">
                    "Em breve você terá acesso a gráficos detalhados de desempenho."
                </p>
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    value: String,
    detail: &'static str,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm dark:border-gray-700 dark:bg-gray-800">
            <h3 class="text-sm font-medium text-gray-500 dark:text-gray-400">{title}</h3>
            <div class="mt-1 text-2xl font-semibold text-gray-900 dark:text-white">{value}</div>
            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">{detail}</p>
        </div>
    }
}
