//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup and the mobile menu toggle so routes can focus on content.
//! The nav links come from a single permission snapshot per render; real
//! access control stays on the API.

use crate::features::auth::{permissions::Permissions, state::use_auth};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-emerald-700 md:p-0 dark:text-white md:dark:hover:text-emerald-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let permissions = Signal::derive(move || {
        auth.user
            .with(|user| Permissions::for_user(user.as_ref()))
    });
    let greeting = Signal::derive(move || {
        auth.user.with(|user| {
            user.as_ref()
                .map(|user| format!("Olá, {}!", user.first_name))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=paths::HOME
                        attr:class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-2xl">"🥬"</span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Ache Seu Orgânico"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        data-collapse-toggle="navbar-default"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Abrir menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:items-center md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            <li>
                                <A
                                    href=paths::HOME
                                    attr:class=NAV_LINK
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Início"
                                </A>
                            </li>
                            <Show when=move || permissions.get().can_favorite_locations>
                                <li>
                                    <A
                                        href=paths::FAVORITES
                                        attr:class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Favoritos"
                                    </A>
                                </li>
                            </Show>
                            <Show when=move || permissions.get().is_producer>
                                <li>
                                    <A
                                        href=paths::MY_LOCATIONS
                                        attr:class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Minhas Feiras"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href=paths::PRODUCTS
                                        attr:class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Produtos"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href=paths::STATS
                                        attr:class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Estatísticas"
                                    </A>
                                </li>
                            </Show>
                            <Show when=move || permissions.get().can_send_messages>
                                <li>
                                    <A
                                        href=paths::MESSAGES
                                        attr:class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Mensagens"
                                    </A>
                                </li>
                            </Show>
                            <li>
                                <Show
                                    when=move || auth.is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <div class="flex flex-col md:flex-row md:items-center md:space-x-4">
                                                <A
                                                    href=paths::LOGIN
                                                    attr:class=NAV_LINK
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Entrar"
                                                </A>
                                                <A
                                                    href=paths::REGISTER
                                                    attr:class=NAV_LINK
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Cadastrar"
                                                </A>
                                            </div>
                                        }
                                    }
                                >
                                    <div class="flex flex-col md:flex-row md:items-center md:space-x-4">
                                        <A
                                            href=paths::PROFILE
                                            attr:class=NAV_LINK
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {move || greeting.get()}
                                        </A>
                                        <button
                                            type="button"
                                            class=NAV_LINK
                                            on:click=move |_| {
                                                auth.logout();
                                                set_menu_open.set(false);
                                                if let Some(window) = web_sys::window() {
                                                    let _ = window.location().set_href(paths::LOGIN);
                                                }
                                            }
                                        >
                                            "Sair"
                                        </button>
                                    </div>
                                </Show>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}
