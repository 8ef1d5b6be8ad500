mod favorites;
mod home;
mod location_detail;
mod login;
mod messages;
mod my_locations;
mod not_found;
mod products;
mod profile;
mod register;
mod settings;
mod stats;

pub(crate) use favorites::FavoritesPage;
pub(crate) use home::HomePage;
pub(crate) use location_detail::LocationDetailPage;
pub(crate) use login::LoginPage;
pub(crate) use messages::MessagesPage;
pub(crate) use my_locations::MyLocationsPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use products::ProductsPage;
pub(crate) use profile::ProfilePage;
pub(crate) use register::RegisterPage;
pub(crate) use settings::SettingsPage;
pub(crate) use stats::StatsPage;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

/// Route path constants shared by navigation, guards, and the policy module.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const FAVORITES: &str = "/favoritos";
    pub const MY_LOCATIONS: &str = "/minhas-feiras";
    pub const PRODUCTS: &str = "/produtos";
    pub const STATS: &str = "/estatisticas";
    pub const MESSAGES: &str = "/mensagens";
    pub const SETTINGS: &str = "/configuracoes";
    pub const PROFILE: &str = "/meu-perfil";

    pub fn location_detail(id: i64) -> String {
        format!("/localizacao/{id}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/home") view=|| view! { <Redirect path=paths::HOME /> } />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/localizacao/:id") view=LocationDetailPage />
            <Route path=path!("/favoritos") view=FavoritesPage />
            <Route path=path!("/minhas-feiras") view=MyLocationsPage />
            <Route path=path!("/produtos") view=ProductsPage />
            <Route path=path!("/estatisticas") view=StatsPage />
            <Route path=path!("/mensagens") view=MessagesPage />
            <Route path=path!("/configuracoes") view=SettingsPage />
            <Route path=path!("/meu-perfil") view=ProfilePage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::paths;

    #[test]
    fn location_detail_builds_the_expected_path() {
        assert_eq!(paths::location_detail(42), "/localizacao/42");
    }
}
