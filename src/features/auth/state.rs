//! Auth session state and context for the frontend. The provider hydrates the
//! session once on mount from the persisted token pair and exposes the user
//! signal plus the bootstrap flag that route guards wait on. Tokens live in
//! session storage, never in signals.

use crate::app_lib::AppError;
use crate::features::auth::{
    client, storage,
    types::{LoginCredentials, RegisterData, User},
};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
    pub is_loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context; `is_loading` starts raised only for the provider,
    /// which lowers it when bootstrap finishes.
    fn with_loading(is_loading: bool) -> Self {
        let user = RwSignal::new(None);
        let is_authenticated = Signal::derive(move || user.get().is_some());
        Self {
            user,
            is_loading: RwSignal::new(is_loading),
            is_authenticated,
        }
    }

    /// Exchanges credentials for tokens and loads the profile. The pair is
    /// persisted only after both steps succeed, so a failure anywhere leaves
    /// the session untouched.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<(), AppError> {
        let tokens = client::obtain_tokens(&credentials).await?;
        let user = client::fetch_current_user_with(&tokens.access).await?;

        storage::store_tokens(&tokens);
        storage::store_cached_user(&user);
        self.user.set(Some(user));
        Ok(())
    }

    /// Creates the account, then signs in with the same credentials. No
    /// auto-login happens when either step fails.
    pub async fn register(&self, data: RegisterData) -> Result<(), AppError> {
        let credentials = LoginCredentials {
            email: data.email.clone(),
            password: data.password.clone(),
        };

        let created = client::register(&data).await?;
        log::info!("register: {} (user id {})", created.message, created.user.id);

        self.login(credentials).await
    }

    /// Clears the persisted session and the in-memory user. Never fails; the
    /// caller decides where to navigate.
    pub fn logout(&self) {
        storage::clear();
        self.user.set(None);
    }
}

/// Provides auth context and hydrates the session once on mount. A persisted
/// access token triggers a profile fetch; any failure clears the persisted
/// session. Either way `is_loading` drops when the bootstrap is done.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::with_loading(true);
    provide_context(auth);

    spawn_local(async move {
        if storage::access_token().is_some() {
            match client::fetch_current_user().await {
                Ok(user) => {
                    storage::store_cached_user(&user);
                    auth.user.set(Some(user));
                }
                Err(err) => {
                    log::warn!("session bootstrap failed: {err}");
                    storage::clear();
                }
            }
        }
        auth.is_loading.set(false);
    });

    view! { {children()} }
}

/// Returns the current auth context or a detached empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::with_loading(false))
}
