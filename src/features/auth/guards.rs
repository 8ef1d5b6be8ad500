//! Navigation gates for protected routes. The decision itself is a pure
//! function over the declared requirement and the live session snapshot; the
//! components around it render a waiting state while the session bootstraps
//! and redirect once a denial is final. Real access control stays on the API.

use crate::components::Spinner;
use crate::features::auth::permissions;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{User, UserRole};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Declared policy for a navigation target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    pub require_auth: bool,
    pub require_role: Option<UserRole>,
}

impl RouteRequirement {
    pub const fn authenticated() -> Self {
        Self {
            require_auth: true,
            require_role: None,
        }
    }

    pub const fn role(role: UserRole) -> Self {
        Self {
            require_auth: true,
            require_role: Some(role),
        }
    }
}

/// Outcome of evaluating a requirement against the session state. `Loading`
/// is the only non-terminal state and resolves once bootstrap finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Allow,
    RedirectToLogin,
    RedirectToRoot,
}

/// Evaluates a navigation requirement. Auth is checked before role, so an
/// unauthenticated user hitting a role-gated route lands on the login screen
/// rather than the root.
pub fn decide(
    requirement: RouteRequirement,
    is_loading: bool,
    user: Option<&User>,
) -> GuardDecision {
    if is_loading {
        return GuardDecision::Loading;
    }

    if requirement.require_auth && !permissions::is_authenticated(user) {
        return GuardDecision::RedirectToLogin;
    }

    match requirement.require_role {
        Some(UserRole::Consumer) if !permissions::is_consumer(user) => {
            GuardDecision::RedirectToRoot
        }
        Some(UserRole::Producer) if !permissions::is_producer(user) => {
            GuardDecision::RedirectToRoot
        }
        _ => GuardDecision::Allow,
    }
}

/// Renders children for any authenticated user.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! { <Guard requirement=RouteRequirement::authenticated() children=children /> }
}

/// Renders children for authenticated consumers only.
#[component]
pub fn RequireConsumer(children: ChildrenFn) -> impl IntoView {
    view! { <Guard requirement=RouteRequirement::role(UserRole::Consumer) children=children /> }
}

/// Renders children for authenticated producers only.
#[component]
pub fn RequireProducer(children: ChildrenFn) -> impl IntoView {
    view! { <Guard requirement=RouteRequirement::role(UserRole::Producer) children=children /> }
}

#[component]
fn Guard(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let decision = Signal::derive(move || {
        auth.user
            .with(|user| decide(requirement, auth.is_loading.get(), user.as_ref()))
    });

    Effect::new(move |_| match decision.get() {
        GuardDecision::RedirectToLogin => navigate(paths::LOGIN, Default::default()),
        GuardDecision::RedirectToRoot => navigate(paths::HOME, Default::default()),
        GuardDecision::Loading | GuardDecision::Allow => {}
    });

    view! {
        {move || match decision.get() {
            GuardDecision::Allow => children().into_any(),
            _ => {
                view! {
                    <div class="flex justify-center items-center min-h-[50vh]">
                        <Spinner />
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: 1,
            email: "teste@example.com".to_string(),
            first_name: "Teste".to_string(),
            last_name: "Silva".to_string(),
            full_name: "Teste Silva".to_string(),
            user_type: role,
            phone: String::new(),
            avatar: None,
            is_active: Some(true),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn loading_session_always_waits() {
        let consumer = user(UserRole::Consumer);
        for requirement in [
            RouteRequirement::default(),
            RouteRequirement::authenticated(),
            RouteRequirement::role(UserRole::Producer),
        ] {
            assert_eq!(
                decide(requirement, true, Some(&consumer)),
                GuardDecision::Loading
            );
            assert_eq!(decide(requirement, true, None), GuardDecision::Loading);
        }
    }

    #[test]
    fn missing_auth_redirects_to_login() {
        assert_eq!(
            decide(RouteRequirement::authenticated(), false, None),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn deactivated_user_counts_as_unauthenticated() {
        let mut deactivated = user(UserRole::Consumer);
        deactivated.is_active = Some(false);

        assert_eq!(
            decide(RouteRequirement::authenticated(), false, Some(&deactivated)),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn wrong_role_redirects_to_root() {
        let consumer = user(UserRole::Consumer);
        assert_eq!(
            decide(
                RouteRequirement::role(UserRole::Producer),
                false,
                Some(&consumer)
            ),
            GuardDecision::RedirectToRoot
        );

        let producer = user(UserRole::Producer);
        assert_eq!(
            decide(
                RouteRequirement::role(UserRole::Consumer),
                false,
                Some(&producer)
            ),
            GuardDecision::RedirectToRoot
        );
    }

    #[test]
    fn satisfied_requirements_allow() {
        let producer = user(UserRole::Producer);
        assert_eq!(
            decide(RouteRequirement::default(), false, None),
            GuardDecision::Allow
        );
        assert_eq!(
            decide(RouteRequirement::authenticated(), false, Some(&producer)),
            GuardDecision::Allow
        );
        assert_eq!(
            decide(
                RouteRequirement::role(UserRole::Producer),
                false,
                Some(&producer)
            ),
            GuardDecision::Allow
        );
    }
}
