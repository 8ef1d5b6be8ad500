//! Role policy over the current-user snapshot. Every function here is a pure
//! predicate: same snapshot in, same decision out, no I/O. Screens that need
//! several decisions at once take a [`Permissions`] snapshot instead of
//! re-deriving booleans ad hoc.

use crate::features::auth::types::{User, UserRole};
use crate::routes::paths;

/// A user counts as authenticated when present and not explicitly
/// deactivated; an absent `is_active` flag means active.
pub fn is_authenticated(user: Option<&User>) -> bool {
    user.is_some_and(|user| user.is_active != Some(false))
}

pub fn is_consumer(user: Option<&User>) -> bool {
    is_authenticated(user) && user.is_some_and(|user| user.user_type == UserRole::Consumer)
}

pub fn is_producer(user: Option<&User>) -> bool {
    is_authenticated(user) && user.is_some_and(|user| user.user_type == UserRole::Producer)
}

/// Whether the user may manage a specific location, keyed by its producer id.
pub fn can_manage_location(user: Option<&User>, producer_id: i64) -> bool {
    is_producer(user) && user.is_some_and(|user| user.id == producer_id)
}

/// Favoriting is a consumer capability; producers browse without favorites.
pub fn can_favorite_locations(user: Option<&User>) -> bool {
    is_consumer(user)
}

/// Messaging is open to both roles once authenticated.
pub fn can_send_messages(user: Option<&User>) -> bool {
    is_authenticated(user)
}

/// Whether the profile still misses required name fields. Both role branches
/// currently apply the same rule.
pub fn needs_profile_completion(user: Option<&User>) -> bool {
    if !is_authenticated(user) {
        return false;
    }
    let Some(user) = user else {
        return false;
    };

    if is_producer(Some(user)) {
        return user.first_name.is_empty() || user.last_name.is_empty();
    }

    user.first_name.is_empty() || user.last_name.is_empty()
}

/// Landing route after login, by role.
pub fn home_route_for(user: Option<&User>) -> &'static str {
    if !is_authenticated(user) {
        return paths::HOME;
    }

    if is_producer(user) {
        return paths::MY_LOCATIONS;
    }

    paths::HOME
}

/// Capability snapshot computed once per render cycle and passed down to
/// views, instead of each view re-deriving role booleans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Permissions {
    pub is_authenticated: bool,
    pub is_consumer: bool,
    pub is_producer: bool,
    pub can_favorite_locations: bool,
    pub can_send_messages: bool,
    pub needs_profile_completion: bool,
    pub home_route: &'static str,
}

impl Permissions {
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            is_authenticated: is_authenticated(user),
            is_consumer: is_consumer(user),
            is_producer: is_producer(user),
            can_favorite_locations: can_favorite_locations(user),
            can_send_messages: can_send_messages(user),
            needs_profile_completion: needs_profile_completion(user),
            home_route: home_route_for(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: 42,
            email: "ana@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Costa".to_string(),
            full_name: "Ana Costa".to_string(),
            user_type: role,
            phone: String::new(),
            avatar: None,
            is_active: Some(true),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn absent_user_is_not_authenticated() {
        assert!(!is_authenticated(None));
        assert!(!is_consumer(None));
        assert!(!is_producer(None));
    }

    #[test]
    fn deactivated_user_is_not_authenticated() {
        let mut deactivated = user(UserRole::Consumer);
        deactivated.is_active = Some(false);

        assert!(!is_authenticated(Some(&deactivated)));
        assert!(!is_consumer(Some(&deactivated)));
        assert!(!can_favorite_locations(Some(&deactivated)));
    }

    #[test]
    fn missing_active_flag_defaults_to_active() {
        let mut unknown = user(UserRole::Consumer);
        unknown.is_active = None;

        assert!(is_authenticated(Some(&unknown)));
    }

    #[test]
    fn roles_are_mutually_exclusive() {
        for role in [UserRole::Consumer, UserRole::Producer] {
            let user = user(role);
            assert_ne!(is_consumer(Some(&user)), is_producer(Some(&user)));
        }
    }

    #[test]
    fn location_management_requires_matching_producer_id() {
        let producer = user(UserRole::Producer);

        assert!(can_manage_location(Some(&producer), 42));
        assert!(!can_manage_location(Some(&producer), 43));
        assert!(!can_manage_location(Some(&user(UserRole::Consumer)), 42));
        assert!(!can_manage_location(None, 42));
    }

    #[test]
    fn favoriting_is_consumer_only_and_messaging_is_both() {
        let consumer = user(UserRole::Consumer);
        let producer = user(UserRole::Producer);

        assert!(can_favorite_locations(Some(&consumer)));
        assert!(!can_favorite_locations(Some(&producer)));
        assert!(can_send_messages(Some(&consumer)));
        assert!(can_send_messages(Some(&producer)));
        assert!(!can_send_messages(None));
    }

    #[test]
    fn profile_completion_checks_name_fields_for_both_roles() {
        for role in [UserRole::Consumer, UserRole::Producer] {
            let mut incomplete = user(role);
            incomplete.first_name = String::new();

            assert!(needs_profile_completion(Some(&incomplete)));
            assert!(!needs_profile_completion(Some(&user(role))));
        }
        assert!(!needs_profile_completion(None));
    }

    #[test]
    fn home_route_depends_on_role() {
        assert_eq!(home_route_for(None), paths::HOME);
        assert_eq!(home_route_for(Some(&user(UserRole::Consumer))), paths::HOME);
        assert_eq!(
            home_route_for(Some(&user(UserRole::Producer))),
            paths::MY_LOCATIONS
        );
    }

    #[test]
    fn snapshot_matches_the_individual_predicates() {
        let producer = user(UserRole::Producer);
        let snapshot = Permissions::for_user(Some(&producer));

        assert!(snapshot.is_authenticated);
        assert!(snapshot.is_producer);
        assert!(!snapshot.is_consumer);
        assert!(!snapshot.can_favorite_locations);
        assert!(snapshot.can_send_messages);
        assert!(!snapshot.needs_profile_completion);
        assert_eq!(snapshot.home_route, paths::MY_LOCATIONS);
    }
}
