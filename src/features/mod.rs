//! Domain-level frontend features (auth, locations, favorites, products) and
//! their shared logic. Routes import these modules to keep view code focused
//! while keeping session handling and API access in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod favorites;
pub(crate) mod locations;
pub(crate) mod products;
