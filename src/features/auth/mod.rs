//! Authentication feature: session state, token persistence, role policy, and
//! route guards. It keeps authentication logic out of the UI and must stay
//! aligned with backend contract expectations. This module touches security
//! boundaries and must avoid logging token material.
//!
//! Flow Overview: Login exchanges credentials for a token pair and hydrates
//! the profile before persisting anything. Register creates the account and
//! signs in with the same credentials. The guards consume the pure policy in
//! `permissions` and wait on the provider's bootstrap flag.

pub(crate) mod client;
pub(crate) mod guards;
pub(crate) mod permissions;
pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod types;

pub(crate) use guards::{RequireAuth, RequireConsumer, RequireProducer};
