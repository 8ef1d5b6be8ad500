//! Shared UI components exported for routes and features.

pub(crate) mod layout;
mod location_card;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
pub(crate) use location_card::LocationCard;
pub(crate) use ui::{Alert, AlertKind, Button, Modal, SearchBar, Spinner};
