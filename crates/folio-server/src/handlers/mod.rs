//! HTTP request handlers.

pub(crate) mod docs;
pub(crate) mod menu;
