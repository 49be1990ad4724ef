//! HTTP side of the storefront: routes, request payloads, and the page
//! handlers that drive the form state.
pub mod handlers_forms;
pub mod handlers_pages;
mod models;
pub mod router;
#[cfg(test)]
pub(crate) mod test_utils;
