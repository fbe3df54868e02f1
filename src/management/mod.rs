//! Token lifecycle management.
//!
//! The [`TokenManager`] sits between the web-service handlers and the raw
//! token grants in [`crate::spotify::auth`]: it tracks expiry and refreshes
//! the session token on demand. Tokens live only in memory for the span of
//! one server process; there is no persistence.

mod token;

pub use token::TokenManager;
