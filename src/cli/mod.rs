//! # CLI Module
//!
//! User-facing commands. Each command wires the library pieces together and
//! handles reporting, progress feedback and fatal-error presentation; the
//! actual logic lives in [`crate::discovery`], [`crate::spotify`] and
//! [`crate::server`].
//!
//! ## Commands
//!
//! - [`discover`] - Run-to-completion discovery pipeline: acquire a
//!   client-credentials token, fetch recommendations for the seed artists,
//!   batch-fetch artist details, filter by the smallness thresholds, print a
//!   table and persist a CSV artifact.
//! - [`serve`] - Run the OAuth web service until externally terminated.
//!
//! ## Error Handling Philosophy
//!
//! The discovery pipeline has no recovery path: any upstream failure
//! terminates the run through the `error!` macro (exit code 1). Malformed
//! seed URIs are the one recoverable input problem and are skipped with a
//! warning. The web service never exits on upstream failures.

mod discover;
mod serve;

pub use discover::discover;
pub use serve::serve;
