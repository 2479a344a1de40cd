//! # dropshell-api - Remote Instance Listing
//!
//! Everything that talks to the DigitalOcean REST API: credential
//! acquisition, the paginated droplet listing client, the [`PageSource`]
//! seam used by the interactive selector, and the non-interactive table
//! listing.
//!
//! ## Public API
//!
//! - [`Authenticator`], [`EnvAuthenticator`], [`ApiCredential`] - access token acquisition
//! - [`DropletsClient`], [`ClientOptions`] - HTTP client for `GET /v2/droplets`
//! - [`PageSource`] / [`LocalPageSource`] - one page of [`InstanceSummary`] per call
//! - [`listing`] - fetch-all, sort and table rendering for `droplet list`
//!
//! [`InstanceSummary`]: dropshell_core::InstanceSummary

pub mod auth;
pub mod client;
pub mod listing;
pub mod page_source;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use auth::{ApiCredential, Authenticator, EnvAuthenticator, DEFAULT_TOKEN_ENV};
pub use client::{ClientOptions, DropletsClient, DEFAULT_BASE_URL};
pub use page_source::{LocalPageSource, PageSource};
pub use protocol::{Droplet, DropletsPage};
