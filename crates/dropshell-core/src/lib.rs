//! # dropshell-core - Core Domain Types
//!
//! Foundation crate for dropshell. Provides the instance and page types
//! shared by the listing client, the selector and the session launcher,
//! plus error handling, logging setup and address classification.
//!
//! ## Public API
//!
//! - [`InstanceSummary`], [`Page`] - normalized listing records
//! - [`Error`], [`ErrorCategory`], [`Result`] - error handling
//! - [`classify_addresses()`], [`is_private_addr()`] - address classification
//! - [`logging::init()`] - file-backed tracing subscriber
//! - [`signals::ShutdownSignals`] - SIGINT/SIGTERM listener
//!
//! ## Prelude
//!
//! ```rust
//! use dropshell_core::prelude::*;
//! ```

pub mod error;
pub mod instance;
pub mod logging;
pub mod network;
pub mod signals;

/// Prelude for common imports used throughout all dropshell crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, ErrorCategory, Result};
pub use instance::{InstanceSummary, Page};
pub use network::{classify_addresses, is_private_addr};
