//! Cache-busting filename generator
//!
//! Copies a file to a name that embeds an MD5 digest of its contents, so a
//! changed file always gets a new URL and stale client caches are bypassed.
//!
//! ```no_run
//! use buster::{bust, BustConfig};
//!
//! let outcome = bust(&BustConfig::new("static/logo.png").with_prefix("app"))?;
//! println!("{}", outcome.file_name());
//! # Ok::<(), buster::BustError>(())
//! ```

pub mod bust;
pub mod cli;
pub mod error;
pub mod inspect;

// Re-export commonly used types
pub use bust::{bust, plan, BustConfig, BustOutcome, BustPlan, DerivedName};
pub use error::{BustError, BustResult};
pub use inspect::PathParts;
