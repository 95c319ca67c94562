//! Common test utilities for progress-sink scenario tests.
//!
//! - Fixtures: reusable error chains and config content
//! - `SharedBuffer`: a `Write` target tests can read back


pub use fixtures::*;
