//! Command-line support for the `configref` binary.
//!
//! Provides the styling helpers used to report results and errors.

pub mod formatting;
