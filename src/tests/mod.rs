//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const STANDARDIZED_STRING`
//! * `const COPT_STRING`
//! * `const SOLVER_RESPONSE_STRING`
//! * `fn canonical_form()`
//! * `fn snapshots()`
