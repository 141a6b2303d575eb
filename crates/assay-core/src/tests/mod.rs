//! In-crate behavioural tests for the harness itself.
//!
//! | Module | Covers |
//! |--------|--------|
//! | `mocks` | canned bodies shared by the other modules |
//! | `scenarios` | end-to-end runs and their printed transcripts |
//! | `properties` | counting and inversion invariants over generated suites |
