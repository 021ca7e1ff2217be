//! Crate-level tests
//!
//! Properties that hold across every input type, plus the reference scenarios.
