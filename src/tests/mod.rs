//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the whole page through key and mouse
//! events and assert on state, sink calls, and the rendered screen.
