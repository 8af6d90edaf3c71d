//! Property-based tests for the receipt calculator
//!
//! These check that the operations behave as pure functions and that the
//! composition keeps its ordering for all inputs within realistic bounds.
