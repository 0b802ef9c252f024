//! Tests for metrics backends

#[cfg(test)]
mod factory_tests;
