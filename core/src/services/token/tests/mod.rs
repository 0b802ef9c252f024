//! Tests for the token scheme

#[cfg(test)]
mod service_tests;
