//! HTTP route handlers

pub mod rum;
