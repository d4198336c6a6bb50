//! Ovenside Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod locale;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;
