//! Integration tests for the daybook data-access core

mod config_integration;
mod records_api;
mod store_integration;
