//! REST API endpoint tests

mod health_tests;
mod sidebar_tests;
