//! Shared domain types for the restaurant menu catalog.
//!
//! Everything here is plain data: the persisted [`food::FoodRecord`], the
//! transient [`food::FoodDraft`] edited by the forms, and the error type
//! shared by the development server.

pub mod error;
pub mod food;
pub mod types;
