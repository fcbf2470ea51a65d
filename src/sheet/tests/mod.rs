//! Tests for the sheet domain model

mod direction_tests;
mod layout_tests;
