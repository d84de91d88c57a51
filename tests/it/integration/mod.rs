//! Integration tests for EasyTable.
//!
//! These tests drive a `TableController` through complete workflows and
//! check the grid, the view state and the rendered output together.

mod property_tests;
mod workflow_tests;
