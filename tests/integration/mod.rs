//! Integration test suite for the Finery tour.
//!
//! These tests exercise the full update loop: store writes, consumer
//! reactions, keyboard and mouse dispatch, and render snapshots. They
//! verify that all components work together correctly.
//!
//! # Test Categories
//!
//! - `store_contract`: The shared store's notification and write semantics
//! - `pullout_machine`: The code pullout's open/close paths and the
//!   scoped Escape listener
//! - `theme_sidebar`: Theme exclusivity and sidebar toggling
//! - `navigation`: Route cycling, card selection, and clipboard commands
//!
//! # CI Compatibility
//!
//! No test touches the terminal or the system clipboard; everything runs
//! against the model and synthetic events.

mod fixtures;

mod navigation;
mod pullout_machine;
mod store_contract;
mod theme_sidebar;
