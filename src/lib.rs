//! neodb - An in-memory database of near-Earth objects and their close approaches
//!
//! Loads NEOs from CSV and close approaches from JSON, links them, and answers
//! lookups and filtered queries. Results can be saved as CSV or JSON.

pub mod cli;
pub mod database;
pub mod executor;
pub mod index;
pub mod loader;
pub mod model;
pub mod observability;
pub mod planner;
pub mod writer;
