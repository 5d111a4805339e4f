//! Domain types shared across the cesta workspace
//!
//! This crate provides the wire-level models for product categorization:
//! - ProductRecord: a single scraped listing entry
//! - Category: a cluster of equivalent listings in the output
//!
//! These types mirror the JSON exchanged with the scraping side and carry
//! no matching logic of their own.

pub mod category;
pub mod product;

pub use category::*;
pub use product::*;
