//! Crew pairing file parsing server.
//!
//! Ingests the plain-text export of an airline crew pairing document and
//! turns it into structured trip records: pairings, their flight legs,
//! hotel layovers, and aggregate time/pay totals.

pub mod cache;
pub mod domain;
pub mod extract;
pub mod parser;
pub mod web;
