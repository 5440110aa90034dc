//! Property catalog filtering for the real-estate showcase
//!
//! The filter engine ([`filter::filter_properties`]) is a pure, stable filter
//! over a read-only catalog. Everything around it (catalog providers, form
//! normalisation, text rendering) feeds it typed input or presents its output.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod filter;
pub mod models;
