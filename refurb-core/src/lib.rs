//! Refurb Core
//!
//! Core types and business rules for refurbished-electronics intake.
//!
//! This crate contains:
//! - Domain types: Asset, Job, Report and the detail choice lists
//! - Identifier allocation for assets and jobs
//! - The pricing rule used to cost a closed job
//!
//! Note: Persistence and export live in refurb-store, operator interaction in refurb-cli.

pub mod domain;
pub mod error;
pub mod ids;
pub mod pricing;

pub use error::{CoreError, Result};
