//! Core domain types
//!
//! This module contains the business entities shared between the store
//! (which persists and exports them) and the CLI (which creates them from
//! operator input).

pub mod asset;
pub mod details;
pub mod job;
pub mod report;

pub use asset::{Asset, NewAsset};
pub use details::{DetailField, Details};
pub use job::{Job, JobState};
pub use report::Report;
