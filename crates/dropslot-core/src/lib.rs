//! Dropslot Core - Core types for the Dropslot placement engine
//!
//! This crate provides the fundamental abstractions for Dropslot:
//! - Catalog types describing the items and targets of one exercise
//! - The percentage score reported on exercise completion
//! - The shared error type

pub mod catalog;
pub mod error;
pub mod score;

pub use catalog::{Catalog, Category, Item, ItemId, Target, TargetId};
pub use error::DropslotError;
pub use score::{PercentScore, ScoreParseError};
