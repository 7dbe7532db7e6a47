//! Shared test fixtures for Dropslot crates.
//!
//! This crate provides authored catalogs and placement helpers for
//! testing. It depends only on `dropslot-core` and `dropslot-scoring`
//! to stay usable as a dev-dependency everywhere, including the engine.
//!
//! - [`blocks`] - the five-stage block-builder puzzle
//! - [`evidence`] - the evidence classification exercise (multi-slot buckets)
//! - [`team`] - the team assignment roster with profiles and requirements
//! - [`placement`] - a plain map-backed [`PlacementView`](dropslot_scoring::PlacementView)
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! dropslot-test = { workspace = true }
//! ```

pub mod blocks;
pub mod evidence;
pub mod placement;
pub mod team;

pub use placement::MapPlacement;
