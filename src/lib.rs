//! Tetromino engine (workspace facade crate).
//!
//! Re-exports the simulation core and the shared types under stable paths
//! (`tetromino_engine::{core, types}`) and hosts the headless replay driver.

pub use tetromino_engine_core as core;
pub use tetromino_engine_types as types;

pub mod demo;
