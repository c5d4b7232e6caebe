//! quizforge-core — Question extraction engine, grading, and data model.
//!
//! This crate defines the fundamental data model, the heuristic MCQ
//! extraction engine with its layered fallback strategies, and the grading
//! logic that the rest of the quizforge system builds on.

pub mod engine;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod generator;
pub mod grading;
pub mod mashed;
pub mod model;
