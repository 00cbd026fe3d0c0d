//! atlasnote - Sprite atlas description annotator
//!
//! This library provides functionality to:
//! - Load a sprite-sheet metadata document and its sibling atlas image
//! - Sample each frame's average non-transparent pixel color
//! - Parse frame filenames into base type, size, and variant tokens
//! - Assemble a short human-readable description per frame
//! - Rewrite the document in place with the descriptions filled in

pub mod cli;
pub mod color;
pub mod describe;
pub mod document;
pub mod models;
pub mod parser;
pub mod sampler;
