//! Algorithms applied to parsed coordinates.

pub mod reproject;
