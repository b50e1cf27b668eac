//! Roadmap engine: road geometry, scroll-linked reveal and landmark layout.
//!
//! Recomputation always runs geometry → measurement → marker placement;
//! a measurement only applies to the path it was taken from.

pub mod curriculum;
pub mod geometry;
pub mod markers;
pub mod measure;
pub mod profile;
pub mod scroll;
pub mod tracks;
pub mod view;

pub use view::RoadmapView;
