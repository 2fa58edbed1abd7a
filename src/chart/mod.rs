//! Surface-independent chart pipeline: scales, ticks and line geometry.
//!
//! ```text
//!   Series ──► scale::Scales ──► geometry::line ──► LineGeometry
//!                   │                                   │
//!                   ▼                                   ▼
//!              axis ticks                 ui::chart (egui) / svg (file)
//! ```

pub mod axis;
pub mod geometry;
pub mod scale;
pub mod svg;
