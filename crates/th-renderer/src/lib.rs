//! Transform Handles Renderer
//!
//! Immediate-mode geometry for the handles computed by `th-core`.
//!
//! # Architecture
//!
//! - [`batch::BatchedDrawCollector`] - Per-frame line, triangle and quad buffers
//! - [`batch::DrawBackend`] - Trait the host implements to submit a batch
//! - [`handles::HandleRenderer`] - Collects the current handle kind and flushes it
//!
//! Geometry is placed with the same resolver functions the hover detectors
//! pick against, so what is drawn is what is hovered.
//!
//! # Module Structure
//!
//! ```text
//! th-renderer/
//! ├── batch.rs         # Collector, topology, backend trait
//! ├── constants.rs     # Widths, alphas, proportions
//! ├── handles/         # Translation, rotation and scale geometry
//! └── vertex.rs        # GizmoVertex (bytemuck Pod)
//! ```

pub mod batch;
pub mod constants;
pub mod handles;
pub mod vertex;

pub use batch::{BatchedDrawCollector, DrawBackend, PrimitiveTopology};
pub use handles::{HandleRenderer, collect_handles};
pub use vertex::GizmoVertex;
