//! Renderer module - WebGPU rendering of the graph scene
//!
//! Re-exports only. All logic in submodules.

mod frame;
mod state;

pub use frame::render_graph;
pub use state::{initialize_gpu, resize_surface, GpuStateError};
