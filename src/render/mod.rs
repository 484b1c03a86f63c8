//! Rasterization of shape geometry, standing in for a UI toolkit when previewing widgets.

/// `vello_cpu` rasterizer.
pub mod cpu;
