//! Main renderer module.
//!
//! This module contains submodules for uniform management, vertex definitions, geometry
//! assembly and the wgpu renderer implementation.

/// Pipeline building utilities for WGPU.
pub mod pipeline_builder;
/// Scene geometry assembled in painter's order.
pub mod scene_mesh;
/// Tessellation of spheres, quads, strips and lines.
pub mod shapes;
/// View-projection uniform buffer.
pub mod uniform;
/// Vertex layout shared by every pipeline.
pub mod vertex;
/// Core WGPU context and frame rendering.
pub mod wgpu_lib;
