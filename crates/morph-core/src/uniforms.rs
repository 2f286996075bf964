//! Renderer-facing frame data.

use crate::constants::{DISPERSION_MULTIPLIER, ZOOM_SCALE};
use crate::gesture::GestureState;
use glam::Vec3;

/// Scalar uniforms for the particle shader.
/// Layout must match the host's uniform block: 8 x f32, 32 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderUniforms {
    pub time: f32,
    pub dispersion: f32,
    pub pinch: f32,
    pub zoom: f32,
    pub rotation: f32,
    pub _pad: [f32; 3],
}

impl RenderUniforms {
    pub fn from_gesture(g: &GestureState, time_sec: f64) -> Self {
        Self {
            time: time_sec as f32,
            dispersion: (g.openness - 0.5) * 2.0 * DISPERSION_MULTIPLIER,
            pinch: g.pinch,
            zoom: if g.two_hands_present {
                g.hands_distance * ZOOM_SCALE
            } else {
                1.0
            },
            rotation: g.rotation,
            _pad: [0.0; 3],
        }
    }
}

/// Read-only view of everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderFrame<'a> {
    pub positions: &'a [Vec3],
    pub seeds: &'a [Vec3],
    pub colors: &'a [[f32; 3]],
    pub base_color: [f32; 3],
    pub uniforms: RenderUniforms,
}

impl<'a> RenderFrame<'a> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as a flat `x, y, z, ...` slice for buffer uploads.
    pub fn position_floats(&self) -> &'a [f32] {
        bytemuck::cast_slice(self.positions)
    }

    pub fn color_floats(&self) -> &'a [f32] {
        bytemuck::cast_slice(self.colors)
    }
}
