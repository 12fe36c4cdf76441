//! Rolling dotted surface seen from a low camera.

use glam::{Mat4, Vec3};

use crate::config::SurfaceConfig;
use crate::lifecycle::Size;
use crate::palette::{NEON_CYAN, NEON_PURPLE};

/// Square points with perspective size attenuation.
pub const POINT_VERTEX_SHADER: &str = r#"
attribute vec3 a_position;
attribute vec3 a_color;

uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_point_size;
uniform float u_scale;

varying vec3 v_color;

void main() {
  vec4 eye = u_view * vec4(a_position, 1.0);
  gl_PointSize = u_point_size * (u_scale / -eye.z);
  gl_Position = u_projection * eye;
  v_color = a_color;
}
"#;

pub const POINT_FRAGMENT_SHADER: &str = r#"
precision mediump float;

uniform float u_opacity;

varying vec3 v_color;

void main() {
  gl_FragColor = vec4(v_color, u_opacity);
}
"#;

/// Perspective camera looking across the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub target: Vec3,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            fov_y_deg: 55.0,
            aspect,
            near: 1.0,
            far: 10_000.0,
            eye: Vec3::new(0.0, 35.0, 180.0),
            target: Vec3::new(0.0, 0.0, -50.0),
        }
    }

    pub fn set_aspect(&mut self, size: Size) {
        self.aspect = size.aspect();
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Grid of points whose heights follow two crossing sine waves.
pub struct DottedSurface {
    columns: usize,
    rows: usize,
    /// xyz per point, column-major.
    positions: Vec<f32>,
    /// rgb per point in 0..1.
    colors: Vec<f32>,
    camera: Camera,
}

impl DottedSurface {
    pub fn new(config: &SurfaceConfig, size: Size) -> Self {
        let (columns, rows) = (config.columns, config.rows);
        let sep = config.separation;
        let total = columns * rows;
        let mut positions = Vec::with_capacity(total * 3);
        let mut colors = Vec::with_capacity(total * 3);

        let half_x = columns as f32 * sep / 2.0;
        let half_z = rows as f32 * sep / 2.0;
        for ix in 0..columns {
            let tint = NEON_PURPLE
                .lerp(NEON_CYAN, ix as f32 / columns as f32)
                .to_unit();
            for iz in 0..rows {
                positions.extend_from_slice(&[
                    ix as f32 * sep - half_x,
                    0.0,
                    iz as f32 * sep - half_z,
                ]);
                colors.extend_from_slice(&tint);
            }
        }

        Self {
            columns,
            rows,
            positions,
            colors,
            camera: Camera::new(size.aspect()),
        }
    }

    /// Recompute every height for `elapsed` seconds.
    pub fn update(&mut self, elapsed: f32) {
        let mut idx = 1;
        for ix in 0..self.columns {
            let a = wave(ix as f32 * 0.3 + elapsed * 0.8);
            for iz in 0..self.rows {
                self.positions[idx] = a + wave(iz as f32 * 0.4 + elapsed * 0.6);
                idx += 3;
            }
        }
    }

    pub fn resize(&mut self, size: Size) {
        self.camera.set_aspect(size);
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn point_count(&self) -> usize {
        self.columns * self.rows
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Height of the point at grid cell `(ix, iz)`.
    pub fn height_at(&self, ix: usize, iz: usize) -> f32 {
        self.positions[(ix * self.rows + iz) * 3 + 1]
    }
}

fn wave(phase: f32) -> f32 {
    phase.sin() * 4.0
}
