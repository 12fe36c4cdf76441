//! Animated line field drawn entirely in a fragment shader.

use crate::config::FieldConfig;
use crate::lifecycle::{FrameTick, Size};

/// Two triangles covering clip space.
pub const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, //
    -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
];

pub const VERTEX_SHADER: &str = r#"
attribute vec2 a_position;

void main() {
  gl_Position = vec4(a_position, 0.0, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"
precision highp float;

uniform vec2 u_resolution;
uniform float u_time;
uniform float u_opacity;

const float SPEED = 0.1;
const float EDGE = 0.015;
const float SCALE = 5.0;
const float MIN_WIDTH = 0.01;
const float MAX_WIDTH = 0.2;
const float LINE_SPEED = 1.0 * SPEED;
const float LINE_AMPLITUDE = 1.0;
const float LINE_FREQUENCY = 0.2;
const float WARP_SPEED = 0.2 * SPEED;
const float WARP_FREQUENCY = 0.5;
const float WARP_AMPLITUDE = 1.0;
const float OFFSET_FREQUENCY = 0.5;
const float OFFSET_SPEED = 1.33 * SPEED;
const float MIN_SPREAD = 0.6;
const float MAX_SPREAD = 2.0;
const int LINES = 16;

const vec3 PURPLE = vec3(0.545, 0.361, 0.965);
const vec3 CYAN = vec3(0.024, 0.714, 0.831);
const vec3 PINK = vec3(0.925, 0.282, 0.600);

float noise(float t) {
  return (cos(t) + cos(t * 1.3 + 1.3) + cos(t * 1.4 + 1.4)) / 3.0;
}

float plasma_y(float x, float fade, float offset) {
  return noise(x * LINE_FREQUENCY + u_time * LINE_SPEED) * fade * LINE_AMPLITUDE + offset;
}

float soft_line(float pos, float half_width, float t) {
  return smoothstep(half_width, 0.0, abs(pos - t));
}

float crisp_line(float pos, float half_width, float t) {
  return smoothstep(half_width + EDGE, half_width, abs(pos - t));
}

float dot_at(vec2 pos, float radius, vec2 p) {
  return smoothstep(radius + EDGE, radius, length(p - pos));
}

void main() {
  vec2 frag = gl_FragCoord.xy;
  vec2 uv = frag / u_resolution;
  vec2 space = (frag - u_resolution / 2.0) / u_resolution.x * 2.0 * SCALE;

  float fade_x = 1.0 - (cos(uv.x * 6.28) * 0.5 + 0.5);

  space.y += noise(space.x * WARP_FREQUENCY + u_time * WARP_SPEED) * WARP_AMPLITUDE * (0.5 + fade_x);
  space.x += noise(space.y * WARP_FREQUENCY + u_time * WARP_SPEED + 2.0) * WARP_AMPLITUDE * fade_x;

  vec3 lines = vec3(0.0);
  for (int l = 0; l < LINES; l++) {
    float n = float(l) / float(LINES);
    float offset_time = u_time * OFFSET_SPEED;
    float offset_pos = float(l) + space.x * OFFSET_FREQUENCY;
    float r = noise(offset_pos + offset_time) * 0.5 + 0.5;
    float half_width = mix(MIN_WIDTH, MAX_WIDTH, r * fade_x) / 2.0;
    float offset = noise(offset_pos + offset_time * (1.0 + n)) * mix(MIN_SPREAD, MAX_SPREAD, fade_x);
    float y = plasma_y(space.x, fade_x, offset);
    float line = soft_line(y, half_width, space.y) / 2.0 + crisp_line(y, half_width * 0.15, space.y);

    float cx = mod(float(l) + u_time * LINE_SPEED, 25.0) - 12.0;
    line += dot_at(vec2(cx, plasma_y(cx, fade_x, offset)), 0.01, space) * 4.0;

    vec3 tint = mix(mix(PURPLE, CYAN, n), PINK, n * 0.15);
    lines += line * tint * r;
  }

  float intensity = (lines.r + lines.g + lines.b) / 3.0;
  gl_FragColor = vec4(lines * u_opacity, intensity * u_opacity);
}
"#;

/// Values uploaded to the fragment shader each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub opacity: f32,
}

/// CPU side of the line field: only uniforms change between frames.
#[derive(Debug, Clone)]
pub struct ShaderField {
    uniforms: FieldUniforms,
}

impl ShaderField {
    pub fn new(config: &FieldConfig, size: Size) -> Self {
        Self {
            uniforms: FieldUniforms {
                resolution: [size.width as f32, size.height as f32],
                time: 0.0,
                opacity: config.opacity.clamp(0.0, 1.0),
            },
        }
    }

    pub fn resize(&mut self, size: Size) {
        self.uniforms.resolution = [size.width as f32, size.height as f32];
    }

    pub fn advance(&mut self, tick: &FrameTick) {
        self.uniforms.time = tick.elapsed as f32;
    }

    pub fn uniforms(&self) -> FieldUniforms {
        self.uniforms
    }
}
