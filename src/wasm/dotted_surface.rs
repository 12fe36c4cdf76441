use web_sys::{
    Element, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlUniformLocation,
};

use super::gl::{self, Program};
use super::render::{self, Mounted};
use crate::config::{FxConfig, SurfaceConfig};
use crate::error::FxResult;
use crate::lifecycle::{Effect, FrameTick, Size};
use crate::surface::{DottedSurface, POINT_FRAGMENT_SHADER, POINT_VERTEX_SHADER};

struct Uniforms {
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    scale: Option<WebGlUniformLocation>,
}

struct GlResources {
    program: Program,
    positions: WebGlBuffer,
    colors: WebGlBuffer,
}

struct DottedSurfaceGl {
    canvas: HtmlCanvasElement,
    gl: GL,
    surface: DottedSurface,
    uniforms: Uniforms,
    resources: Option<GlResources>,
    max_pixel_ratio: f64,
}

impl DottedSurfaceGl {
    fn new(canvas: &HtmlCanvasElement, size: Size, config: &SurfaceConfig) -> FxResult<Self> {
        let gl = gl::context(canvas, false)?;
        let surface = DottedSurface::new(config, size);

        let program = Program::new(&gl, POINT_VERTEX_SHADER, POINT_FRAGMENT_SHADER)?;
        program.bind(&gl);

        let positions = gl::array_buffer(&gl, surface.positions(), GL::DYNAMIC_DRAW)?;
        let position_attr = program.attrib(&gl, "a_position")?;
        gl.enable_vertex_attrib_array(position_attr);
        gl.vertex_attrib_pointer_with_i32(position_attr, 3, GL::FLOAT, false, 0, 0);

        let colors = gl::array_buffer(&gl, surface.colors(), GL::STATIC_DRAW)?;
        let color_attr = program.attrib(&gl, "a_color")?;
        gl.enable_vertex_attrib_array(color_attr);
        gl.vertex_attrib_pointer_with_i32(color_attr, 3, GL::FLOAT, false, 0, 0);

        gl.uniform1f(program.uniform(&gl, "u_point_size").as_ref(), config.point_size);
        gl.uniform1f(program.uniform(&gl, "u_opacity").as_ref(), config.opacity);
        let uniforms = Uniforms {
            view: program.uniform(&gl, "u_view"),
            projection: program.uniform(&gl, "u_projection"),
            scale: program.uniform(&gl, "u_scale"),
        };

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        gl.depth_mask(false);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        Ok(Self {
            canvas: canvas.clone(),
            gl,
            surface,
            uniforms,
            resources: Some(GlResources {
                program,
                positions,
                colors,
            }),
            max_pixel_ratio: config.max_pixel_ratio,
        })
    }
}

impl Effect for DottedSurfaceGl {
    fn resize(&mut self, size: Size) {
        let ratio = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .min(self.max_pixel_ratio);
        let width = (size.width as f64 * ratio).round() as u32;
        let height = (size.height as f64 * ratio).round() as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
        self.gl.uniform1f(self.uniforms.scale.as_ref(), height as f32 / 2.0);
        self.surface.resize(size);
    }

    fn frame(&mut self, tick: &FrameTick) {
        let Some(res) = &self.resources else { return };
        self.surface.update(tick.elapsed as f32);
        gl::update_array_buffer(&self.gl, &res.positions, self.surface.positions());

        let camera = self.surface.camera();
        self.gl.uniform_matrix4fv_with_f32_array(
            self.uniforms.view.as_ref(),
            false,
            &camera.view().to_cols_array(),
        );
        self.gl.uniform_matrix4fv_with_f32_array(
            self.uniforms.projection.as_ref(),
            false,
            &camera.projection().to_cols_array(),
        );

        self.gl.clear(GL::COLOR_BUFFER_BIT);
        self.gl
            .draw_arrays(GL::POINTS, 0, self.surface.point_count() as i32);
    }

    fn release(&mut self) {
        if let Some(res) = self.resources.take() {
            self.gl.delete_buffer(Some(&res.positions));
            self.gl.delete_buffer(Some(&res.colors));
            res.program.release(&self.gl);
        }
    }
}

/// Wide horizon of dots rolling in two crossing waves.
pub fn mount(container: &Element, config: &FxConfig) -> FxResult<Mounted> {
    render::mount("dotted-surface", container, |canvas, size| {
        DottedSurfaceGl::new(canvas, size, &config.surface)
    })
}
