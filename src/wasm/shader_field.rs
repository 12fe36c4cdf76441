use web_sys::{
    Element, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlUniformLocation,
};

use super::gl::{self, Program};
use super::render::{self, Mounted};
use crate::config::{FieldConfig, FxConfig};
use crate::error::FxResult;
use crate::field::{ShaderField, FRAGMENT_SHADER, QUAD_VERTICES, VERTEX_SHADER};
use crate::lifecycle::{Effect, FrameTick, Size};

struct ShaderFieldGl {
    canvas: HtmlCanvasElement,
    gl: GL,
    field: ShaderField,
    resolution: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    resources: Option<(Program, WebGlBuffer)>,
}

impl ShaderFieldGl {
    fn new(canvas: &HtmlCanvasElement, size: Size, config: &FieldConfig) -> FxResult<Self> {
        let gl = gl::context(canvas, true)?;
        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        let program = Program::new(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        program.bind(&gl);

        let quad = gl::array_buffer(&gl, &QUAD_VERTICES, GL::STATIC_DRAW)?;
        let position = program.attrib(&gl, "a_position")?;
        gl.enable_vertex_attrib_array(position);
        gl.vertex_attrib_pointer_with_i32(position, 2, GL::FLOAT, false, 0, 0);

        let field = ShaderField::new(config, size);
        gl.uniform1f(
            program.uniform(&gl, "u_opacity").as_ref(),
            field.uniforms().opacity,
        );

        Ok(Self {
            canvas: canvas.clone(),
            resolution: program.uniform(&gl, "u_resolution"),
            time: program.uniform(&gl, "u_time"),
            gl,
            field,
            resources: Some((program, quad)),
        })
    }
}

impl Effect for ShaderFieldGl {
    fn resize(&mut self, size: Size) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        self.gl.viewport(0, 0, size.width as i32, size.height as i32);
        self.field.resize(size);
    }

    fn frame(&mut self, tick: &FrameTick) {
        if self.resources.is_none() {
            return;
        }
        self.field.advance(tick);
        let uniforms = self.field.uniforms();

        self.gl.clear(GL::COLOR_BUFFER_BIT);
        self.gl.uniform2f(
            self.resolution.as_ref(),
            uniforms.resolution[0],
            uniforms.resolution[1],
        );
        self.gl.uniform1f(self.time.as_ref(), uniforms.time);
        self.gl.draw_arrays(GL::TRIANGLES, 0, (QUAD_VERTICES.len() / 2) as i32);
    }

    fn release(&mut self) {
        if let Some((program, quad)) = self.resources.take() {
            self.gl.delete_buffer(Some(&quad));
            program.release(&self.gl);
        }
    }
}

/// Full-surface animated line field.
pub fn mount(container: &Element, config: &FxConfig) -> FxResult<Mounted> {
    render::mount("shader-field", container, |canvas, size| {
        ShaderFieldGl::new(canvas, size, &config.field)
    })
}
