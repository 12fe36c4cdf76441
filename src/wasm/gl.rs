//! Small WebGL2 helpers shared by the GL-backed effects.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};

use crate::error::{FxError, FxResult};

/// Acquire a transparent WebGL2 context.
pub fn context(canvas: &HtmlCanvasElement, antialias: bool) -> FxResult<GL> {
    let options = js_sys::Object::new();
    for (key, value) in [
        ("alpha", true),
        ("premultipliedAlpha", false),
        ("antialias", antialias),
    ] {
        js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_bool(value))?;
    }
    canvas
        .get_context_with_context_options("webgl2", &options)?
        .ok_or(FxError::ContextUnavailable("webgl2"))?
        .dyn_into::<GL>()
        .map_err(|_| FxError::ContextUnavailable("webgl2"))
}

/// A linked program plus the shaders it owns.
pub struct Program {
    program: WebGlProgram,
    shaders: [WebGlShader; 2],
}

impl Program {
    pub fn new(gl: &GL, vertex: &str, fragment: &str) -> FxResult<Self> {
        let vs = compile(gl, GL::VERTEX_SHADER, vertex)?;
        let fs = match compile(gl, GL::FRAGMENT_SHADER, fragment) {
            Ok(fs) => fs,
            Err(err) => {
                gl.delete_shader(Some(&vs));
                return Err(err);
            }
        };

        let program = gl.create_program().ok_or(FxError::GpuAlloc("program"))?;
        gl.attach_shader(&program, &vs);
        gl.attach_shader(&program, &fs);
        gl.link_program(&program);

        let linked = gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        let program = Program {
            program,
            shaders: [vs, fs],
        };
        if !linked {
            let info = gl.get_program_info_log(&program.program).unwrap_or_default();
            program.release(gl);
            return Err(FxError::ProgramLink(info));
        }
        Ok(program)
    }

    pub fn bind(&self, gl: &GL) {
        gl.use_program(Some(&self.program));
    }

    pub fn attrib(&self, gl: &GL, name: &str) -> FxResult<u32> {
        let loc = gl.get_attrib_location(&self.program, name);
        u32::try_from(loc).map_err(|_| FxError::ProgramLink(format!("no attribute `{}`", name)))
    }

    pub fn uniform(&self, gl: &GL, name: &str) -> Option<WebGlUniformLocation> {
        gl.get_uniform_location(&self.program, name)
    }

    pub fn release(&self, gl: &GL) {
        gl.delete_program(Some(&self.program));
        for shader in &self.shaders {
            gl.delete_shader(Some(shader));
        }
    }
}

fn compile(gl: &GL, kind: u32, source: &str) -> FxResult<WebGlShader> {
    let shader = gl.create_shader(kind).ok_or(FxError::GpuAlloc("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(FxError::ShaderCompile(info))
    }
}

/// Create an `ARRAY_BUFFER` filled with `data`.
pub fn array_buffer(gl: &GL, data: &[f32], usage: u32) -> FxResult<WebGlBuffer> {
    let buffer = gl.create_buffer().ok_or(FxError::GpuAlloc("buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let array = js_sys::Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, usage);
    Ok(buffer)
}

/// Overwrite the currently bound `ARRAY_BUFFER` from offset 0.
pub fn update_array_buffer(gl: &GL, buffer: &WebGlBuffer, data: &[f32]) {
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    // SAFETY: the view is consumed by `buffer_sub_data` before anything can
    // allocate and move wasm memory. Copying would cost a fresh JS array per frame.
    unsafe {
        let view = js_sys::Float32Array::view(data);
        gl.buffer_sub_data_with_i32_and_array_buffer_view(GL::ARRAY_BUFFER, 0, &view);
    }
}
