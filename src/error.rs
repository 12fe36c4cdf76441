use thiserror::Error;

/// Everything that can stop an effect or the locale binding from starting.
///
/// None of these reach the page: the browser layer logs them and skips the
/// effect that failed.
#[derive(Error, Debug)]
pub enum FxError {
    #[error("{0} rendering context unavailable")]
    ContextUnavailable(&'static str),

    #[error("shader compile error: {0}")]
    ShaderCompile(String),

    #[error("program link error: {0}")]
    ProgramLink(String),

    #[error("could not allocate {0}")]
    GpuAlloc(&'static str),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("element `{0}` not found")]
    MissingElement(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("browser call failed: {0}")]
    Js(String),
}

pub type FxResult<T> = Result<T, FxError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        FxError::Js(msg)
    }
}
