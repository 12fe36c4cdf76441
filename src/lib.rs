//! Background effects and locale switching for the portfolio page.
//!
//! The simulation and state modules are plain Rust and build on every target;
//! the browser binding in `wasm` is only compiled for `wasm32`.

pub mod config;
pub mod content;
pub mod error;
pub mod field;
pub mod i18n;
pub mod lifecycle;
pub mod locale;
pub mod palette;
pub mod rain;
pub mod surface;
pub mod trail;

pub use config::FxConfig;
pub use error::{FxError, FxResult};
pub use lifecycle::{Effect, FrameScheduler, FrameTick, Runner, Size};
pub use locale::{Locale, LocaleStore, PreferenceStore};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
