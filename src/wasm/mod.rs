use std::cell::RefCell;

use log::LevelFilter;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::FxConfig;
use crate::error::FxResult;

mod cursor_glow;
mod dot_rain;
mod dotted_surface;
mod gl;
pub mod locale;
mod logging;
mod render;
mod shader_field;
mod storage;

pub use render::Mounted;
pub use storage::LocalStorage;

type MountFn = fn(&Element, &FxConfig) -> FxResult<Mounted>;

/// Container id and mount function of every effect the page may host.
const EFFECTS: [(&str, MountFn); 4] = [
    ("cursor-glow", cursor_glow::mount),
    ("dot-rain", dot_rain::mount),
    ("dotted-surface", dotted_surface::mount),
    ("shader-field", shader_field::mount),
];

thread_local! {
    static MOUNTED: RefCell<Vec<Mounted>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let config = load_config(&document);
    logging::init(config.level_filter());

    if let Err(err) = locale::bind(&document) {
        log::warn!("locale switch disabled: {}", err);
    }
    mount_all(&document, &config);
    Ok(())
}

/// Re-scan the document and (re)start every effect found in it.
#[wasm_bindgen]
pub fn mount_effects() -> Result<(), JsValue> {
    unmount_all();
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let config = load_config(&document);
    mount_all(&document, &config);
    Ok(())
}

/// Stop every running effect and release its resources.
#[wasm_bindgen]
pub fn unmount_all() {
    let mounted = MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    drop(mounted);
}

/// Number of effects currently running.
#[wasm_bindgen]
pub fn mounted_count() -> usize {
    MOUNTED.with(|m| m.borrow().len())
}

#[wasm_bindgen]
pub fn set_locale(value: &str) -> bool {
    locale::set(value)
}

#[wasm_bindgen]
pub fn current_locale() -> Option<String> {
    locale::current().map(|l| l.as_str().to_string())
}

fn mount_all(document: &Document, config: &FxConfig) {
    for (id, mount) in EFFECTS {
        let Some(container) = document.get_element_by_id(id) else {
            log::debug!("no #{} on this page", id);
            continue;
        };
        match mount(&container, config) {
            Ok(mounted) => {
                log::debug!("{} running", mounted.name());
                MOUNTED.with(|m| m.borrow_mut().push(mounted));
            }
            Err(err) => log::warn!("{} disabled: {}", id, err),
        }
    }
}

/// Config comes from `<script id="fx-config" type="application/json">`.
fn load_config(document: &Document) -> FxConfig {
    let Some(text) = document
        .get_element_by_id("fx-config")
        .and_then(|el| el.text_content())
    else {
        return FxConfig::default();
    };
    FxConfig::from_json(&text).unwrap_or_else(|err| {
        log::warn!("{}; using defaults", err);
        FxConfig::default()
    })
}
