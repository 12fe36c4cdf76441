//! Binds the locale store to the document.
//!
//! Text nodes carry `data-i18n="section.key"`; the `#locale-toggle` button
//! flips the language. The store lives for the whole page session.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element};

use super::storage::LocalStorage;
use crate::error::FxResult;
use crate::i18n::Translations;
use crate::locale::{Locale, LocaleStore};

type SharedStore = Rc<RefCell<LocaleStore<LocalStorage>>>;

thread_local! {
    static STORE: RefCell<Option<SharedStore>> = const { RefCell::new(None) };
}

pub fn bind(document: &Document) -> FxResult<()> {
    let mut store = LocaleStore::new(LocalStorage::open());
    render(document, store.locale(), store.translations());

    let target = document.clone();
    store.subscribe(move |locale, text| render(&target, locale, text));

    let store = Rc::new(RefCell::new(store));
    if let Some(button) = document.get_element_by_id("locale-toggle") {
        let store = store.clone();
        let on_click = Closure::wrap(Box::new(move || {
            store.borrow_mut().toggle();
        }) as Box<dyn FnMut()>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    STORE.with(|slot| *slot.borrow_mut() = Some(store));
    Ok(())
}

/// Switch the page language. Returns false for anything but `"pl"`/`"en"`.
pub fn set(value: &str) -> bool {
    let Some(locale) = Locale::parse(value) else {
        return false;
    };
    STORE.with(|slot| match slot.borrow().as_ref() {
        Some(store) => {
            store.borrow_mut().set_locale(locale);
            true
        }
        None => false,
    })
}

pub fn current() -> Option<Locale> {
    STORE.with(|slot| slot.borrow().as_ref().map(|store| store.borrow().locale()))
}

fn render(document: &Document, locale: Locale, text: &Translations) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", locale.as_str());
    }
    let nodes = match document.query_selector_all("[data-i18n]") {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("cannot query translatable nodes: {:?}", err);
            return;
        }
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(key) = el.get_attribute("data-i18n") else {
            continue;
        };
        match text.get(&key) {
            Some(value) => el.set_text_content(Some(value)),
            None => log::debug!("no translation for `{}`", key),
        }
    }
}
