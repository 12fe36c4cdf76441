use std::cell::RefCell;
use std::rc::Rc;

use folio_fx::content::{projects, skills, skills_in, SkillCategory};
use folio_fx::error::{FxError, FxResult};
use folio_fx::i18n::translations;
use folio_fx::locale::{Locale, LocaleStore, MemoryStore, PreferenceStore, STORAGE_KEY};

/// Storage that refuses every access, like a browser with storage disabled.
struct Blocked;

impl PreferenceStore for Blocked {
    fn load(&self, _key: &str) -> FxResult<Option<String>> {
        Err(FxError::Storage("blocked".into()))
    }

    fn save(&mut self, _key: &str, _value: &str) -> FxResult<()> {
        Err(FxError::Storage("blocked".into()))
    }
}

#[test]
fn empty_storage_starts_in_english() {
    let store = LocaleStore::new(MemoryStore::new());
    assert_eq!(store.locale(), Locale::En);
    assert_eq!(store.translations().nav.home, "Home");
}

#[test]
fn chosen_locale_survives_a_reload() {
    let mut store = LocaleStore::new(MemoryStore::new());
    store.set_locale(Locale::En);
    assert_eq!(store.store().get(STORAGE_KEY), Some("en"));

    let reloaded = LocaleStore::new(store.into_store());
    assert_eq!(reloaded.locale(), Locale::En);

    let mut store = reloaded;
    store.set_locale(Locale::Pl);
    let reloaded = LocaleStore::new(store.into_store());
    assert_eq!(reloaded.locale(), Locale::Pl);
    assert_eq!(reloaded.translations().nav.about, "O mnie");
}

#[test]
fn malformed_preference_falls_back_to_default() {
    for bad in ["de", "", "EN", " pl", "english"] {
        let store = LocaleStore::new(MemoryStore::with_entry(STORAGE_KEY, bad));
        assert_eq!(store.locale(), Locale::En, "value {:?}", bad);
    }
    let store = LocaleStore::new(MemoryStore::with_entry(STORAGE_KEY, "pl"));
    assert_eq!(store.locale(), Locale::Pl);
}

#[test]
fn setting_the_same_locale_twice_is_idempotent() {
    let notified = Rc::new(RefCell::new(Vec::new()));
    let mut store = LocaleStore::new(MemoryStore::new());
    let sink = notified.clone();
    store.subscribe(move |locale, _| sink.borrow_mut().push(locale));

    store.set_locale(Locale::Pl);
    let once = (store.locale(), store.store().get(STORAGE_KEY).map(str::to_owned));
    store.set_locale(Locale::Pl);
    let twice = (store.locale(), store.store().get(STORAGE_KEY).map(str::to_owned));

    assert_eq!(once, twice);
    assert_eq!(*notified.borrow(), vec![Locale::Pl]);
}

#[test]
fn toggle_flips_persists_and_rerenders() {
    let rendered = Rc::new(RefCell::new(Vec::new()));
    let mut store = LocaleStore::new(MemoryStore::new());
    let sink = rendered.clone();
    store.subscribe(move |_, text| sink.borrow_mut().push(text.contact.title));

    assert_eq!(store.toggle(), Locale::Pl);
    assert_eq!(store.store().get(STORAGE_KEY), Some("pl"));
    assert_eq!(store.toggle(), Locale::En);
    assert_eq!(store.store().get(STORAGE_KEY), Some("en"));
    assert_eq!(*rendered.borrow(), vec!["Porozmawiajmy", "Let's talk"]);
}

#[test]
fn unsubscribed_views_stop_rendering() {
    let count = Rc::new(RefCell::new(0));
    let mut store = LocaleStore::new(MemoryStore::new());
    let sink = count.clone();
    let sub = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

    store.toggle();
    store.unsubscribe(sub);
    store.toggle();
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn blocked_storage_still_switches_in_memory() {
    let mut store = LocaleStore::new(Blocked);
    assert_eq!(store.locale(), Locale::En);
    store.set_locale(Locale::Pl);
    assert_eq!(store.locale(), Locale::Pl);
    assert_eq!(store.translations().footer.copyright, "Adam. Wszelkie prawa zastrzeżone.");
}

#[test]
fn locale_strings_round_trip() {
    for locale in [Locale::Pl, Locale::En] {
        assert_eq!(Locale::parse(locale.as_str()), Some(locale));
        assert_eq!(locale.to_string(), locale.as_str());
        assert_eq!(locale.other().other(), locale);
    }
}

const KEYS: &[&str] = &[
    "locale.switch",
    "nav.home",
    "nav.about",
    "nav.projects",
    "nav.contact",
    "hero.description",
    "hero.cta_projects",
    "hero.cta_contact",
    "about.label",
    "about.title",
    "about.bio1_prefix",
    "about.bio1_name",
    "about.bio1_suffix",
    "about.bio2",
    "about.stat_experience",
    "about.stat_projects",
    "about.stat_technologies",
    "about.category_frontend",
    "about.category_backend",
    "about.category_tools",
    "projects.label",
    "projects.title",
    "project_descriptions.project-1",
    "project_descriptions.project-2",
    "project_descriptions.project-3",
    "contact.label",
    "contact.title",
    "contact.body",
    "contact.email_button",
    "footer.copyright",
];

#[test]
fn every_key_is_translated_in_both_locales() {
    for locale in [Locale::Pl, Locale::En] {
        let text = translations(locale);
        for key in KEYS {
            let value = text.get(key);
            assert!(value.is_some_and(|v| !v.is_empty()), "{} missing {}", locale, key);
        }
    }
    assert_ne!(
        translations(Locale::Pl).get("hero.cta_projects"),
        translations(Locale::En).get("hero.cta_projects")
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let text = translations(Locale::En);
    assert_eq!(text.get("nav"), None);
    assert_eq!(text.get("nav.missing"), None);
    assert_eq!(text.get("project_descriptions.project-9"), None);
}

#[test]
fn switch_label_names_the_other_language() {
    assert_eq!(translations(Locale::En).switch_to, "PL");
    assert_eq!(translations(Locale::Pl).switch_to, "EN");
}

#[test]
fn skills_filter_by_category() {
    assert_eq!(skills().len(), 12);
    assert_eq!(skills_in(SkillCategory::Frontend).count(), 5);
    assert_eq!(skills_in(SkillCategory::Backend).count(), 3);
    let tools: Vec<_> = skills_in(SkillCategory::Tools).map(|s| s.name).collect();
    assert_eq!(tools, ["Git", "Docker", "Figma", "Linux"]);
}

#[test]
fn project_descriptions_follow_the_locale() {
    let chess = &projects()[0];
    assert_eq!(chess.id, "project-1");
    assert!(chess
        .localized_description(translations(Locale::En))
        .starts_with("A web-based chess game"));
    assert!(chess
        .localized_description(translations(Locale::Pl))
        .starts_with("Webowa gra w szachy z"));
    assert!(chess.live_url.is_some());
    assert!(projects()[1].live_url.is_none());
}
