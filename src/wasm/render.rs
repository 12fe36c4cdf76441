use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Element, Event, EventTarget, HtmlCanvasElement, IntersectionObserver,
    IntersectionObserverEntry, ResizeObserver, ResizeObserverEntry, Window,
};

use crate::error::{FxError, FxResult};
use crate::lifecycle::{Effect, FrameScheduler, Runner, Size};

/// Holds the animation-frame closure so it can re-request itself. Storing it
/// inside an `Option` allows creating the `Closure` after the scheduler that
/// refers to it.
type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

type SharedRunner = Rc<RefCell<Runner<Box<dyn Effect>, RafScheduler>>>;

/// `requestAnimationFrame` behind the [`FrameScheduler`] seam.
pub struct RafScheduler {
    window: Window,
    slot: FrameSlot,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        let slot = self.slot.borrow();
        let callback = slot.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|err| log::warn!("requestAnimationFrame failed: {:?}", err))
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::debug!("cancelAnimationFrame({}) failed: {:?}", handle, err);
        }
    }
}

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> FxResult<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// A running effect. Dropping it tears the effect down completely.
pub struct Mounted {
    name: &'static str,
    runner: SharedRunner,
    slot: FrameSlot,
    canvas: HtmlCanvasElement,
    observers: Observers,
    listeners: Vec<Listener>,
}

/// Resize and visibility tracking for one container.
struct Observers {
    resize: ResizeObserver,
    _on_resize: Closure<dyn FnMut(js_sys::Array)>,
    visibility: IntersectionObserver,
    _on_visibility: Closure<dyn FnMut(js_sys::Array)>,
}

impl Observers {
    fn observe(container: &Element, runner: &SharedRunner) -> FxResult<Self> {
        let on_resize = resize_callback(Rc::downgrade(runner));
        let resize = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
        resize.observe(container);

        let on_visibility = visibility_callback(Rc::downgrade(runner));
        let visibility = match IntersectionObserver::new(on_visibility.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                resize.disconnect();
                return Err(err.into());
            }
        };
        visibility.observe(container);

        Ok(Self {
            resize,
            _on_resize: on_resize,
            visibility,
            _on_visibility: on_visibility,
        })
    }

    fn disconnect(&self) {
        self.resize.disconnect();
        self.visibility.disconnect();
    }
}

impl Mounted {
    pub fn listen(mut self, listener: Listener) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.runner.borrow_mut().detach();
        self.observers.disconnect();
        self.listeners.clear();
        self.slot.borrow_mut().take();
        self.canvas.remove();
        log::debug!("{} detached", self.name);
    }
}

/// Create a canvas inside `container`, build the effect on it and start its
/// frame loop with resize and visibility tracking.
pub fn mount<E, F>(name: &'static str, container: &Element, build: F) -> FxResult<Mounted>
where
    E: Effect + 'static,
    F: FnOnce(&HtmlCanvasElement, Size) -> FxResult<E>,
{
    let window = window().ok_or(FxError::MissingElement("window".into()))?;
    let canvas = create_canvas(container)?;

    let bounds = (
        container.client_width() as f64,
        container.client_height() as f64,
    );
    let initial = Size::from_css(bounds.0, bounds.1).unwrap_or_else(|| viewport_size(&window));
    let effect = match build(&canvas, initial) {
        Ok(effect) => Box::new(effect) as Box<dyn Effect>,
        Err(err) => {
            canvas.remove();
            return Err(err);
        }
    };

    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler {
        window,
        slot: slot.clone(),
    };
    let runner: SharedRunner = Rc::new(RefCell::new(Runner::new(effect, scheduler)));

    let weak = Rc::downgrade(&runner);
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if let Some(runner) = weak.upgrade() {
            runner.borrow_mut().frame(now);
        }
    }) as Box<dyn FnMut(f64)>));

    runner.borrow_mut().resize(bounds.0, bounds.1);

    let observers = match Observers::observe(container, &runner) {
        Ok(observers) => observers,
        Err(err) => {
            // The runner releases the effect when dropped.
            slot.borrow_mut().take();
            canvas.remove();
            return Err(err);
        }
    };

    runner.borrow_mut().attach();
    log::debug!("{} attached at {}x{}", name, initial.width, initial.height);

    Ok(Mounted {
        name,
        runner,
        slot,
        canvas,
        observers,
        listeners: Vec::new(),
    })
}

fn resize_callback(
    runner: Weak<RefCell<Runner<Box<dyn Effect>, RafScheduler>>>,
) -> Closure<dyn FnMut(js_sys::Array)> {
    Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let Some(runner) = runner.upgrade() else { return };
        for entry in entries.iter() {
            let rect = entry.unchecked_into::<ResizeObserverEntry>().content_rect();
            runner.borrow_mut().resize(rect.width(), rect.height());
        }
    }) as Box<dyn FnMut(js_sys::Array)>)
}

fn visibility_callback(
    runner: Weak<RefCell<Runner<Box<dyn Effect>, RafScheduler>>>,
) -> Closure<dyn FnMut(js_sys::Array)> {
    Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let Some(runner) = runner.upgrade() else { return };
        // Entries arrive oldest first; only the latest state matters.
        let latest = entries.iter().last();
        if let Some(entry) = latest {
            let visible = entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting();
            runner.borrow_mut().set_visible(visible);
        }
    }) as Box<dyn FnMut(js_sys::Array)>)
}

fn create_canvas(container: &Element) -> FxResult<HtmlCanvasElement> {
    let document = container
        .owner_document()
        .ok_or(FxError::MissingElement("document".into()))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| FxError::Js("created element is not a canvas".into()))?;
    canvas.set_attribute(
        "style",
        "position:absolute;inset:0;width:100%;height:100%;pointer-events:none",
    )?;
    canvas.set_attribute("aria-hidden", "true")?;
    container.append_child(&canvas)?;
    Ok(canvas)
}

fn viewport_size(window: &Window) -> Size {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0)
    };
    Size::from_css(read(window.inner_width()), read(window.inner_height())).unwrap_or(Size {
        width: 1,
        height: 1,
    })
}
