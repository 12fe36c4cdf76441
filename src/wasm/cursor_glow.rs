use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};

use super::render::{self, Listener, Mounted};
use crate::config::FxConfig;
use crate::error::{FxError, FxResult};
use crate::lifecycle::{Effect, FrameTick, Size};
use crate::palette::{NEON_CYAN, NEON_PURPLE};
use crate::trail::{Glow, PointerTrail};

const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

struct CursorGlow {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    trail: Rc<RefCell<PointerTrail>>,
}

impl Effect for CursorGlow {
    fn resize(&mut self, size: Size) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn frame(&mut self, tick: &FrameTick) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);

        let mut trail = self.trail.borrow_mut();
        trail.advance(tick.steps());
        for glow in trail.glows() {
            let stops = [
                (0.0, NEON_PURPLE.css(0.12 * glow.life)),
                (0.5, NEON_CYAN.css(0.06 * glow.life)),
                (1.0, TRANSPARENT.to_string()),
            ];
            if let Err(err) = paint(&self.ctx, glow, &stops) {
                log::trace!("trail glow skipped: {:?}", err);
            }
        }

        let stops = [
            (0.0, NEON_PURPLE.css(0.15)),
            (0.4, NEON_CYAN.css(0.06)),
            (1.0, TRANSPARENT.to_string()),
        ];
        if let Err(err) = paint(&self.ctx, trail.cursor_glow(), &stops) {
            log::trace!("cursor glow skipped: {:?}", err);
        }
    }
}

fn paint(ctx: &CanvasRenderingContext2d, glow: Glow, stops: &[(f32, String)]) -> Result<(), JsValue> {
    let (x, y, r) = (glow.x as f64, glow.y as f64, glow.radius as f64);
    let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
    for (offset, color) in stops {
        gradient.add_color_stop(*offset, color)?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> FxResult<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")?
        .ok_or(FxError::ContextUnavailable("2d"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| FxError::ContextUnavailable("2d"))
}

/// Glow that follows the pointer and leaves a fading trail.
pub fn mount(container: &Element, config: &FxConfig) -> FxResult<Mounted> {
    let trail = Rc::new(RefCell::new(PointerTrail::new(&config.trail)));

    let mounted = render::mount("cursor-glow", container, |canvas, _| {
        Ok(CursorGlow {
            canvas: canvas.clone(),
            ctx: context_2d(canvas)?,
            trail: trail.clone(),
        })
    })?;

    let window = web_sys::window().ok_or(FxError::MissingElement("window".into()))?;
    let on_move = Listener::new(&window, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            trail
                .borrow_mut()
                .push(event.client_x() as f32, event.client_y() as f32);
        }
    })?;

    Ok(mounted.listen(on_move))
}
