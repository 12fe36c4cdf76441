use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::cursor_glow::context_2d;
use super::render::{self, Mounted};
use crate::config::FxConfig;
use crate::error::FxResult;
use crate::lifecycle::{Effect, FrameTick, Size};
use crate::rain::DotRain;

fn js_random() -> f32 {
    js_sys::Math::random() as f32
}

struct DotRainCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    rain: DotRain,
}

impl Effect for DotRainCanvas {
    fn resize(&mut self, size: Size) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        self.rain.resize(size);
    }

    fn frame(&mut self, tick: &FrameTick) {
        let (w, h) = self.rain.bounds();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);

        let mut rng = js_random;
        self.rain.advance(tick.steps(), &mut rng);

        for drop in self.rain.drops() {
            let alpha = drop.opacity * self.rain.fade(drop);
            if alpha <= 0.0 {
                continue;
            }
            let half = drop.size as f64;
            self.ctx.set_fill_style_str(&drop.color.css(alpha));
            self.ctx.fill_rect(
                drop.x as f64 - half,
                drop.y as f64 - half,
                half * 2.0,
                half * 2.0,
            );
        }
    }
}

/// Squares drifting down the container and fading out near its bottom.
pub fn mount(container: &Element, config: &FxConfig) -> FxResult<Mounted> {
    render::mount("dot-rain", container, |canvas, size| {
        let mut rng = js_random;
        Ok(DotRainCanvas {
            canvas: canvas.clone(),
            ctx: context_2d(canvas)?,
            rain: DotRain::new(&config.rain, size, &mut rng),
        })
    })
}
