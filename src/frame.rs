use crate::canvas::{self, CanvasSurface};
use crate::constants::*;
use crate::entry::HeroTypewriter;
use crate::theme::ThemeBinding;
use fx_core::{AmbientWeb, RippleBurst, StarTrail, Tick};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct WebLayer {
    pub web: Rc<RefCell<AmbientWeb>>,
    pub surface: CanvasSurface,
}

pub struct FrameContext {
    pub ripple: Rc<RefCell<RippleBurst>>,
    pub stars: Rc<RefCell<StarTrail>>,
    // Created lazily on the first frame that finds them missing.
    pub ripple_surface: Option<CanvasSurface>,
    pub star_surface: Option<CanvasSurface>,

    pub web: Option<WebLayer>,
    pub theme: Option<ThemeBinding>,
    pub hero: Option<HeroTypewriter>,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        if self.ripple_surface.is_none() {
            self.ripple_surface = canvas::overlay_surface(RIPPLE_CANVAS_ID, RIPPLE_Z_INDEX);
        }
        if self.star_surface.is_none() {
            self.star_surface = canvas::overlay_surface(STAR_CANVAS_ID, STAR_Z_INDEX);
        }

        step_and_draw(&self.ripple, dt, self.ripple_surface.as_mut(), |e, s| e.draw(s));
        step_and_draw(&self.stars, dt, self.star_surface.as_mut(), |e, s| e.draw(s));
        if let Some(layer) = &mut self.web {
            step_and_draw(&layer.web, dt, Some(&mut layer.surface), |e, s| e.draw(s));
        }

        if let Some(theme) = &self.theme {
            theme.tick(dt);
        }
        let typed = match &mut self.hero {
            Some(hero) => {
                hero.tick(dt);
                hero.is_done()
            }
            None => false,
        };
        if typed {
            self.hero = None;
        }
    }
}

fn step_and_draw<E: Tick>(
    effect: &Rc<RefCell<E>>,
    dt: Duration,
    surface: Option<&mut CanvasSurface>,
    draw: impl FnOnce(&E, &mut CanvasSurface),
) {
    let mut e = effect.borrow_mut();
    e.tick(dt);
    if let Some(s) = surface {
        draw(&*e, s);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
