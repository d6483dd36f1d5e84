#![cfg(target_arch = "wasm32")]
use fx_core::{AmbientWeb, RippleBurst, RippleConfig, SiteState, StarTrail, StarTrailConfig, WebConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod entry;
mod events;
mod frame;
mod overlay;
mod storage;
mod theme;

use constants::{WEB_CANVAS_ID, WEB_CANVAS_OPACITY, WEB_Z_INDEX};

/// Ambient web overlay plus its pool, sized to the viewport and rebuilt on
/// every resize. `None` when the canvas cannot be created.
fn build_web_layer(document: &web::Document) -> Option<frame::WebLayer> {
    let canvas = canvas::overlay_canvas(
        document,
        WEB_CANVAS_ID,
        WEB_Z_INDEX,
        Some(WEB_CANVAS_OPACITY),
    )?;
    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let web = Rc::new(RefCell::new(AmbientWeb::new(
        WebConfig::default(),
        w,
        h,
        rand::random(),
    )));
    let web_resize = web.clone();
    dom::wire_canvas_resize(&canvas, move |w, h| {
        web_resize.borrow_mut().resize(w, h);
    });
    let surface = canvas::CanvasSurface::new(canvas)?;
    Some(frame::WebLayer { web, surface })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blog-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut store = storage::LocalStorage::from_window(&window);
    let state = SiteState::load(&mut store);

    let ripple = Rc::new(RefCell::new(RippleBurst::new(
        RippleConfig::default(),
        rand::random(),
    )));
    let stars = Rc::new(RefCell::new(StarTrail::new(
        StarTrailConfig::default(),
        rand::random(),
    )));
    let web_layer = build_web_layer(&document);
    if web_layer.is_none() {
        log::warn!("[web] no #{} canvas; ambient web disabled", WEB_CANVAS_ID);
    }

    events::wire_input_handlers(
        &document,
        events::InputWiring {
            ripple: ripple.clone(),
            stars: stars.clone(),
            web: web_layer.as_ref().map(|l| l.web.clone()),
        },
    );

    let theme = theme::wire_theme_toggle(&document, state.theme, store);
    let hero = entry::init_page_animations(&document, state.first_visit);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        ripple,
        stars,
        ripple_surface: None,
        star_surface: None,
        web: web_layer,
        theme,
        hero,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
