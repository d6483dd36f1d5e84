//! Page-entry animations: hero typewriter, enter button and scroll reveal.

use crate::constants::*;
use crate::dom;
use fx_core::{stagger_class, RevealTracker, Tick, Typewriter, TypewriterTimings};
use fx_core::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use fx_core::REVEAL_SELECTORS;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct HeroTypewriter {
    writer: Typewriter,
    element: web::Element,
}

impl HeroTypewriter {
    fn from_document(document: &web::Document) -> Option<Self> {
        let element = dom::query(document, TYPEWRITER_SELECTOR)?;
        let text = element.get_attribute(TYPEWRITER_TEXT_ATTR)?;
        element.set_text_content(Some(""));
        Some(Self {
            writer: Typewriter::new(text, TypewriterTimings::default()),
            element,
        })
    }

    pub fn is_done(&self) -> bool {
        self.writer.is_done()
    }

    pub fn tick(&mut self, dt: Duration) {
        self.writer.tick(dt);
        if let Some(text) = self.writer.take_update() {
            self.element.set_text_content(Some(text));
        }
    }
}

pub fn init_page_animations(
    document: &web::Document,
    first_visit: bool,
) -> Option<HeroTypewriter> {
    let hero = if first_visit {
        HeroTypewriter::from_document(document)
    } else {
        hide_hero(document);
        None
    };
    wire_enter_button(document);
    if let Err(e) = wire_scroll_reveal(document) {
        log::warn!("[entry] scroll reveal disabled: {:?}", e);
    }
    hero
}

fn hide_hero(document: &web::Document) {
    if let Some(hero) = dom::query(document, HERO_SELECTOR) {
        _ = hero.class_list().add_1(HIDDEN_CLASS);
    }
}

fn wire_enter_button(document: &web::Document) {
    if dom::query(document, ENTER_BUTTON_SELECTOR).is_none() {
        return;
    }
    let doc = document.clone();
    dom::add_click_listener(document, ENTER_BUTTON_SELECTOR, move |ev| {
        ev.prevent_default();
        hide_hero(&doc);
        if let Some(main) = doc.get_element_by_id(MAIN_CONTENT_ID) {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            main.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });
}

fn wire_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let nodes = document
        .query_selector_all(REVEAL_SELECTORS)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let elements: Vec<web::Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect();
    if elements.is_empty() {
        return Ok(());
    }
    for (i, el) in elements.iter().enumerate() {
        _ = el.class_list().add_2(FADE_IN_CLASS, &stagger_class(i));
        _ = el.set_attribute(REVEAL_INDEX_ATTR, &i.to_string());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let index = target
                    .get_attribute(REVEAL_INDEX_ATTR)
                    .and_then(|s| s.parse::<usize>().ok());
                if let Some(i) = index {
                    if tracker.borrow_mut().reveal(i) {
                        _ = target.class_list().add_1(VISIBLE_CLASS);
                        observer.unobserve(&target);
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for el in &elements {
        observer.observe(el);
    }
    callback.forget();
    log::info!("[entry] observing {} elements for reveal", elements.len());
    Ok(())
}
