use crate::constants::{DARK_BODY_CLASS, THEME_BUTTON_SELECTOR};
use crate::dom;
use crate::overlay;
use crate::storage::LocalStorage;
use fx_core::{Theme, ThemeEvent, ThemeTimings, ThemeToggle, Tick};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

/// Theme controller plus the page elements it drives.
pub struct ThemeBinding {
    pub toggle: Rc<RefCell<ThemeToggle<LocalStorage>>>,
    button: web::Element,
    overlay: web::Element,
    body: web::HtmlElement,
}

pub fn wire_theme_toggle(
    document: &web::Document,
    theme: Theme,
    store: LocalStorage,
) -> Option<ThemeBinding> {
    let Some(button) = dom::query(document, THEME_BUTTON_SELECTOR) else {
        log::warn!("[theme] no toggle button; theme switching disabled");
        return None;
    };
    let body = document.body()?;
    let toggle = Rc::new(RefCell::new(ThemeToggle::new(
        theme,
        store,
        ThemeTimings::default(),
    )));
    let overlay = overlay::create(document, toggle.borrow().overlay_icon())?;
    let binding = ThemeBinding {
        toggle: toggle.clone(),
        button,
        overlay,
        body,
    };
    binding.apply(theme);

    dom::add_click_listener(document, THEME_BUTTON_SELECTOR, move |_| {
        toggle.borrow_mut().toggle();
    });
    Some(binding)
}

impl ThemeBinding {
    pub fn tick(&self, dt: Duration) {
        let events = {
            let mut t = self.toggle.borrow_mut();
            t.tick(dt);
            t.take_events()
        };
        for ev in events {
            match ev {
                ThemeEvent::OverlayShown => overlay::show(&self.overlay),
                ThemeEvent::Applied(theme) => self.apply(theme),
                ThemeEvent::OverlayHidden => overlay::hide(&self.overlay),
            }
        }
    }

    fn apply(&self, theme: Theme) {
        _ = self
            .body
            .class_list()
            .toggle_with_force(DARK_BODY_CLASS, theme.is_dark());
        self.button
            .set_text_content(Some(fx_core::button_label(theme)));
        overlay::set_icon(&self.overlay, fx_core::overlay_icon(theme));
    }
}
