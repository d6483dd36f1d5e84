// Page wiring constants used by the web frontend: element ids, selectors and
// overlay stacking. Kept free of web-sys so host tests can include this file.

// Overlay canvases, topmost first
pub const RIPPLE_CANVAS_ID: &str = "ripple-canvas";
pub const STAR_CANVAS_ID: &str = "star-canvas";
pub const WEB_CANVAS_ID: &str = "spider-canvas";

pub const RIPPLE_Z_INDEX: u32 = 9999;
pub const STAR_Z_INDEX: u32 = 9998;
pub const WEB_Z_INDEX: u32 = 9997;

pub const WEB_CANVAS_OPACITY: f32 = 0.6; // ambient web sits dimmed behind the other overlays

// Theme toggle
pub const THEME_BUTTON_SELECTOR: &str = ".theme-toggle";
pub const THEME_OVERLAY_CLASS: &str = "theme-overlay";
pub const DARK_BODY_CLASS: &str = "dark";

// Hero / page entry
pub const HERO_SELECTOR: &str = ".hero-section";
pub const TYPEWRITER_SELECTOR: &str = ".hero-typewriter";
pub const TYPEWRITER_TEXT_ATTR: &str = "data-text";
pub const ENTER_BUTTON_SELECTOR: &str = ".enter-btn";
pub const MAIN_CONTENT_ID: &str = "main-content";
pub const HIDDEN_CLASS: &str = "hidden";

// Scroll reveal
pub const FADE_IN_CLASS: &str = "fade-in-section";
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

/// Inline style for a full-viewport overlay canvas that never takes input.
pub fn overlay_canvas_style(z_index: u32, opacity: Option<f32>) -> String {
    let mut css = format!(
        "position: fixed; top: 0; left: 0; pointer-events: none; z-index: {};",
        z_index
    );
    if let Some(o) = opacity {
        css.push_str(&format!(" opacity: {};", o));
    }
    css
}
