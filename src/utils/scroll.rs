use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{ JsCast, JsValue };
use web_sys::{ ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition };

use super::section::SectionId;

/// Vertical offset past which the navbar switches to its raised style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Navbar state: the scroll axis and the mobile menu axis move independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Returns true when the threshold was crossed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Something that can bring an anchored element into view.
pub trait Viewport {
    /// Returns false when no element carries `anchor`.
    fn reveal(&self, anchor: &str) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn reveal(&self, anchor: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Scrolls to one of the canonical sections. Unknown ids and missing
/// elements are a silent no-op.
pub fn scroll_to_section(viewport: &dyn Viewport, id: &str) -> bool {
    match id.parse::<SectionId>() {
        Ok(section) => viewport.reveal(section.anchor()),
        Err(err) => {
            log::debug!("{}", err);
            false
        }
    }
}

/// The navbar's scroll action, handed down to every section's call-to-action
/// controls through context.
#[derive(Clone)]
pub struct Navigator {
    viewport: Rc<dyn Viewport>,
    nav: Signal<NavState>,
}

impl Navigator {
    pub fn new(viewport: Rc<dyn Viewport>, nav: Signal<NavState>) -> Self {
        Self { viewport, nav }
    }

    pub fn scroll_to(&self, section: SectionId) -> bool {
        self.scroll_to_anchor(section.anchor())
    }

    pub fn scroll_to_anchor(&self, id: &str) -> bool {
        let mut nav = self.nav;
        if nav.peek().menu_open {
            nav.write().close_menu();
        }
        scroll_to_section(self.viewport.as_ref(), id)
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>()
}

/// A window event subscription that is removed when dropped. If registration
/// fails the callback is released immediately and nothing stays attached.
pub struct WindowListener {
    window: web_sys::Window,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn new(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref()
        );
    }
}

/// Subscribes `handler` to a window event for the lifetime of the calling
/// component.
pub fn use_window_listener(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) {
    let listener = use_hook(move || {
        let listener = WindowListener::new(event, handler)
            .map_err(|err| log::error!("Failed to subscribe to {}: {:?}", event, err))
            .ok();
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}

pub fn element_height(id: &str) -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .map(|element| element.get_bounding_client_rect().height())
}
