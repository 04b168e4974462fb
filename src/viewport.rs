use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::state::navigation::{SectionBounds, SectionId, SectionLocator};

/// Reads section extents straight from the live document.
pub struct DomSections;

impl DomSections {
    fn element(section: SectionId) -> Option<HtmlElement> {
        window()?
            .document()?
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    pub fn scroll_into_view(&self, section: SectionId) {
        if let Some(element) = Self::element(section) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        } else {
            debug!("section {} vanished before scroll", section);
        }
    }
}

impl SectionLocator for DomSections {
    fn locate(&self, section: SectionId) -> Option<SectionBounds> {
        let element = Self::element(section)?;
        Some(SectionBounds {
            id: section,
            offset_top: element.offset_top() as f64,
            offset_height: element.offset_height() as f64,
        })
    }
}

pub fn scroll_y() -> Option<f64> {
    window()?.scroll_y().ok()
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            warn!("failed to open {}", url);
        }
    }
}

/// Keeps an intersection observer alive. Dropping it disconnects the
/// observer and frees the callback.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_enter` once, the first time at least `threshold` of `region`
/// is visible. The observer disconnects itself after firing.
pub fn observe_once<F>(region: &Element, threshold: f64, on_enter: F) -> Option<ObserverHandle>
where
    F: FnOnce() + 'static,
{
    let mut on_enter = Some(on_enter);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if entered {
                if let Some(on_enter) = on_enter.take() {
                    observer.disconnect();
                    on_enter();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(region);
            Some(ObserverHandle {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            warn!("intersection observer unavailable: {:?}", err);
            None
        }
    }
}
