//! Browser glue for section navigation.
//!
//! Installs the `IntersectionObserver` that reports which section is in view
//! and performs the smooth scroll behind the continue button. The rules for
//! interpreting observer entries live in `state::navigation`.
//!
//! TRADE-OFFS
//! ==========
//! Browser-only; SSR paths no-op. The observer callback is leaked; the caller
//! owns the returned observer and disconnects it on unmount.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use crate::state::navigation::Section;
#[cfg(feature = "hydrate")]
use crate::state::navigation::{VISIBILITY_THRESHOLD, Visibility};

/// Smoothly scroll `section` into view.
pub fn scroll_to(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.id()))
        else {
            log::warn!("section #{} not found", section.id());
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        log::debug!("navigate to {}", section.id());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}

/// Watch every section inside `root`; `on_entries` receives each batch.
#[cfg(feature = "hydrate")]
pub fn observe_sections<F>(root: &web_sys::Element, on_entries: F) -> Option<web_sys::IntersectionObserver>
where
    F: Fn(Vec<Visibility>) + 'static,
{
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|value| value.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .map(|entry| Visibility {
                    id: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            on_entries(batch);
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root(Some(root));
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("section observer unavailable: {e:?}");
            return None;
        }
    };
    callback.forget();

    let document = web_sys::window().and_then(|w| w.document())?;
    for section in Section::ALL {
        if let Some(el) = document.get_element_by_id(section.id()) {
            observer.observe(&el);
        }
    }
    Some(observer)
}
