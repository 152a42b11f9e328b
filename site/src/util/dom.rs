//! DOM lookup, listener and timer helpers.
//!
//! Listeners and timers registered here live for the whole page: their
//! closures are leaked to JS and released only on unload.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// `attr="value"` selector with the value's quotes and backslashes escaped.
#[must_use]
pub fn attribute_selector(attr: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[{attr}=\"{escaped}\"]")
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

    use crate::error::SiteError;

    pub fn window() -> Result<Window, SiteError> {
        web_sys::window().ok_or_else(|| SiteError::missing("window"))
    }

    pub fn document() -> Result<Document, SiteError> {
        window()?.document().ok_or_else(|| SiteError::missing("document"))
    }

    /// Look up `#id` as a specific element type.
    pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<T>().ok())
    }

    /// Like [`by_id`] but a missing element is an error.
    pub fn require_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, SiteError> {
        by_id(document, id).ok_or_else(|| SiteError::missing(format!("#{id}")))
    }

    pub fn query(document: &Document, selector: &str) -> Result<Option<HtmlElement>, SiteError> {
        Ok(document
            .query_selector(selector)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
    }

    /// All matches for `selector` that are HTML elements, in document order.
    pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, SiteError> {
        let list = document.query_selector_all(selector)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    /// Attach a page-lifetime event listener.
    pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Run `f` once after `millis`.
    pub fn after<F>(millis: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(millis, f).forget();
    }

    /// Set several inline style properties at once.
    pub fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), SiteError> {
        let style = el.style();
        for (name, value) in styles {
            style.set_property(name, value)?;
        }
        Ok(())
    }

    pub fn add_class(el: &Element, class: &str) -> Result<(), SiteError> {
        el.class_list().add_1(class)?;
        Ok(())
    }

    pub fn remove_class(el: &Element, class: &str) -> Result<(), SiteError> {
        el.class_list().remove_1(class)?;
        Ok(())
    }
}
