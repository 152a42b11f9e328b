//! Hero banner: the typing-caret headline and the particle backdrop host.
//!
//! ARCHITECTURE
//! ============
//! The `particles` crate owns the field and the drawing. This module finds
//! the hero element, overlays the canvas on it, and drives the animator:
//! window resizes resize the surface, and the frame loop only runs while the
//! page is visible and the hero is on screen.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use particles::field::SurfaceSize;

/// Inline style giving the hero headline its typewriter reveal and caret.
pub const TYPING_STYLE: [(&str, &str); 4] = [
    ("overflow", "hidden"),
    ("border-right", "3px solid #149ddd"),
    ("white-space", "nowrap"),
    ("animation", "typing 3.5s steps(40, end), blink-caret 0.75s step-end infinite"),
];

/// Surface size for a host with the given layout box (`offsetWidth`/`offsetHeight`).
#[must_use]
pub fn host_surface(offset_width: i32, offset_height: i32) -> SurfaceSize {
    SurfaceSize::new(f64::from(offset_width), f64::from(offset_height))
}

#[cfg(feature = "hydrate")]
pub use browser::{apply_typing_effect, mount_particles};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    use js_sys::Array;
    use particles::consts::OVERLAY_STYLE;
    use particles::engine::{Animator, AnimatorCore, Transition, browser_seed};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlCanvasElement, HtmlElement, IntersectionObserver, IntersectionObserverEntry};

    use super::{TYPING_STYLE, host_surface};
    use crate::config::SiteConfig;
    use crate::error::SiteError;
    use crate::util::dom;

    pub fn apply_typing_effect(config: &SiteConfig) -> Result<(), SiteError> {
        let document = dom::document()?;
        let selector = format!("#{} h1", config.hero_id);
        let heading = dom::query(&document, &selector)?.ok_or_else(|| SiteError::missing(selector))?;
        dom::set_styles(&heading, &TYPING_STYLE)
    }

    /// Per-frame driver around the animator.
    ///
    /// At most one animation frame is outstanding at a time. The frame
    /// callback holds only a weak reference, so the loop lives exactly as
    /// long as the event listeners that own a `FrameLoop`.
    #[derive(Clone)]
    struct FrameLoop {
        inner: Rc<FrameLoopInner>,
    }

    struct FrameLoopInner {
        animator: RefCell<Animator>,
        host: HtmlElement,
        tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
        scheduled: Cell<bool>,
    }

    impl FrameLoop {
        fn new(animator: Animator, host: HtmlElement) -> Self {
            let inner = Rc::new(FrameLoopInner {
                animator: RefCell::new(animator),
                host,
                tick: RefCell::new(None),
                scheduled: Cell::new(false),
            });
            let weak: Weak<FrameLoopInner> = Rc::downgrade(&inner);
            let tick = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
                if let Some(inner) = weak.upgrade() {
                    FrameLoop { inner }.on_frame();
                }
            });
            *inner.tick.borrow_mut() = Some(tick);
            Self { inner }
        }

        fn request(&self) {
            if self.inner.scheduled.get() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let tick = self.inner.tick.borrow();
            let Some(tick) = tick.as_ref() else {
                return;
            };
            match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(_) => self.inner.scheduled.set(true),
                Err(err) => log::warn!("particles: requestAnimationFrame failed: {err:?}"),
            }
        }

        /// Kick off the loop unless the animator is currently paused.
        fn start(&self) {
            if self.inner.animator.borrow().core.is_running() {
                self.request();
            }
        }

        fn on_frame(&self) {
            self.inner.scheduled.set(false);
            let produced = self.inner.animator.borrow_mut().frame();
            match produced {
                Ok(true) => self.request(),
                Ok(false) => log::debug!("particles: paused"),
                Err(err) => log::warn!("particles: render failed, stopping: {err:?}"),
            }
        }

        fn resize_to_host(&self) {
            let host = &self.inner.host;
            let size = host_surface(host.offset_width(), host.offset_height());
            self.inner.animator.borrow_mut().resize(size);
        }

        fn apply(&self, transition: Transition) {
            match transition {
                Transition::Started => self.request(),
                Transition::Stopped => log::debug!("particles: pausing"),
                Transition::Unchanged => {}
            }
        }

        fn set_document_visible(&self, visible: bool) {
            let transition = self.inner.animator.borrow_mut().core.set_document_visible(visible);
            self.apply(transition);
        }

        fn set_host_in_view(&self, in_view: bool) {
            let transition = self.inner.animator.borrow_mut().core.set_host_in_view(in_view);
            self.apply(transition);
        }
    }

    fn overlay_canvas(document: &web_sys::Document) -> Result<HtmlCanvasElement, SiteError> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SiteError::Js("created element is not a canvas".to_owned()))?;
        dom::set_styles(&canvas, &OVERLAY_STYLE)?;
        Ok(canvas)
    }

    /// Overlay the particle canvas on the hero and start the frame loop.
    pub fn mount_particles(config: &SiteConfig) -> Result<(), SiteError> {
        let window = dom::window()?;
        let document = dom::document()?;

        let host: Option<HtmlElement> = dom::by_id(&document, &config.hero_id);
        let bounds = host.as_ref().map(|h| host_surface(h.offset_width(), h.offset_height()));
        let (Some(host), Some(core)) = (host, AnimatorCore::attach(bounds, browser_seed())) else {
            return Err(SiteError::missing(format!("#{}", config.hero_id)));
        };

        let canvas = overlay_canvas(&document)?;
        host.append_child(&canvas)?;
        let animator = Animator::new(canvas, core)?;
        let frames = FrameLoop::new(animator, host.clone());

        let on_resize = frames.clone();
        dom::listen(&window, "resize", move |_| on_resize.resize_to_host())?;

        let on_visibility = frames.clone();
        let doc = document.clone();
        dom::listen(&document, "visibilitychange", move |_| {
            on_visibility.set_document_visible(!doc.hidden());
        })?;

        let on_intersect = frames.clone();
        let watch = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let last = entries
                    .iter()
                    .filter_map(|entry: JsValue| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .last();
                if let Some(entry) = last {
                    on_intersect.set_host_in_view(entry.is_intersecting());
                }
            },
        );
        let observer = IntersectionObserver::new(watch.as_ref().unchecked_ref())?;
        observer.observe(&host);
        watch.forget();

        frames.set_document_visible(!document.hidden());
        frames.start();
        Ok(())
    }
}
