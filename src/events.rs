use crate::core::PositionCoordinator;
use crate::dom::ElementAnchor;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedCoordinator = Rc<RefCell<PositionCoordinator<ElementAnchor>>>;

/// An event listener that is removed when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn on_window(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let target: web::EventTarget = window.into();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("[events] add {} listener failed: {:?}", event, e);
            return None;
        }
        Some(Self {
            target,
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Turns scroll/resize bursts into resolution requests on the coordinator.
///
/// The pass itself runs at the start of the next render frame
/// (`FrameContext::frame`), so at most one resolution happens per frame and
/// the animators read the section it picked in that same frame.
pub struct ResolveScheduler {
    _listeners: Vec<Listener>,
}

impl ResolveScheduler {
    pub fn install(coordinator: &SharedCoordinator) -> Self {
        let listeners = ["scroll", "resize"]
            .into_iter()
            .filter_map(|event| {
                let weak = Rc::downgrade(coordinator);
                Listener::on_window(event, move || {
                    if let Some(coordinator) = weak.upgrade() {
                        coordinator.borrow_mut().request_resolve();
                    }
                })
            })
            .collect();
        Self {
            _listeners: listeners,
        }
    }
}
