use crate::core::{
    AnimatorParams, DecorObject, ObjectAnimator, ObjectRenderState, PendingFrame, PerObject,
};
use crate::dom;
use crate::events::SharedCoordinator;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedGpu = Rc<RefCell<Option<render::GpuState>>>;

pub struct FrameContext {
    pub coordinator: SharedCoordinator,
    pub animators: PerObject<ObjectAnimator>,
    pub gpu: SharedGpu,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
}

impl FrameContext {
    pub fn new(
        coordinator: SharedCoordinator,
        params: AnimatorParams,
        gpu: SharedGpu,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            coordinator,
            animators: PerObject::from_fn(|object| ObjectAnimator::new(object, params)),
            gpu,
            canvas,
            started: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let Some(viewport) = dom::current_viewport() else {
            return;
        };

        // Resolve first, then one snapshot per frame so the three decorations
        // agree with each other and with the section picked this frame
        let (targets, active) = {
            let mut c = self.coordinator.borrow_mut();
            c.resolve_pending(&viewport);
            (
                c.current_positions(&viewport),
                c.active_component().map(str::to_string),
            )
        };
        for object in DecorObject::ALL {
            self.animators[object].step(
                &targets[object],
                active.as_deref(),
                viewport.width,
                elapsed,
            );
        }

        let states = self.states();
        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&states) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    pub fn states(&self) -> PerObject<ObjectRenderState> {
        self.animators.map(|_, a| *a.state())
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas.clone()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

struct LoopInner {
    ctx: RefCell<FrameContext>,
    pending: RefCell<PendingFrame>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        let requested = self.pending.borrow_mut().request(
            || w.request_animation_frame(cb.as_ref().unchecked_ref()),
            |old| {
                _ = w.cancel_animation_frame(old);
            },
        );
        if let Err(e) = requested {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// requestAnimationFrame-driven loop, cancelled when stopped or dropped.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn start(ctx: FrameContext) -> Self {
        let inner = Rc::new(LoopInner {
            ctx: RefCell::new(ctx),
            pending: RefCell::new(PendingFrame::default()),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.borrow_mut().fired();
            inner.ctx.borrow_mut().frame();
            inner.request();
        }) as Box<dyn FnMut()>));
        inner.request();
        Self { inner }
    }

    pub fn states(&self) -> PerObject<ObjectRenderState> {
        self.inner.ctx.borrow().states()
    }

    pub fn stop(&self) {
        self.inner.pending.borrow_mut().cancel(|handle| {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
        });
        self.inner.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
