#![cfg(target_arch = "wasm32")]
use crate::config::LayerConfig;
use crate::constants::{DEFAULT_CANVAS_ID, SECTION_ATTR, TARGETS_ATTR};
use crate::core::{parse_targets, preset_targets, PositionCoordinator, SectionTargets};
use crate::dom::ElementAnchor;
use crate::events::{Listener, ResolveScheduler, SharedCoordinator};
use crate::frame::{FrameContext, FrameLoop, SharedGpu};
use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod models;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("deco-web loaded");
    Ok(())
}

/// Targets for a section: explicit JSON wins, otherwise the preset for its id.
fn section_targets(id: &str, json: Option<&str>) -> anyhow::Result<SectionTargets> {
    match json {
        Some(json) => {
            parse_targets(json).with_context(|| format!("targets for section `{}`", id))
        }
        None => {
            preset_targets(id).ok_or_else(|| anyhow::anyhow!("no preset for section `{}`", id))
        }
    }
}

fn register_document_sections(document: &web::Document, coordinator: &SharedCoordinator) {
    for (id, el) in dom::find_section_elements(document, SECTION_ATTR) {
        let json = el.get_attribute(TARGETS_ATTR);
        let registered = section_targets(&id, json.as_deref()).and_then(|targets| {
            coordinator
                .borrow_mut()
                .register(&id, ElementAnchor(el), targets)
                .map_err(anyhow::Error::from)
        });
        if let Err(e) = registered {
            log::warn!("[sections] skipping `{}`: {:#}", id, e);
        }
    }
}

fn js_error(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// The decoration layer mounted on one canvas.
///
/// Owns the positioning coordinator, the scroll/resize wiring and the render
/// loop. Page code registers sections through it and calls `dispose` (or
/// `free`) on teardown.
#[wasm_bindgen]
pub struct DecorLayer {
    coordinator: SharedCoordinator,
    scheduler: Option<ResolveScheduler>,
    frame_loop: Option<FrameLoop>,
    canvas_resize: Option<Listener>,
}

#[wasm_bindgen]
impl DecorLayer {
    /// Mount on `#canvas_id` (default `deco-canvas`) and register every
    /// `[data-deco-section]` element already in the document.
    pub fn mount(canvas_id: Option<String>) -> Result<DecorLayer, JsValue> {
        let canvas_id = canvas_id.unwrap_or_else(|| DEFAULT_CANVAS_ID.to_string());
        Self::try_mount(&canvas_id).map_err(js_error)
    }

    /// Register or replace a section. Without `targets_json` the built-in
    /// preset for `id` is used.
    pub fn register(
        &self,
        id: &str,
        element: web::Element,
        targets_json: Option<String>,
    ) -> Result<(), JsValue> {
        let targets = section_targets(id, targets_json.as_deref()).map_err(js_error)?;
        let mut coordinator = self.coordinator.borrow_mut();
        coordinator
            .register(id, ElementAnchor(element), targets)
            .map_err(|e| {
                log::warn!("[sections] register `{}` rejected: {}", id, e);
                JsValue::from_str(&e.to_string())
            })?;
        coordinator.request_resolve();
        Ok(())
    }

    /// Remove a section; returns whether it was registered.
    pub fn unregister(&self, id: &str) -> bool {
        let mut coordinator = self.coordinator.borrow_mut();
        let removed = coordinator.unregister(id);
        if removed {
            coordinator.request_resolve();
        }
        removed
    }

    #[wasm_bindgen(js_name = activeComponent)]
    pub fn active_component(&self) -> Option<String> {
        self.coordinator.borrow().active_component().map(str::to_string)
    }

    /// Scene-space targets for each decoration, as JSON.
    #[wasm_bindgen(js_name = currentPositionsJson)]
    pub fn current_positions_json(&self) -> Result<String, JsValue> {
        let viewport = dom::current_viewport().unwrap_or_default();
        let positions = self.coordinator.borrow().current_positions(&viewport);
        serde_json::to_string(&positions).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Displayed (eased) transforms of each decoration, as JSON.
    #[wasm_bindgen(js_name = renderStatesJson)]
    pub fn render_states_json(&self) -> Result<String, JsValue> {
        let Some(frame_loop) = &self.frame_loop else {
            return Ok("null".to_string());
        };
        serde_json::to_string(&frame_loop.states())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Stop the render loop, cancel pending frames, drop listeners and
    /// forget every section. Safe to call more than once; later `register`
    /// calls fail.
    pub fn dispose(&mut self) {
        if !self.coordinator.borrow_mut().dispose() {
            return;
        }
        self.frame_loop.take();
        self.scheduler.take();
        self.canvas_resize.take();
        log::info!("[layer] disposed");
    }
}

impl DecorLayer {
    fn try_mount(canvas_id: &str) -> anyhow::Result<DecorLayer> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        let config = LayerConfig::from_element(&canvas);
        if let Some(level) = config.log_level {
            log::set_max_level(level.to_level_filter());
        }

        // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
        dom::sync_canvas_backing_size(&canvas);
        let canvas_resize = {
            let canvas = canvas.clone();
            Listener::on_window("resize", move || dom::sync_canvas_backing_size(&canvas))
        };

        let coordinator: SharedCoordinator =
            Rc::new(RefCell::new(PositionCoordinator::new(config.coordinator)));
        register_document_sections(&document, &coordinator);

        let scheduler = ResolveScheduler::install(&coordinator);
        coordinator.borrow_mut().request_resolve();

        let gpu: SharedGpu = Rc::new(RefCell::new(None));
        {
            let gpu = gpu.clone();
            let canvas = canvas.clone();
            let config = config.clone();
            spawn_local(async move {
                let Some(g) = frame::init_gpu(&canvas).await else {
                    return;
                };
                *gpu.borrow_mut() = Some(g);
                models::load_all(&config, &gpu).await;
            });
        }

        let frame_loop = FrameLoop::start(FrameContext::new(
            coordinator.clone(),
            config.animator,
            gpu,
            canvas,
        ));

        log::info!(
            "[layer] mounted on #{} with {} sections",
            canvas_id,
            coordinator.borrow().registry().len()
        );
        Ok(DecorLayer {
            coordinator,
            scheduler: Some(scheduler),
            frame_loop: Some(frame_loop),
            canvas_resize,
        })
    }
}

impl Drop for DecorLayer {
    fn drop(&mut self) {
        self.dispose();
    }
}
