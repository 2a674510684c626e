use crate::constants::{BREAKPOINT_ATTR, DEFAULT_MODEL_BASE, LOG_LEVEL_ATTR, MODEL_BASE_ATTR};
use crate::core::{AnimatorParams, CoordinatorParams};
use web_sys as web;

/// Per-mount settings, read from `data-*` attributes on the canvas.
///
/// Missing attributes keep the defaults; malformed ones are logged and ignored.
#[derive(Clone, Debug)]
pub struct LayerConfig {
    pub model_base: String,
    pub coordinator: CoordinatorParams,
    pub animator: AnimatorParams,
    pub log_level: Option<log::Level>,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            model_base: DEFAULT_MODEL_BASE.to_string(),
            coordinator: CoordinatorParams::default(),
            animator: AnimatorParams::default(),
            log_level: None,
        }
    }
}

impl LayerConfig {
    pub fn from_element(el: &web::Element) -> Self {
        let mut cfg = Self::default();
        if let Some(base) = el.get_attribute(MODEL_BASE_ATTR) {
            let base = base.trim_end_matches('/');
            if !base.is_empty() {
                cfg.model_base = base.to_string();
            }
        }
        if let Some(raw) = el.get_attribute(BREAKPOINT_ATTR) {
            match raw.trim().parse::<f32>() {
                Ok(px) if px.is_finite() && px >= 0.0 => cfg.animator.mobile.breakpoint_px = px,
                _ => log::warn!("[config] ignoring {}={:?}", BREAKPOINT_ATTR, raw),
            }
        }
        if let Some(raw) = el.get_attribute(LOG_LEVEL_ATTR) {
            match raw.trim().parse::<log::Level>() {
                Ok(level) => cfg.log_level = Some(level),
                Err(_) => log::warn!("[config] ignoring {}={:?}", LOG_LEVEL_ATTR, raw),
            }
        }
        cfg
    }

    pub fn model_url(&self, name: &str) -> String {
        format!("{}/{}.json", self.model_base, name)
    }
}
