use crate::core::{Rect, SectionAnchor, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current viewport size and vertical scroll in CSS pixels.
pub fn current_viewport() -> Option<Viewport> {
    let window = web::window()?;
    let width = window.inner_width().ok()?.as_f64()? as f32;
    let height = window.inner_height().ok()?.as_f64()? as f32;
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    Some(Viewport::new(width, height, scroll_y))
}

#[inline]
pub fn rect_from_dom(r: &web::DomRect) -> Rect {
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// A section root element, read live every time geometry is needed.
#[derive(Clone)]
pub struct ElementAnchor(pub web::Element);

impl SectionAnchor for ElementAnchor {
    fn bounding_rect(&self) -> Option<Rect> {
        if !self.0.is_connected() {
            return None;
        }
        Some(rect_from_dom(&self.0.get_bounding_client_rect()))
    }
}

/// Section roots already present in the document, as `(id, element)`.
pub fn find_section_elements(
    document: &web::Document,
    attr: &str,
) -> Vec<(String, web::Element)> {
    let mut out = Vec::new();
    let Ok(nodes) = document.query_selector_all(&format!("[{}]", attr)) else {
        return out;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        if let Some(id) = el.get_attribute(attr) {
            out.push((id, el));
        }
    }
    out
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
