use crate::config::LayerConfig;
use crate::core::{DecorObject, MeshData};
use crate::frame::SharedGpu;
use anyhow::Context;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch failed: {:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}", resp.status());
    }
    let body = resp
        .text()
        .map_err(|e| anyhow::anyhow!("body unavailable: {:?}", e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| anyhow::anyhow!("body read failed: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("body is not text"))
}

/// Fetch and validate the model for `object`, or fall back to its placeholder.
pub async fn load_mesh(config: &LayerConfig, object: DecorObject) -> MeshData {
    let url = config.model_url(object.name());
    let loaded = async {
        let text = fetch_text(&url).await?;
        MeshData::from_json(&text).with_context(|| format!("parse {}", url))
    };
    match loaded.await {
        Ok(mesh) => {
            log::info!("[models] {} loaded ({} triangles)", object, mesh.triangle_count());
            mesh
        }
        Err(e) => {
            log::warn!("[models] {} unavailable ({:#}); using placeholder", url, e);
            MeshData::placeholder(object)
        }
    }
}

/// Load every model and hand it to the renderer as it arrives.
pub async fn load_all(config: &LayerConfig, gpu: &SharedGpu) {
    for object in DecorObject::ALL {
        let mesh = load_mesh(config, object).await;
        if let Some(g) = gpu.borrow_mut().as_mut() {
            g.set_mesh(object, &mesh);
        }
    }
}
