// Authored, section-relative placement of a decoration.

use super::object::{DecorObject, PerObject};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlacementError {
    #[error("scale must be a finite positive number, got {0}")]
    NonPositiveScale(f32),
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Where a decoration sits relative to its anchor section.
///
/// `offset_x`/`offset_y` are pixels from the section box center and may
/// point outside the box. `depth` is a scene z value, not pixels.
/// `rotation` is an Euler triple in radians; `None` selects the idle spin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementSpec {
    #[serde(alias = "x", default)]
    pub offset_x: f32,
    #[serde(alias = "y", default)]
    pub offset_y: f32,
    #[serde(alias = "z", default)]
    pub depth: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f32; 3]>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_scale() -> f32 {
    1.0
}

fn default_visible() -> bool {
    true
}

impl Default for PlacementSpec {
    fn default() -> Self {
        Self::hidden()
    }
}

impl PlacementSpec {
    pub const fn new(offset_x: f32, offset_y: f32, depth: f32, scale: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            depth,
            scale,
            rotation: None,
            visible: true,
        }
    }

    pub const fn hidden() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            depth: 0.0,
            scale: 1.0,
            rotation: None,
            visible: false,
        }
    }

    pub const fn with_rotation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Some([x, y, z]);
        self
    }

    pub fn validate(&self) -> Result<(), PlacementError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(PlacementError::NonPositiveScale(self.scale));
        }
        if !(self.offset_x.is_finite() && self.offset_y.is_finite()) {
            return Err(PlacementError::NonFinite("offset"));
        }
        if !self.depth.is_finite() {
            return Err(PlacementError::NonFinite("depth"));
        }
        if let Some(r) = self.rotation {
            if r.iter().any(|a| !a.is_finite()) {
                return Err(PlacementError::NonFinite("rotation"));
            }
        }
        Ok(())
    }
}

/// Placements for every decoration, as authored by one section.
pub type SectionTargets = PerObject<PlacementSpec>;

/// Check every placement, returning the first offending decoration.
pub fn validate_targets(targets: &SectionTargets) -> Result<(), (DecorObject, PlacementError)> {
    for (object, spec) in targets.iter() {
        spec.validate().map_err(|e| (object, e))?;
    }
    Ok(())
}

/// Parse section targets from JSON, e.g. a `data-deco-targets` attribute.
///
/// All three decorations must be present; fields inside each placement
/// fall back to defaults (`scale` 1, `visible` true).
pub fn parse_targets(json: &str) -> Result<SectionTargets, serde_json::Error> {
    serde_json::from_str(json)
}
