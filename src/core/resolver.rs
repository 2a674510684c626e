// Active-section resolution: which registered section is nearest to the
// viewport center among those occupying the central band of the screen.

use super::constants::{VISIBLE_BAND_BOTTOM_FRAC, VISIBLE_BAND_TOP_FRAC};
use super::geometry::{Rect, Viewport};
use super::registry::{RegisteredSection, SectionAnchor};

/// Fractions of the viewport height a section must span across.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleBand {
    pub top_frac: f32,
    pub bottom_frac: f32,
}

impl Default for VisibleBand {
    fn default() -> Self {
        Self {
            top_frac: VISIBLE_BAND_TOP_FRAC,
            bottom_frac: VISIBLE_BAND_BOTTOM_FRAC,
        }
    }
}

impl VisibleBand {
    /// Top edge above `top_frac` of the viewport and bottom edge below
    /// `bottom_frac`; a section merely peeking in at an edge does not count.
    #[inline]
    pub fn contains(&self, rect: &Rect, viewport: &Viewport) -> bool {
        rect.top < viewport.height * self.top_frac
            && rect.bottom() > viewport.height * self.bottom_frac
    }
}

/// Pick the visible section closest to the viewport center.
///
/// Ties keep the earliest section in iteration (registration) order.
pub fn resolve_active<'a, A, I>(
    sections: I,
    viewport: &Viewport,
    band: &VisibleBand,
) -> Option<&'a str>
where
    A: SectionAnchor + 'a,
    I: IntoIterator<Item = &'a RegisteredSection<A>>,
{
    let viewport_center = viewport.center_doc_y();
    let mut best: Option<(&'a str, f32)> = None;
    for section in sections {
        let Some(rect) = section.anchor.bounding_rect() else {
            continue;
        };
        if !band.contains(&rect, viewport) {
            continue;
        }
        let section_center = viewport.scroll_y + rect.center_y();
        let distance = (section_center - viewport_center).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((section.id.as_str(), distance)),
        }
    }
    best.map(|(id, _)| id)
}

/// Last resolved active section, updated only on change.
#[derive(Clone, Debug, Default)]
pub struct ActiveSection {
    current: Option<String>,
    changes: u64,
}

impl ActiveSection {
    pub fn get(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Number of transitions observed so far.
    pub fn changes(&self) -> u64 {
        self.changes
    }

    /// Store `next`; returns `true` only if it differs from the current value.
    pub fn update(&mut self, next: Option<&str>) -> bool {
        if self.current.as_deref() == next {
            return false;
        }
        self.current = next.map(str::to_string);
        self.changes += 1;
        true
    }

    pub fn clear(&mut self) -> bool {
        self.update(None)
    }
}
