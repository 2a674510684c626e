// Pixel-space geometry shared by the resolver and the projector.

/// Viewport-relative bounding box in CSS pixels (as `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.left + self.width * 0.5
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.top + self.height * 0.5
    }

    /// Same box moved vertically, as happens to every section when the page scrolls.
    #[inline]
    pub fn shifted_y(&self, dy: f32) -> Self {
        Self {
            top: self.top + dy,
            ..*self
        }
    }
}

/// Browser viewport size and scroll offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32, scroll_y: f32) -> Self {
        Self {
            width,
            height,
            scroll_y,
        }
    }

    /// Vertical center of the viewport in document coordinates.
    #[inline]
    pub fn center_doc_y(&self) -> f32 {
        self.scroll_y + self.height * 0.5
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
