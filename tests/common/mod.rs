// Host-side access to the pure core modules.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

pub mod core {
    pub mod animator {
        include!("../../src/core/animator.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod coordinator {
        include!("../../src/core/coordinator.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod mesh {
        include!("../../src/core/mesh.rs");
    }
    pub mod object {
        include!("../../src/core/object.rs");
    }
    pub mod placement {
        include!("../../src/core/placement.rs");
    }
    pub mod projector {
        include!("../../src/core/projector.rs");
    }
    pub mod registry {
        include!("../../src/core/registry.rs");
    }
    pub mod resolver {
        include!("../../src/core/resolver.rs");
    }
    pub mod schedule {
        include!("../../src/core/schedule.rs");
    }
    pub mod sections {
        include!("../../src/core/sections.rs");
    }
}

use self::core::geometry::{Rect, Viewport};
use self::core::registry::SectionAnchor;
use std::cell::Cell;
use std::rc::Rc;

/// Section anchor whose box can be moved (scrolled), detached and re-attached
/// by the test.
#[derive(Clone)]
pub struct MovableAnchor {
    rect: Rc<Cell<Rect>>,
    attached: Rc<Cell<bool>>,
}

impl MovableAnchor {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Rc::new(Cell::new(rect)),
            attached: Rc::new(Cell::new(true)),
        }
    }

    pub fn set(&self, rect: Rect) {
        self.rect.set(rect);
    }

    pub fn get(&self) -> Rect {
        self.rect.get()
    }

    /// Move the box as the page would when scrolled down by `dy` pixels.
    pub fn scroll_by(&self, dy: f32) {
        self.rect.set(self.rect.get().shifted_y(-dy));
    }

    pub fn detach(&self) {
        self.attached.set(false);
    }

    pub fn attach(&self) {
        self.attached.set(true);
    }
}

impl SectionAnchor for MovableAnchor {
    fn bounding_rect(&self) -> Option<Rect> {
        self.attached.get().then(|| self.rect.get())
    }
}

pub const DESKTOP: Viewport = Viewport::new(1280.0, 800.0, 0.0);

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
