// The positioning context handed to page sections and decoration animators.

use super::geometry::Viewport;
use super::object::PerObject;
use super::placement::SectionTargets;
use super::projector::{project, ResolvedPlacement, SceneSpan};
use super::registry::{RegisterOutcome, RegistryError, SectionAnchor, SectionRegistry};
use super::resolver::{resolve_active, ActiveSection, VisibleBand};
use super::schedule::ResolveRequests;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoordinatorParams {
    pub band: VisibleBand,
    pub span: SceneSpan,
}

/// Registry + active-section state for one page.
///
/// Created when the decoration layer mounts and disposed with it; every
/// consumer receives it explicitly. Once disposed it rejects registrations.
pub struct PositionCoordinator<A> {
    registry: SectionRegistry<A>,
    active: ActiveSection,
    requests: ResolveRequests,
    params: CoordinatorParams,
    disposed: bool,
}

impl<A: SectionAnchor> Default for PositionCoordinator<A> {
    fn default() -> Self {
        Self::new(CoordinatorParams::default())
    }
}

impl<A: SectionAnchor> PositionCoordinator<A> {
    pub fn new(params: CoordinatorParams) -> Self {
        Self {
            registry: SectionRegistry::new(),
            active: ActiveSection::default(),
            requests: ResolveRequests::default(),
            params,
            disposed: false,
        }
    }

    pub fn params(&self) -> &CoordinatorParams {
        &self.params
    }

    pub fn registry(&self) -> &SectionRegistry<A> {
        &self.registry
    }

    /// Insert or replace a section. Takes effect on the next resolution pass.
    pub fn register(
        &mut self,
        id: &str,
        anchor: A,
        targets: SectionTargets,
    ) -> Result<RegisterOutcome, RegistryError> {
        if self.disposed {
            return Err(RegistryError::Disposed);
        }
        let outcome = self.registry.register(id, anchor, targets)?;
        log::debug!("[sections] {:?} `{}` ({} registered)", outcome, id, self.registry.len());
        Ok(outcome)
    }

    /// Remove a section; unknown ids are ignored.
    pub fn unregister(&mut self, id: &str) -> bool {
        let removed = self.registry.unregister(id);
        if removed {
            log::debug!("[sections] unregistered `{}`", id);
            if self.active.get() == Some(id) {
                self.active.clear();
            }
        }
        removed
    }

    /// Ask for a resolution pass on the next frame. Bursts of requests
    /// before that frame collapse into one pass.
    pub fn request_resolve(&mut self) {
        if !self.disposed {
            self.requests.request();
        }
    }

    pub fn resolve_requests(&self) -> &ResolveRequests {
        &self.requests
    }

    /// Run the pending resolution pass, if any. Called once per frame before
    /// positions are read, so every frame sees a current active section.
    pub fn resolve_pending(&mut self, viewport: &Viewport) -> bool {
        if !self.requests.take() {
            return false;
        }
        self.resolve(viewport)
    }

    /// Recompute the active section; returns whether it changed.
    ///
    /// Sections without geometry (detached elements) are skipped but stay
    /// registered until unregistered.
    pub fn resolve(&mut self, viewport: &Viewport) -> bool {
        let next = resolve_active(self.registry.iter(), viewport, &self.params.band);
        let changed = self.active.update(next);
        if changed {
            log::debug!("[sections] active -> {:?}", self.active.get());
        }
        changed
    }

    /// Currently active section id, if any.
    pub fn active_component(&self) -> Option<&str> {
        self.active.get()
    }

    /// Scene-space targets for every decoration, from the active section's
    /// live geometry; all hidden when no section is active.
    pub fn current_positions(&self, viewport: &Viewport) -> PerObject<ResolvedPlacement> {
        let section = self.active.get().and_then(|id| self.registry.get(id));
        let Some(section) = section else {
            return PerObject::default();
        };
        let Some(rect) = section.anchor.bounding_rect() else {
            return PerObject::default();
        };
        section
            .targets
            .map(|_, spec| project(&rect, viewport, spec, &self.params.span))
    }

    /// Forget every section and drop pending work (layer teardown).
    /// Returns `false` if it was already disposed.
    pub fn dispose(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.disposed = true;
        self.registry.clear();
        self.active.clear();
        self.requests.reset();
        true
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
