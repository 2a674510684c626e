// Page-lifetime registry of sections that anchor decorations.

use super::geometry::Rect;
use super::object::DecorObject;
use super::placement::{validate_targets, PlacementError, SectionTargets};
use fnv::FnvHashMap;

/// Geometry source for a registered section.
///
/// The registry only reads geometry; it never creates or destroys the
/// underlying element. `None` means no usable geometry this frame (e.g. the
/// element is not in the document yet); the entry stays registered and is
/// considered again once geometry comes back.
pub trait SectionAnchor {
    fn bounding_rect(&self) -> Option<Rect>;
}

impl SectionAnchor for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("section id must not be empty")]
    EmptyId,
    #[error("decoration layer has been disposed")]
    Disposed,
    #[error("section `{id}` has an invalid {object} placement: {source}")]
    InvalidPlacement {
        id: String,
        object: DecorObject,
        #[source]
        source: PlacementError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Inserted,
    Replaced,
}

pub struct RegisteredSection<A> {
    pub id: String,
    pub anchor: A,
    pub targets: SectionTargets,
}

/// Sections in registration order, plus an id index.
///
/// Re-registering an id replaces the entry in place, so it keeps its
/// original position for tie-breaking.
pub struct SectionRegistry<A> {
    sections: Vec<RegisteredSection<A>>,
    index: FnvHashMap<String, usize>,
}

impl<A> Default for SectionRegistry<A> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            index: FnvHashMap::default(),
        }
    }
}

impl<A: SectionAnchor> SectionRegistry<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        id: &str,
        anchor: A,
        targets: SectionTargets,
    ) -> Result<RegisterOutcome, RegistryError> {
        if id.is_empty() {
            return Err(RegistryError::EmptyId);
        }
        validate_targets(&targets).map_err(|(object, source)| RegistryError::InvalidPlacement {
            id: id.to_string(),
            object,
            source,
        })?;
        let entry = RegisteredSection {
            id: id.to_string(),
            anchor,
            targets,
        };
        match self.index.get(id) {
            Some(&i) => {
                self.sections[i] = entry;
                Ok(RegisterOutcome::Replaced)
            }
            None => {
                self.index.insert(id.to_string(), self.sections.len());
                self.sections.push(entry);
                Ok(RegisterOutcome::Inserted)
            }
        }
    }

    /// Remove `id`; returns whether it was present.
    pub fn unregister(&mut self, id: &str) -> bool {
        match self.index.remove(id) {
            Some(i) => {
                self.sections.remove(i);
                self.reindex();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&RegisteredSection<A>> {
        self.index.get(id).map(|&i| &self.sections[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Sections in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredSection<A>> {
        self.sections.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn clear(&mut self) {
        self.sections.clear();
        self.index.clear();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, s) in self.sections.iter().enumerate() {
            self.index.insert(s.id.clone(), i);
        }
    }
}
