// The closed set of floating decorations and a record holding one value per
// decoration.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorObject {
    Pencil,
    Eraser,
    Sharpener,
}

impl DecorObject {
    pub const ALL: [DecorObject; 3] = [
        DecorObject::Pencil,
        DecorObject::Eraser,
        DecorObject::Sharpener,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            DecorObject::Pencil => 0,
            DecorObject::Eraser => 1,
            DecorObject::Sharpener => 2,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            DecorObject::Pencil => "pencil",
            DecorObject::Eraser => "eraser",
            DecorObject::Sharpener => "sharpener",
        }
    }
}

impl std::fmt::Display for DecorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per decoration.
///
/// Named fields (rather than a map) make a missing decoration a compile
/// error in Rust code and a parse error in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerObject<T> {
    pub pencil: T,
    pub eraser: T,
    pub sharpener: T,
}

impl<T> PerObject<T> {
    pub fn from_fn(mut f: impl FnMut(DecorObject) -> T) -> Self {
        Self {
            pencil: f(DecorObject::Pencil),
            eraser: f(DecorObject::Eraser),
            sharpener: f(DecorObject::Sharpener),
        }
    }

    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            pencil: value.clone(),
            eraser: value.clone(),
            sharpener: value,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(DecorObject, &T) -> U) -> PerObject<U> {
        PerObject {
            pencil: f(DecorObject::Pencil, &self.pencil),
            eraser: f(DecorObject::Eraser, &self.eraser),
            sharpener: f(DecorObject::Sharpener, &self.sharpener),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DecorObject, &T)> {
        DecorObject::ALL.into_iter().map(move |o| (o, &self[o]))
    }
}

impl<T> Index<DecorObject> for PerObject<T> {
    type Output = T;

    fn index(&self, object: DecorObject) -> &T {
        match object {
            DecorObject::Pencil => &self.pencil,
            DecorObject::Eraser => &self.eraser,
            DecorObject::Sharpener => &self.sharpener,
        }
    }
}

impl<T> IndexMut<DecorObject> for PerObject<T> {
    fn index_mut(&mut self, object: DecorObject) -> &mut T {
        match object {
            DecorObject::Pencil => &mut self.pencil,
            DecorObject::Eraser => &mut self.eraser,
            DecorObject::Sharpener => &mut self.sharpener,
        }
    }
}
