pub mod animator;
pub mod constants;
pub mod coordinator;
pub mod geometry;
pub mod mesh;
pub mod object;
pub mod placement;
pub mod projector;
pub mod registry;
pub mod resolver;
pub mod schedule;
pub mod sections;

pub use animator::{AnimatorParams, ObjectAnimator, ObjectRenderState};
pub use coordinator::{CoordinatorParams, PositionCoordinator};
pub use geometry::{Rect, Viewport};
pub use mesh::MeshData;
pub use object::{DecorObject, PerObject};
pub use placement::{parse_targets, SectionTargets};
pub use registry::SectionAnchor;
pub use schedule::PendingFrame;
pub use sections::preset_targets;

// Shader bundled as a string constant
pub static DECOR_WGSL: &str = include_str!("../../shaders/decor.wgsl");
