// Authored placements for the landing page's sections.
//
// Offsets are pixels from each section's box center; sections at the
// top and bottom of the page push decorations past their own edges so the
// models bridge into the neighbouring section.

use super::object::PerObject;
use super::placement::{PlacementSpec, SectionTargets};

pub const HERO: &str = "hero";
pub const FEATURED_COURSES: &str = "featured-courses";
pub const SCHOLARSHIPS: &str = "scholarships";
pub const TESTIMONIALS: &str = "testimonials";
pub const RESOURCES: &str = "resources";
pub const NEWSLETTER: &str = "newsletter";

pub const PRESET_IDS: [&str; 6] = [
    HERO,
    FEATURED_COURSES,
    SCHOLARSHIPS,
    TESTIMONIALS,
    RESOURCES,
    NEWSLETTER,
];

/// Built-in targets for a known section id.
pub fn preset_targets(id: &str) -> Option<SectionTargets> {
    let targets = match id {
        HERO => PerObject {
            pencil: PlacementSpec::new(420.0, -50.0, 1.0, 3.0).with_rotation(0.2, 0.0, -0.6),
            eraser: PlacementSpec::new(-460.0, 120.0, 0.5, 2.2),
            sharpener: PlacementSpec::new(360.0, 220.0, -0.5, 1.8),
        },
        FEATURED_COURSES => PerObject {
            pencil: PlacementSpec::new(-520.0, -180.0, 0.8, 2.4).with_rotation(0.0, 0.4, 0.9),
            eraser: PlacementSpec::new(540.0, 40.0, 0.2, 1.8),
            sharpener: PlacementSpec::hidden(),
        },
        SCHOLARSHIPS => PerObject {
            pencil: PlacementSpec::new(500.0, 160.0, 1.2, 2.0),
            eraser: PlacementSpec::hidden(),
            sharpener: PlacementSpec::new(-480.0, -140.0, 0.6, 2.2).with_rotation(0.3, -0.5, 0.0),
        },
        TESTIMONIALS => PerObject {
            pencil: PlacementSpec::hidden(),
            eraser: PlacementSpec::new(-540.0, -60.0, 0.4, 2.0).with_rotation(-0.2, 0.6, 0.3),
            sharpener: PlacementSpec::new(520.0, 180.0, 0.9, 1.6),
        },
        RESOURCES => PerObject {
            pencil: PlacementSpec::new(-500.0, 260.0, 0.7, 2.2).with_rotation(0.0, 0.0, 1.2),
            eraser: PlacementSpec::new(480.0, -200.0, 0.3, 1.6),
            sharpener: PlacementSpec::new(0.0, 380.0, -0.4, 1.4),
        },
        NEWSLETTER => PerObject {
            pencil: PlacementSpec::new(380.0, 0.0, 1.0, 2.0).with_rotation(0.1, 0.3, -1.0),
            eraser: PlacementSpec::new(-380.0, 40.0, 0.8, 1.6),
            sharpener: PlacementSpec::hidden(),
        },
        _ => return None,
    };
    Some(targets)
}
