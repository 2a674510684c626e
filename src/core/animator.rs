// Per-decoration easing toward the projected target, once per frame.

use super::constants::*;
use super::object::DecorObject;
use super::projector::ResolvedPlacement;
use glam::Vec3;
use serde::Serialize;
use std::f32::consts::{PI, TAU};

/// Displayed transform of one decoration. Rotation is XYZ Euler radians,
/// each axis wrapped into (-PI, PI]: an authored angle such as 4.0 is shown
/// as the equivalent 4.0 - TAU.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ObjectRenderState {
    pub position: Vec3,
    pub scale: f32,
    pub rotation: Vec3,
    pub visible: bool,
}

impl Default for ObjectRenderState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            rotation: Vec3::ZERO,
            visible: false,
        }
    }
}

/// Pulls decorations toward the center and shrinks them on narrow viewports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobileAdjust {
    pub breakpoint_px: f32,
    pub offset_x_factor: f32,
    pub offset_y_factor: f32,
    pub scale_factor: f32,
}

impl Default for MobileAdjust {
    fn default() -> Self {
        Self {
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            offset_x_factor: MOBILE_OFFSET_X_FACTOR,
            offset_y_factor: MOBILE_OFFSET_Y_FACTOR,
            scale_factor: MOBILE_SCALE_FACTOR,
        }
    }
}

impl MobileAdjust {
    #[inline]
    pub fn applies(&self, viewport_width: f32) -> bool {
        viewport_width < self.breakpoint_px
    }

    pub fn apply(&self, target: &ResolvedPlacement, viewport_width: f32) -> ResolvedPlacement {
        if !self.applies(viewport_width) {
            return *target;
        }
        ResolvedPlacement {
            position: Vec3::new(
                target.position.x * self.offset_x_factor,
                target.position.y * self.offset_y_factor,
                target.position.z,
            ),
            scale: target.scale * self.scale_factor,
            ..*target
        }
    }
}

/// Time-driven rotation for placements without an authored rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleSpin {
    pub spin_y_per_sec: f32,
    pub wobble_amp: f32,
    pub wobble_hz: f32,
    pub phase: f32,
}

impl IdleSpin {
    /// Each decoration gets its own phase and spin direction so the three
    /// never turn in lockstep.
    pub fn for_object(object: DecorObject) -> Self {
        let i = object.index() as f32;
        let direction = if object.index() % 2 == 0 { 1.0 } else { -1.0 };
        Self {
            spin_y_per_sec: IDLE_SPIN_Y_PER_SEC * direction,
            wobble_amp: IDLE_WOBBLE_AMP,
            wobble_hz: IDLE_WOBBLE_HZ,
            phase: i * TAU / 3.0,
        }
    }

    pub fn rotation_at(&self, elapsed_sec: f32) -> Vec3 {
        let w = TAU * self.wobble_hz * elapsed_sec + self.phase;
        Vec3::new(
            self.wobble_amp * w.sin(),
            wrap_angle(self.phase + self.spin_y_per_sec * elapsed_sec),
            0.5 * self.wobble_amp * w.cos(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorParams {
    pub steady_factor: f32,
    pub catch_up_factor: f32,
    pub catch_up_window_sec: f32,
    pub mobile: MobileAdjust,
}

impl Default for AnimatorParams {
    fn default() -> Self {
        Self {
            steady_factor: LERP_STEADY,
            catch_up_factor: LERP_CATCH_UP,
            catch_up_window_sec: CATCH_UP_WINDOW_SEC,
            mobile: MobileAdjust::default(),
        }
    }
}

pub struct ObjectAnimator {
    object: DecorObject,
    params: AnimatorParams,
    idle: IdleSpin,
    state: ObjectRenderState,
    last_active: Option<String>,
    catch_up_until: f32,
    placed: bool,
    last_target: Option<ResolvedPlacement>,
}

impl ObjectAnimator {
    pub fn new(object: DecorObject, params: AnimatorParams) -> Self {
        Self {
            object,
            params,
            idle: IdleSpin::for_object(object),
            state: ObjectRenderState::default(),
            last_active: None,
            catch_up_until: f32::NEG_INFINITY,
            placed: false,
            last_target: None,
        }
    }

    pub fn object(&self) -> DecorObject {
        self.object
    }

    pub fn state(&self) -> &ObjectRenderState {
        &self.state
    }

    /// Target used by the latest visible frame, after the mobile adjustment.
    pub fn last_target(&self) -> Option<&ResolvedPlacement> {
        self.last_target.as_ref()
    }

    pub fn set_params(&mut self, params: AnimatorParams) {
        self.params = params;
    }

    /// Blend weight for a frame at `elapsed_sec`: raised for a fixed window
    /// after the active section changes.
    pub fn smoothing_factor(&self, elapsed_sec: f32) -> f32 {
        if elapsed_sec < self.catch_up_until {
            self.params.catch_up_factor
        } else {
            self.params.steady_factor
        }
    }

    /// Advance one frame toward `target`.
    ///
    /// `active` is the coordinator's active section id, compared against the
    /// previous frame to open the catch-up window. A hidden target freezes
    /// the transform and only flips visibility. Rotation eases along the
    /// shortest arc, so the displayed angles are wrapped, not authored values.
    pub fn step(
        &mut self,
        target: &ResolvedPlacement,
        active: Option<&str>,
        viewport_width: f32,
        elapsed_sec: f32,
    ) -> &ObjectRenderState {
        if self.last_active.as_deref() != active {
            self.last_active = active.map(str::to_string);
            self.catch_up_until = elapsed_sec + self.params.catch_up_window_sec;
        }

        if !target.visible {
            self.state.visible = false;
            self.last_target = None;
            return &self.state;
        }

        let goal = self.params.mobile.apply(target, viewport_width);
        self.last_target = Some(goal);
        let goal_rotation = goal
            .rotation
            .unwrap_or_else(|| self.idle.rotation_at(elapsed_sec));

        if !self.placed {
            self.state = ObjectRenderState {
                position: goal.position,
                scale: goal.scale,
                rotation: wrap_angles(goal_rotation),
                visible: true,
            };
            self.placed = true;
            return &self.state;
        }

        let f = self.smoothing_factor(elapsed_sec);
        self.state.position = self.state.position.lerp(goal.position, f);
        self.state.scale += (goal.scale - self.state.scale) * f;
        self.state.rotation = lerp_angles(self.state.rotation, goal_rotation, f);
        self.state.visible = true;
        &self.state
    }
}

/// Wrap an angle into (-PI, PI].
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    let r = (a + PI).rem_euclid(TAU) - PI;
    if r <= -PI {
        r + TAU
    } else {
        r
    }
}

/// `wrap_angle` on every axis.
#[inline]
pub fn wrap_angles(v: Vec3) -> Vec3 {
    Vec3::new(wrap_angle(v.x), wrap_angle(v.y), wrap_angle(v.z))
}

/// Per-axis exponential step along the shortest angular path.
#[inline]
pub fn lerp_angles(current: Vec3, target: Vec3, f: f32) -> Vec3 {
    let step = |c: f32, t: f32| wrap_angle(c + wrap_angle(t - c) * f);
    Vec3::new(
        step(current.x, target.x),
        step(current.y, target.y),
        step(current.z, target.z),
    )
}
