//! Scroll-driven animation math, kept free of browser types so the
//! interpolation and spring behavior can be tested natively.

/// Stage spring tuning. Stiffness/damping pair gives a heavily damped
/// response that eases toward the raw scroll mapping instead of tracking it.
pub const STAGE_SPRING_STIFFNESS: f64 = 100.0;
pub const STAGE_SPRING_DAMPING: f64 = 30.0;

/// Largest timestep fed into the spring integrator. Frames longer than this
/// (background tab, debugger pause) are treated as this long.
pub const MAX_FRAME_DT: f64 = 1.0 / 30.0;

const SPRING_SUBSTEP: f64 = 1.0 / 240.0;
const SETTLE_EPSILON: f64 = 1e-3;

/// Piecewise-linear mapping of `input` over ordered `(input, output)` stops,
/// clamped to the first/last output outside the covered range.
pub fn interpolate(input: f64, stops: &[(f64, f64)]) -> f64 {
    let Some(first) = stops.first() else {
        return 0.0;
    };
    if input <= first.0 {
        return first.1;
    }

    for window in stops.windows(2) {
        let (from, to) = (window[0], window[1]);
        if input <= to.0 {
            let span = to.0 - from.0;
            if span <= f64::EPSILON {
                return to.1;
            }
            let t = (input - from.0) / span;
            return from.1 + (to.1 - from.1) * t;
        }
    }

    stops.last().map(|stop| stop.1).unwrap_or(0.0)
}

/// Normalized page scroll progress in [0,1]. A page with no scrollable range
/// reports 0.0 so every derived value sits at its rest pose.
pub fn page_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }

    (scroll_y / range).clamp(0.0, 1.0)
}

/// Per-image parallax: vertical offset sweeps 0 → `factor` px as the page
/// scrolls 0 → 1.
pub fn parallax_offset(progress: f64, factor: f64) -> f64 {
    progress.clamp(0.0, 1.0) * factor
}

/// Raw (pre-spring) visual parameters for the hero stage at a given scroll
/// progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StagePose {
    pub scale: f64,
    pub rotation_deg: f64,
    pub offset_y: f64,
    pub opacity: f64,
}

impl StagePose {
    pub fn at(progress: f64) -> Self {
        Self {
            scale: interpolate(progress, &[(0.0, 1.0), (1.0, 0.8)]),
            rotation_deg: interpolate(progress, &[(0.0, 0.0), (1.0, -5.0)]),
            offset_y: interpolate(progress, &[(0.0, 0.0), (1.0, -50.0)]),
            opacity: interpolate(progress, &[(0.0, 1.0), (0.8, 1.0), (1.0, 0.0)]),
        }
    }
}

impl Default for StagePose {
    fn default() -> Self {
        Self::at(0.0)
    }
}

/// Damped second-order filter. The output approaches a held target without
/// overshoot at the stage tuning and converges as time accumulates.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    value: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, initial: f64) -> Self {
        Self {
            stiffness,
            damping,
            value: initial,
            velocity: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Advances the filter by `dt` seconds toward `target`. Integration is
    /// semi-implicit Euler over fixed substeps so a long frame cannot blow
    /// the filter up.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_DT);

        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP);
            let acceleration = self.stiffness * (target - self.value) - self.damping * self.velocity;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        self.value
    }

    pub fn settled(&self, target: f64) -> bool {
        (target - self.value).abs() < SETTLE_EPSILON && self.velocity.abs() < SETTLE_EPSILON
    }

    /// Pins the filter to `target` and zeroes its motion. Used when a settle
    /// check passes, so the rendered value is exact at rest.
    pub fn snap(&mut self, target: f64) {
        self.value = target;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn interpolate_clamps_outside_stop_range() {
        let stops = [(0.0, 1.0), (1.0, 0.8)];
        assert_eq!(interpolate(-0.5, &stops), 1.0);
        assert_eq!(interpolate(1.5, &stops), 0.8);
    }

    #[test]
    fn stage_scale_is_linear() {
        for step in 0..=10 {
            let progress = f64::from(step) / 10.0;
            let expected = 1.0 - 0.2 * progress;
            assert!(
                approx(StagePose::at(progress).scale, expected, 1e-12),
                "scale should interpolate linearly at progress {progress}"
            );
        }
    }

    #[test]
    fn stage_opacity_holds_until_eighty_percent() {
        assert_eq!(StagePose::at(0.0).opacity, 1.0);
        assert_eq!(StagePose::at(0.5).opacity, 1.0);
        assert_eq!(StagePose::at(0.8).opacity, 1.0);
    }

    #[test]
    fn stage_opacity_fades_linearly_past_eighty_percent() {
        assert!(approx(StagePose::at(0.9).opacity, 0.5, 1e-9));
        assert!(approx(StagePose::at(0.95).opacity, 0.25, 1e-9));
        assert_eq!(StagePose::at(1.0).opacity, 0.0);
    }

    #[test]
    fn stage_pose_at_full_scroll() {
        let pose = StagePose::at(1.0);
        assert!(approx(pose.scale, 0.8, 1e-12));
        assert!(approx(pose.rotation_deg, -5.0, 1e-12));
        assert!(approx(pose.offset_y, -50.0, 1e-12));
        assert_eq!(pose.opacity, 0.0);
    }

    #[test]
    fn stage_pose_defaults_to_rest() {
        assert_eq!(StagePose::default(), StagePose::at(0.0));
    }

    #[test]
    fn page_progress_without_range_is_zero() {
        assert_eq!(page_progress(120.0, 800.0, 800.0), 0.0);
        assert_eq!(page_progress(120.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn page_progress_clamps_to_unit_interval() {
        assert_eq!(page_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(page_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(page_progress(9000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn parallax_offset_scales_with_factor() {
        assert_eq!(parallax_offset(0.0, 120.0), 0.0);
        assert!(approx(parallax_offset(0.5, 120.0), 60.0, 1e-12));
        assert_eq!(parallax_offset(1.0, -80.0), -80.0);
    }

    #[test]
    fn spring_converges_to_held_target() {
        let mut spring = Spring::new(STAGE_SPRING_STIFFNESS, STAGE_SPRING_DAMPING, 1.0);
        let target = 0.8;

        // Three simulated seconds of 60fps frames.
        for _ in 0..180 {
            spring.step(target, 1.0 / 60.0);
        }

        assert!(
            approx(spring.value(), target, 1e-3),
            "spring should settle on the held target, got {}",
            spring.value()
        );
        assert!(spring.settled(target));
    }

    #[test]
    fn spring_output_lags_raw_target() {
        let mut spring = Spring::new(STAGE_SPRING_STIFFNESS, STAGE_SPRING_DAMPING, 1.0);
        spring.step(0.8, 1.0 / 60.0);

        let value = spring.value();
        assert!(value < 1.0, "spring should start moving toward the target");
        assert!(value > 0.8, "spring must not jump straight to the target");
    }

    #[test]
    fn spring_survives_oversized_frame() {
        let mut spring = Spring::new(STAGE_SPRING_STIFFNESS, STAGE_SPRING_DAMPING, 0.0);
        spring.step(-5.0, 2.5);
        assert!(spring.value().is_finite());
        assert!(spring.value() <= 0.0 && spring.value() >= -5.1);
    }

    #[test]
    fn spring_snap_pins_value_and_motion() {
        let mut spring = Spring::new(STAGE_SPRING_STIFFNESS, STAGE_SPRING_DAMPING, 0.0);
        spring.step(1.0, 1.0 / 60.0);
        spring.snap(1.0);
        assert_eq!(spring.value(), 1.0);
        assert!(spring.settled(1.0));
    }
}
