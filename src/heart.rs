// The particle-field generator: parametric heart curve, stochastic
// scatter/diffusion, and per-frame pulsation displacement.
// Visual outcomes:
// - A dense heart-shaped cloud of small squares that swells and contracts.
// - A faint halo of glow particles around the outline, widest at the beat peaks.

use std::collections::{BTreeSet, HashSet};
use std::f32::consts::{PI, TAU};

use rand::Rng;

use crate::config::{
    CANVAS_CENTER_X, CANVAS_CENTER_Y, CENTER_SAMPLES, EDGE_SCATTER_PER_POINT, HALO_SCALE,
    HEART_SCALE, OUTLINE_SAMPLES,
};
use crate::error::Error;
use crate::types::Particle;

// ----------------------------- heart curve ----------------------------------

/// Point on the parametric heart outline for parameter `t` in [0, 2π),
/// scaled by `scale` and centered on the canvas. Pure and total; the curve
/// closes on itself, so the domain boundaries meet without a seam.
#[inline]
pub fn heart_point(t: f32, scale: f32) -> (i32, i32) {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    (
        (x * scale + CANVAS_CENTER_X) as i32,
        (y * scale + CANVAS_CENTER_Y) as i32,
    )
}

// ----------------------------- scatter model --------------------------------

/// Exponential-like magnitude `-beta * ln(U)`. Drawing U in [0, 1) and
/// flipping it to (0, 1] keeps the log finite without a rejection loop.
#[inline]
fn exp_magnitude(beta: f32, rng: &mut impl Rng) -> f32 {
    let u: f32 = rng.gen_range(0.0..1.0);
    -beta * (1.0 - u).ln()
}

/// Pull (x, y) toward the canvas center by two independent exponential
/// magnitudes, one per axis. Small `beta` hugs the source point; larger
/// `beta` spreads the scatter deep into the interior.
pub fn scatter_inside(x: f32, y: f32, beta: f32, rng: &mut impl Rng) -> (f32, f32) {
    let dx = exp_magnitude(beta, rng) * (x - CANVAS_CENTER_X);
    let dy = exp_magnitude(beta, rng) * (y - CANVAS_CENTER_Y);
    (x - dx, y - dy)
}

/// Radial contraction with an inverse-power force law (exponent 0.6 on the
/// squared distance). A point exactly on the center stays put.
pub fn shrink_point(x: f32, y: f32, ratio: f32) -> (f32, f32) {
    let dx = x - CANVAS_CENTER_X;
    let dy = y - CANVAS_CENTER_Y;
    let d2 = dx * dx + dy * dy;
    if d2 == 0.0 {
        return (x, y);
    }
    let force = -1.0 / d2.powf(0.6);
    (x - ratio * force * dx, y - ratio * force * dy)
}

/// Per-frame displacement driving the breathing motion: the same force law
/// with a softer exponent plus a ±1 pixel jitter per axis. A degenerate
/// center point gets zero displacement, jitter included.
pub fn pulse_position(x: f32, y: f32, ratio: f32, rng: &mut impl Rng) -> (f32, f32) {
    let dx = x - CANVAS_CENTER_X;
    let dy = y - CANVAS_CENTER_Y;
    let d2 = dx * dx + dy * dy;
    if d2 == 0.0 {
        return (x, y);
    }
    let force = -1.0 / d2.powf(0.52);
    let jx = rng.gen_range(-1..=1) as f32;
    let jy = rng.gen_range(-1..=1) as f32;
    (x - (ratio * force * dx + jx), y - (ratio * force * dy + jy))
}

// ----------------------------- pulsation parameters -------------------------

/// Bounded oscillation in roughly [-0.64, 0.64] that drives the beat.
#[inline]
fn pulse_curve(p: f32) -> f32 {
    2.0 * (2.0 * (4.0 * p).sin()) / (2.0 * PI)
}

/// Frame-dependent knobs derived from the pulsation curve.
#[derive(Clone, Copy, Debug)]
struct PulseParams {
    /// Body displacement magnitude and sign; alternates swell and contraction.
    ratio: f32,
    /// How far halo samples are pulled in toward the outline.
    halo_radius: f32,
    /// How many halo samples to take this frame; in [3000, 7000].
    halo_count: usize,
}

impl PulseParams {
    fn for_frame(frame: usize) -> Self {
        let cv = pulse_curve(frame as f32 / 10.0 * PI);
        Self {
            ratio: 10.0 * cv,
            halo_radius: 4.0 + 6.0 * (1.0 + cv),
            halo_count: (3000.0 + 4000.0 * cv * cv) as usize,
        }
    }
}

// ----------------------------- the heart ------------------------------------

/// The whole animation: immutable base point sets plus every frame's particle
/// list, generated eagerly at construction. Playback is a pure lookup.
pub struct Heart {
    /// Samples on the exact outline, deduplicated by pixel.
    points: Vec<(f32, f32)>,
    /// Tight scatter hugging the outline (a few offsets per outline point).
    edge_diffusion: Vec<(f32, f32)>,
    /// Broader scatter biased toward the interior.
    center_diffusion: Vec<(f32, f32)>,
    frames: Vec<Vec<Particle>>,
}

impl Heart {
    /// Build the base point sets and precompute all `frame_count` frames.
    /// A zero frame count is rejected up front; playback divides by it.
    pub fn new(frame_count: usize, rng: &mut impl Rng) -> Result<Self, Error> {
        if frame_count == 0 {
            return Err(Error::FrameCount(frame_count));
        }
        let mut heart = Self {
            points: Vec::new(),
            edge_diffusion: Vec::new(),
            center_diffusion: Vec::new(),
            frames: Vec::with_capacity(frame_count),
        };
        heart.build(OUTLINE_SAMPLES, rng);
        for frame in 0..frame_count {
            let particles = heart.compute_frame(frame, rng);
            heart.frames.push(particles);
        }
        Ok(heart)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Particle list for `index mod frame_count`; total for every index.
    pub fn frame(&self, index: usize) -> &[Particle] {
        &self.frames[index % self.frames.len()]
    }

    /// Sample the outline and scatter the two diffusion fields off it.
    /// These sets are the animation's identity: generated exactly once, and
    /// every frame displaces the same base points.
    fn build(&mut self, samples: usize, rng: &mut impl Rng) {
        // Outline: uniform-random t gives a naturally uneven density.
        // A BTreeSet dedups by pixel and iterates in a fixed order.
        let mut outline = BTreeSet::new();
        for _ in 0..samples {
            let t = rng.gen_range(0.0..TAU);
            outline.insert(heart_point(t, HEART_SCALE));
        }
        self.points = outline
            .into_iter()
            .map(|(x, y)| (x as f32, y as f32))
            .collect();

        // Edge diffusion: tight offsets hugging each outline point.
        let mut seen = HashSet::new();
        for &(px, py) in &self.points {
            for _ in 0..EDGE_SCATTER_PER_POINT {
                let (x, y) = scatter_inside(px, py, 0.05, rng);
                if seen.insert((x.to_bits(), y.to_bits())) {
                    self.edge_diffusion.push((x, y));
                }
            }
        }

        // Center diffusion: re-scatter random outline points much deeper.
        let mut seen = HashSet::new();
        for _ in 0..CENTER_SAMPLES {
            let (px, py) = self.points[rng.gen_range(0..self.points.len())];
            let (x, y) = scatter_inside(px, py, 0.17, rng);
            if seen.insert((x.to_bits(), y.to_bits())) {
                self.center_diffusion.push((x, y));
            }
        }
    }

    /// One complete particle list for `frame`: fresh halo samples plus every
    /// base point displaced by this frame's pulsation ratio.
    fn compute_frame(&self, frame: usize, rng: &mut impl Rng) -> Vec<Particle> {
        let params = PulseParams::for_frame(frame);
        let base_total =
            self.points.len() + self.edge_diffusion.len() + self.center_diffusion.len();
        let mut particles = Vec::with_capacity(base_total + params.halo_count);

        // Halo: sampled on the larger outline, contracted toward the body,
        // deduplicated by exact position, then jittered outward.
        let mut seen = HashSet::new();
        for _ in 0..params.halo_count {
            let t = rng.gen_range(0.0..TAU);
            let (hx, hy) = heart_point(t, HALO_SCALE);
            let (x, y) = shrink_point(hx as f32, hy as f32, params.halo_radius);
            if !seen.insert((x.to_bits(), y.to_bits())) {
                continue;
            }
            let x = x + rng.gen_range(-14..=14) as f32;
            let y = y + rng.gen_range(-14..=14) as f32;
            // Brush sizes skew toward 2: one third 1, two thirds 2.
            let size = if rng.gen_range(0..3) == 0 { 1 } else { 2 };
            particles.push(Particle { x, y, size });
        }

        // Body: outline points get the widest brush range.
        for &(x, y) in &self.points {
            let (x, y) = pulse_position(x, y, params.ratio, rng);
            particles.push(Particle {
                x,
                y,
                size: rng.gen_range(1..=3),
            });
        }
        for &(x, y) in &self.edge_diffusion {
            let (x, y) = pulse_position(x, y, params.ratio, rng);
            particles.push(Particle {
                x,
                y,
                size: rng.gen_range(1..=2),
            });
        }
        for &(x, y) in &self.center_diffusion {
            let (x, y) = pulse_position(x, y, params.ratio, rng);
            particles.push(Particle {
                x,
                y,
                size: rng.gen_range(1..=2),
            });
        }

        particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, FRAME_COUNT};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn heart_curve_stays_on_canvas() {
        for i in 0..4096 {
            let t = i as f32 / 4096.0 * TAU;
            let (x, y) = heart_point(t, HEART_SCALE);
            assert!(x >= 0 && x < CANVAS_WIDTH as i32, "x out of bounds at t={t}: {x}");
            assert!(y >= 0 && y < CANVAS_HEIGHT as i32, "y out of bounds at t={t}: {y}");
        }
    }

    #[test]
    fn scatter_keeps_exact_center_fixed() {
        let mut r = rng(1);
        let center = (CANVAS_CENTER_X, CANVAS_CENTER_Y);
        assert_eq!(scatter_inside(center.0, center.1, 0.17, &mut r), center);
    }

    #[test]
    fn force_laws_clamp_zero_distance() {
        let mut r = rng(2);
        let center = (CANVAS_CENTER_X, CANVAS_CENTER_Y);
        assert_eq!(shrink_point(center.0, center.1, 12.0), center);
        assert_eq!(pulse_position(center.0, center.1, 6.0, &mut r), center);
    }

    #[test]
    fn zero_frame_count_is_rejected() {
        let mut r = rng(3);
        assert!(matches!(Heart::new(0, &mut r), Err(Error::FrameCount(0))));
    }

    #[test]
    fn single_frame_plays_for_every_index() {
        let mut r = rng(4);
        let heart = Heart::new(1, &mut r).unwrap();
        for k in [1, 7, 1000] {
            assert_eq!(heart.frame(k), heart.frame(0));
        }
    }

    #[test]
    fn playback_is_idempotent_and_periodic() {
        let mut r = rng(5);
        let heart = Heart::new(FRAME_COUNT, &mut r).unwrap();
        assert_eq!(heart.frame(3), heart.frame(3));
        for k in 0..FRAME_COUNT {
            assert_eq!(heart.frame(k), heart.frame(k + FRAME_COUNT));
        }
        // One full period later the rendered list is the same, down to sizes.
        assert_eq!(heart.frame(0), heart.frame(20));
    }

    #[test]
    fn pulse_params_stay_in_budget() {
        for frame in 0..200 {
            let p = PulseParams::for_frame(frame);
            assert!(
                (3000..=7000).contains(&p.halo_count),
                "frame {frame}: halo_count {}",
                p.halo_count
            );
            assert!(p.halo_radius >= 4.0, "frame {frame}: halo_radius {}", p.halo_radius);
            assert!(p.ratio.abs() <= 6.5, "frame {frame}: ratio {}", p.ratio);
        }
    }

    #[test]
    fn frame_particle_counts_are_bounded() {
        let mut r = rng(6);
        let heart = Heart::new(FRAME_COUNT, &mut r).unwrap();
        assert!(!heart.points.is_empty() && heart.points.len() <= OUTLINE_SAMPLES);
        assert!(heart.edge_diffusion.len() <= EDGE_SCATTER_PER_POINT * heart.points.len());
        assert!(!heart.center_diffusion.is_empty() && heart.center_diffusion.len() <= CENTER_SAMPLES);

        // The body portion repeats identically in size; only the halo varies.
        let body =
            heart.points.len() + heart.edge_diffusion.len() + heart.center_diffusion.len();
        for k in 0..FRAME_COUNT {
            let halo = heart.frame(k).len() - body;
            assert!(halo > 0 && halo <= 7000, "frame {k}: halo {halo}");
        }
    }

    #[test]
    fn equal_seeds_reproduce_the_animation() {
        let mut r1 = rng(7);
        let mut r2 = rng(7);
        let a = Heart::new(FRAME_COUNT, &mut r1).unwrap();
        let b = Heart::new(FRAME_COUNT, &mut r2).unwrap();
        assert_eq!(a.frame_count(), b.frame_count());
        for k in 0..FRAME_COUNT {
            assert_eq!(a.frame(k), b.frame(k));
        }
    }
}
