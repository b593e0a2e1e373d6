//! Timing and geometry for the two decorative bursts: the acceptance
//! confetti and the per-advance heart burst.

use crate::config::CELEBRATION_MS;

/// Particle count per side when the celebration starts.
pub const FULL_BLAST: f64 = 50.0;
pub const SPREAD_DEGREES: f64 = 360.0;
pub const START_VELOCITY: f64 = 30.0;
pub const TICKS: f64 = 60.0;

pub const HEART_COUNT: usize = 20;
pub const HEART_COLORS: [&str; 4] = ["#F4C2C2", "#B6A5C8", "#ff7aa2", "#ffb3c1"];

/// Particle count for one side of a paired burst, tapering linearly to zero
/// as the celebration window runs out.
pub fn particle_count(remaining_ms: f64) -> u32 {
    if remaining_ms <= 0.0 {
        0
    } else {
        (FULL_BLAST * (remaining_ms / CELEBRATION_MS)) as u32
    }
}

/// Origins for the paired left/right confetti bursts, in canvas-relative
/// coordinates. The y coordinate lands slightly above or below the top edge.
pub fn burst_origins(rng: &mut impl FnMut() -> f64) -> ((f64, f64), (f64, f64)) {
    let left = (0.1 + rng() * 0.2, rng() - 0.2);
    let right = (0.7 + rng() * 0.2, rng() - 0.2);
    (left, right)
}

/// One heart of a radial burst, offset from the control's center.
#[derive(Clone, PartialEq, Debug)]
pub struct HeartSpec {
    pub x_offset: f64,
    pub y_offset: f64,
    pub color: &'static str,
    pub delay_secs: f64,
}

/// Radial layout for one heart burst: evenly spaced angles, randomized
/// radius, color and start delay per heart.
pub fn heart_burst(rng: &mut impl FnMut() -> f64) -> Vec<HeartSpec> {
    (0..HEART_COUNT)
        .map(|i| {
            let angle = (i as f64 / HEART_COUNT as f64) * std::f64::consts::TAU;
            let radius = 20.0 + rng() * 80.0;
            let color =
                HEART_COLORS[(rng() * HEART_COLORS.len() as f64) as usize % HEART_COLORS.len()];
            HeartSpec {
                x_offset: angle.cos() * radius,
                y_offset: angle.sin() * radius,
                color,
                delay_secs: rng() * 0.5,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BURST_INTERVAL_MS;
    use pretty_assertions::assert_eq;

    #[test]
    fn particle_count_tapers_to_zero() {
        assert_eq!(particle_count(CELEBRATION_MS), FULL_BLAST as u32);
        let mut last = u32::MAX;
        let mut remaining = CELEBRATION_MS;
        while remaining > 0.0 {
            let count = particle_count(remaining);
            assert!(count <= last);
            last = count;
            remaining -= BURST_INTERVAL_MS as f64;
        }
        assert_eq!(particle_count(0.0), 0);
        assert_eq!(particle_count(-37.0), 0);
    }

    #[test]
    fn burst_origins_flank_the_screen() {
        for roll in [0.0, 0.5, 0.9999] {
            let mut rng = || roll;
            let ((left_x, left_y), (right_x, right_y)) = burst_origins(&mut rng);
            assert!((0.1..=0.3).contains(&left_x));
            assert!((0.7..=0.9).contains(&right_x));
            assert!((-0.2..=0.8).contains(&left_y));
            assert!((-0.2..=0.8).contains(&right_y));
        }
    }

    #[test]
    fn heart_burst_is_radial_and_bounded() {
        let mut seq = [0.1, 0.9, 0.5, 0.0].iter().copied().cycle();
        let mut rng = move || seq.next().unwrap();
        let hearts = heart_burst(&mut rng);
        assert_eq!(hearts.len(), HEART_COUNT);
        for heart in &hearts {
            let radius = (heart.x_offset.powi(2) + heart.y_offset.powi(2)).sqrt();
            assert!((20.0 - 1e-9..=100.0 + 1e-9).contains(&radius));
            assert!((0.0..=0.5).contains(&heart.delay_secs));
            assert!(HEART_COLORS.contains(&heart.color));
        }
    }

    #[test]
    fn hearts_are_evenly_spread_around_the_circle() {
        // Constant radius, so the offsets cancel out around the full circle.
        let hearts = heart_burst(&mut || 0.5);
        let sum_x: f64 = hearts.iter().map(|h| h.x_offset).sum();
        let sum_y: f64 = hearts.iter().map(|h| h.y_offset).sum();
        assert!(sum_x.abs() < 1e-6);
        assert!(sum_y.abs() < 1e-6);
    }
}
