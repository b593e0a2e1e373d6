//! Position sampling for the decline button's escape act.

/// Pick a fresh absolute position for the control inside its zone. Extents
/// smaller than the control clamp to zero so the sample always lands in
/// bounds.
pub fn escape_position(
    rng: &mut impl FnMut() -> f64,
    zone_width: f64,
    zone_height: f64,
    control_width: f64,
    control_height: f64,
) -> (f64, f64) {
    let max_x = (zone_width - control_width).max(0.0);
    let max_y = (zone_height - control_height).max(0.0);
    (rng() * max_x, rng() * max_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn samples_stay_inside_the_zone() {
        let mut seq = [0.0, 0.999, 0.5, 0.25].iter().copied().cycle();
        let mut rng = move || seq.next().unwrap();
        for _ in 0..8 {
            let (x, y) = escape_position(&mut rng, 320.0, 96.0, 120.0, 40.0);
            assert!((0.0..=200.0).contains(&x));
            assert!((0.0..=56.0).contains(&y));
        }
    }

    #[test]
    fn undersized_zone_clamps_to_origin() {
        let mut rng = || 0.7;
        let position = escape_position(&mut rng, 100.0, 30.0, 120.0, 40.0);
        assert_eq!(position, (0.0, 0.0));
    }
}
