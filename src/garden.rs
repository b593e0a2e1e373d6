//! One-time generation of the floating garden backdrop.

pub const GARDEN_SIZE: usize = 20;

/// Glyphs assigned cyclically across the garden. The butterfly is the
/// animated variant and gets its own motion profile.
pub const GARDEN_GLYPHS: [&str; 5] = ["🦋", "🌹", "🌸", "🌷", "🌺"];

const BUTTERFLY: &str = "🦋";

#[derive(Clone, PartialEq, Debug)]
pub struct OrnamentSpec {
    pub symbol: &'static str,
    /// Horizontal anchor as a percentage of the viewport width, 0..=95.
    pub x_percent: f64,
    pub size_rem: f64,
    /// Seconds for one full rise from below to above the viewport.
    pub rise_secs: f64,
    pub delay_secs: f64,
    /// Butterflies flutter: faster sway plus a scale oscillation.
    pub fluttering: bool,
}

fn in_range(rng: &mut impl FnMut() -> f64, lo: f64, hi: f64) -> f64 {
    lo + rng() * (hi - lo)
}

/// Build the full garden. Called once per session on mount; the specs are
/// immutable afterwards so re-renders never reshuffle the backdrop.
pub fn generate_garden(rng: &mut impl FnMut() -> f64) -> Vec<OrnamentSpec> {
    (0..GARDEN_SIZE)
        .map(|i| {
            let symbol = GARDEN_GLYPHS[i % GARDEN_GLYPHS.len()];
            let fluttering = symbol == BUTTERFLY;
            let size_rem = if fluttering {
                in_range(rng, 1.5, 2.5)
            } else {
                in_range(rng, 2.0, 3.5)
            };
            OrnamentSpec {
                symbol,
                x_percent: in_range(rng, 0.0, 95.0),
                size_rem,
                rise_secs: in_range(rng, 10.0, 20.0),
                delay_secs: in_range(rng, 0.0, 15.0),
                fluttering,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn produces_a_full_garden_within_bounds() {
        let mut seq = [0.0, 0.17, 0.42, 0.63, 0.99].iter().copied().cycle();
        let mut rng = move || seq.next().unwrap();
        let garden = generate_garden(&mut rng);
        assert_eq!(garden.len(), GARDEN_SIZE);
        for spec in &garden {
            assert!((0.0..=95.0).contains(&spec.x_percent));
            assert!((10.0..=20.0).contains(&spec.rise_secs));
            assert!((0.0..=15.0).contains(&spec.delay_secs));
            if spec.fluttering {
                assert!((1.5..=2.5).contains(&spec.size_rem));
            } else {
                assert!((2.0..=3.5).contains(&spec.size_rem));
            }
        }
    }

    #[test]
    fn glyphs_cycle_through_the_palette() {
        let garden = generate_garden(&mut fixed(0.5));
        for (i, spec) in garden.iter().enumerate() {
            assert_eq!(spec.symbol, GARDEN_GLYPHS[i % GARDEN_GLYPHS.len()]);
        }
    }

    #[test]
    fn only_butterflies_flutter() {
        let garden = generate_garden(&mut fixed(0.0));
        for spec in &garden {
            assert_eq!(spec.fluttering, spec.symbol == BUTTERFLY);
        }
        assert_eq!(garden.iter().filter(|s| s.fluttering).count(), 4);
    }

    #[test]
    fn extreme_rolls_stay_inside_the_ranges() {
        for value in [0.0, 1.0] {
            for spec in &generate_garden(&mut fixed(value)) {
                assert!((0.0..=95.0).contains(&spec.x_percent));
                assert!((1.5..=3.5).contains(&spec.size_rem));
                assert!((10.0..=20.0).contains(&spec.rise_secs));
            }
        }
    }
}
