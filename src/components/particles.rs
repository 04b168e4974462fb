use yew::prelude::*;

use crate::config::HERO_PARTICLE_COUNT;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub top_pct: f64,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

/// Lays out `count` particles using `random`, which must yield values in
/// `[0, 1)`.
pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            top_pct: random() * 100.0,
            left_pct: random() * 100.0,
            duration_s: 4.0 + random() * 4.0,
            delay_s: i as f64 * 0.2,
        })
        .collect()
}

#[function_component(HeroParticles)]
pub fn hero_particles() -> Html {
    // positions are picked once per mount
    let particles = use_memo(
        |_| scatter(HERO_PARTICLE_COUNT, web_sys::js_sys::Math::random),
        (),
    );

    html! {
        <div class="particles">
            {
                for particles.iter().map(|p| html! {
                    <div
                        class="particle"
                        style={format!(
                            "top: {:.2}%; left: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.1}s;",
                            p.top_pct, p.left_pct, p.duration_s, p.delay_s
                        )}
                    />
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staggers_delays_and_bounds_durations() {
        let mut seq = [0.0, 0.5, 0.999].into_iter().cycle();
        let particles = scatter(15, move || seq.next().unwrap());

        assert_eq!(particles.len(), 15);
        for (i, p) in particles.iter().enumerate() {
            assert!((p.delay_s - i as f64 * 0.2).abs() < 1e-9);
            assert!(p.duration_s >= 4.0 && p.duration_s < 8.0);
            assert!(p.top_pct >= 0.0 && p.top_pct < 100.0);
            assert!(p.left_pct >= 0.0 && p.left_pct < 100.0);
        }
    }
}
