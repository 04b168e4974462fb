use crate::config::{HERO_FADE_RANGE, HERO_SHIFT_RANGE};

/// Linear map of `scroll_y` from `[0, range_end]` onto `[from, to]`, clamped
/// at both ends.
fn interpolate(scroll_y: f64, range_end: f64, from: f64, to: f64) -> f64 {
    let progress = (scroll_y / range_end).clamp(0.0, 1.0);
    from + (to - from) * progress
}

/// Vertical shift of the hero content in pixels.
pub fn hero_shift(scroll_y: f64) -> f64 {
    let (range_end, to) = HERO_SHIFT_RANGE;
    interpolate(scroll_y, range_end, 0.0, to)
}

pub fn hero_opacity(scroll_y: f64) -> f64 {
    let (range_end, to) = HERO_FADE_RANGE;
    interpolate(scroll_y, range_end, 1.0, to)
}

pub fn hero_style(scroll_y: f64) -> String {
    format!(
        "transform: translateY({:.1}px); opacity: {:.3};",
        hero_shift(scroll_y),
        hero_opacity(scroll_y)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn shift_follows_first_500px() {
        assert!(close(hero_shift(0.0), 0.0));
        assert!(close(hero_shift(250.0), -50.0));
        assert!(close(hero_shift(500.0), -100.0));
        assert!(close(hero_shift(2000.0), -100.0));
    }

    #[test]
    fn opacity_fades_over_first_300px() {
        assert!(close(hero_opacity(0.0), 1.0));
        assert!(close(hero_opacity(150.0), 0.9));
        assert!(close(hero_opacity(300.0), 0.8));
        assert!(close(hero_opacity(900.0), 0.8));
    }

    #[test]
    fn overscroll_above_top_is_clamped() {
        // rubber-band scrolling reports negative offsets
        assert!(close(hero_shift(-40.0), 0.0));
        assert!(close(hero_opacity(-40.0), 1.0));
    }

    #[test]
    fn style_string_tracks_each_range_separately() {
        // 250px is halfway through the shift but most of the way through the fade
        assert_eq!(hero_style(250.0), "transform: translateY(-50.0px); opacity: 0.833;");
        assert_eq!(hero_style(300.0), "transform: translateY(-60.0px); opacity: 0.800;");
    }
}
