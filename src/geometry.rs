use egui::{Pos2, Rect, Vec2};

/// Squared distance from `point` to the segment `from`-`to`.
///
/// A zero-length segment is treated as the single point `from`.
pub(crate) fn segment_distance_sq(point: Pos2, from: Pos2, to: Pos2) -> f32 {
    let along = to - from;
    let len_sq = along.length_sq();
    let t = if len_sq > 0.0 {
        ((point - from).dot(along) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (point - (from + along * t)).length_sq()
}

/// Bounding box of a segment grown by `padding` on every side
pub(crate) fn segment_bounds(from: Pos2, to: Pos2, padding: f32) -> Rect {
    Rect::from_two_pos(from, to).expand(padding)
}

/// Largest rect with the aspect ratio of `content` that fits in `available`,
/// anchored at the top-left corner of `available`
pub fn fit_aspect(available: Rect, content: Vec2) -> Rect {
    if content.x <= 0.0 || content.y <= 0.0 {
        return Rect::from_min_size(available.min, Vec2::ZERO);
    }
    let scale = (available.width() / content.x)
        .min(available.height() / content.y)
        .max(0.0);
    Rect::from_min_size(available.min, content * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_segment_distance_sq() {
        let a = pos2(0.0, 0.0);
        let b = pos2(10.0, 0.0);
        assert!((segment_distance_sq(pos2(5.0, 3.0), a, b) - 9.0).abs() < 1e-4);
        // Beyond the end the distance is measured to the endpoint
        assert!((segment_distance_sq(pos2(13.0, 4.0), a, b) - 25.0).abs() < 1e-4);
        assert!((segment_distance_sq(pos2(-3.0, -4.0), a, b) - 25.0).abs() < 1e-4);
        // Degenerate segment
        assert!((segment_distance_sq(pos2(3.0, 4.0), a, a) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_fit_aspect() {
        let available = Rect::from_min_size(pos2(10.0, 20.0), egui::vec2(900.0, 400.0));
        let fitted = fit_aspect(available, egui::vec2(600.0, 400.0));
        assert_eq!(fitted.min, pos2(10.0, 20.0));
        assert!((fitted.width() - 600.0).abs() < 1e-3);
        assert!((fitted.height() - 400.0).abs() < 1e-3);

        let narrow = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(300.0, 1000.0));
        let fitted = fit_aspect(narrow, egui::vec2(600.0, 400.0));
        assert!((fitted.width() - 300.0).abs() < 1e-3);
        assert!((fitted.height() - 200.0).abs() < 1e-3);
    }
}
