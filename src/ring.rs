use std::f64::consts::TAU;

/// Top-left corner of a glyph inside the ring container, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPosition {
    pub left: f64,
    pub top: f64,
}

/// Circle of glyphs around the avatar image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    /// Subtracted from both coordinates so the glyph sits centered on the circle.
    pub glyph_offset: f64,
    pub glyph_size: f64,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 360.0,
            radius: 210.0,
            glyph_offset: 20.0,
            glyph_size: 35.0,
        }
    }
}

impl RingLayout {
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn position(&self, index: usize, count: usize) -> GlyphPosition {
        let angle = index as f64 / count as f64 * TAU;
        let (cx, cy) = self.center();
        GlyphPosition {
            left: cx + self.radius * angle.cos() - self.glyph_offset,
            top: cy + self.radius * angle.sin() - self.glyph_offset,
        }
    }

    pub fn positions(&self, count: usize) -> Vec<GlyphPosition> {
        (0..count).map(|i| self.position(i, count)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: GlyphPosition, left: f64, top: f64) -> bool {
        (a.left - left).abs() < EPS && (a.top - top).abs() < EPS
    }

    #[test]
    fn test_cardinal_points() {
        let layout = RingLayout::default();
        let p = layout.positions(4);
        assert!(close(p[0], 200.0 + 210.0 - 20.0, 180.0 - 20.0));
        assert!(close(p[1], 200.0 - 20.0, 180.0 + 210.0 - 20.0));
        assert!(close(p[2], 200.0 - 210.0 - 20.0, 180.0 - 20.0));
        assert!(close(p[3], 200.0 - 20.0, 180.0 - 210.0 - 20.0));
    }

    #[test]
    fn test_even_spacing() {
        let layout = RingLayout::default();
        let (cx, cy) = layout.center();
        let points = layout.positions(12);
        assert_eq!(points.len(), 12);
        let dist = |a: GlyphPosition, b: GlyphPosition| {
            ((a.left - b.left).powi(2) + (a.top - b.top).powi(2)).sqrt()
        };
        let step = dist(points[0], points[1]);
        for i in 0..12 {
            let p = points[i];
            let r = ((p.left + 20.0 - cx).powi(2) + (p.top + 20.0 - cy).powi(2)).sqrt();
            assert!((r - 210.0).abs() < 1e-6);
            assert!((dist(p, points[(i + 1) % 12]) - step).abs() < 1e-6);
        }
    }

    #[test]
    fn test_no_glyphs() {
        assert!(RingLayout::default().positions(0).is_empty());
    }
}
