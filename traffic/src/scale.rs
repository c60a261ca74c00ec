use crate::TrafficSnapshot;

/// Marker radius range when every trip is counted
pub const UNFILTERED_RADIUS: (f64, f64) = (0.0, 25.0);
/// With a time filter, fewer trips are counted, so markers get a larger minimum and maximum to
/// stay visible.
pub const FILTERED_RADIUS: (f64, f64) = (3.0, 50.0);

pub const INTENSITY_BASE: f64 = 0.4;
pub const INTENSITY_SPAN: f64 = 0.7;

/// Maps total traffic to a marker radius. The square root makes marker area, not radius,
/// proportional to traffic.
///
/// Build a new one after every aggregation; both the domain and range depend on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusScale {
    domain_max: f64,
    range: (f64, f64),
}

impl RadiusScale {
    pub fn new(snapshot: &TrafficSnapshot, filter_active: bool) -> Self {
        Self::from_max(snapshot.max_total(), filter_active)
    }

    pub fn from_max(max_total: usize, filter_active: bool) -> Self {
        Self {
            domain_max: max_total as f64,
            range: if filter_active {
                FILTERED_RADIUS
            } else {
                UNFILTERED_RADIUS
            },
        }
    }

    pub fn radius(&self, total: usize) -> f64 {
        // With nothing counted anywhere, there's nothing to show
        if self.domain_max == 0.0 {
            return 0.0;
        }
        let (min, max) = self.range;
        min + (max - min) * (total as f64 / self.domain_max).sqrt()
    }

    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Picks a fill color along a sequential blue scale, darker for busier stations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    max_total: f64,
}

impl ColorScale {
    pub fn new(snapshot: &TrafficSnapshot) -> Self {
        Self::from_max(snapshot.max_total())
    }

    pub fn from_max(max_total: usize) -> Self {
        Self {
            max_total: max_total as f64,
        }
    }

    /// In [0.4, 1.0]. Everything is at the base intensity when there's no traffic at all.
    pub fn intensity(&self, total: usize) -> f64 {
        if self.max_total == 0.0 {
            return INTENSITY_BASE;
        }
        (INTENSITY_BASE + INTENSITY_SPAN * total as f64 / self.max_total).clamp(INTENSITY_BASE, 1.0)
    }

    pub fn color(&self, total: usize) -> colorous::Color {
        colorous::BLUES.eval_continuous(self.intensity(total))
    }

    /// Like "#08306b"
    pub fn hex(&self, total: usize) -> String {
        let c = self.color(total);
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_sqrt_scale() {
        let scale = RadiusScale::from_max(100, false);
        assert_relative_eq!(scale.radius(0), 0.0);
        assert_relative_eq!(scale.radius(25), 12.5);
        assert_relative_eq!(scale.radius(100), 25.0);

        let scale = RadiusScale::from_max(100, true);
        assert_relative_eq!(scale.radius(0), 3.0);
        assert_relative_eq!(scale.radius(25), 26.5);
        assert_relative_eq!(scale.radius(100), 50.0);
    }

    #[test]
    fn test_filter_changes_range_not_domain() {
        let unfiltered = RadiusScale::from_max(40, false);
        let filtered = RadiusScale::from_max(40, true);
        assert_eq!(unfiltered.domain_max(), filtered.domain_max());
        assert_eq!(unfiltered.range(), (0.0, 25.0));
        assert_eq!(filtered.range(), (3.0, 50.0));
    }

    #[test]
    fn test_zero_domain() {
        for filter_active in [false, true] {
            let scale = RadiusScale::from_max(0, filter_active);
            for total in [0, 1, 1000] {
                let r = scale.radius(total);
                assert!(!r.is_nan());
                assert_eq!(r, 0.0);
            }
        }

        let colors = ColorScale::from_max(0);
        assert_eq!(colors.intensity(0), INTENSITY_BASE);
        assert_eq!(colors.intensity(5), INTENSITY_BASE);
        assert_eq!(colors.hex(0), colors.hex(5));
    }

    #[test]
    fn test_intensity() {
        let colors = ColorScale::from_max(10);
        assert_relative_eq!(colors.intensity(0), 0.4);
        assert_relative_eq!(colors.intensity(5), 0.75);
        // 0.4 + 0.7 would go past the end of the scale
        assert_relative_eq!(colors.intensity(10), 1.0);

        let hex = colors.hex(10);
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert_ne!(colors.hex(0), colors.hex(10));
    }
}
