//! Gauge images for numeric utilization values.

/// Utilization bands rendered by the pre-built gauge images.
///
/// Bands are half-open: a value sits in the band whose lower bound it
/// reaches, up to but excluding the next bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GaugeLevel {
    VeryLow,
    Low,
    MediumLow,
    Medium,
    MediumHigh,
    High,
    VeryHigh,
}

/// Lower bound of each band, paired with the band it opens. Sorted
/// ascending; [`GaugeLevel::from_value`] scans it from the top.
const BANDS: [(f64, GaugeLevel); 7] = [
    (0.0, GaugeLevel::VeryLow),
    (15.0, GaugeLevel::Low),
    (30.0, GaugeLevel::MediumLow),
    (45.0, GaugeLevel::Medium),
    (60.0, GaugeLevel::MediumHigh),
    (75.0, GaugeLevel::High),
    (90.0, GaugeLevel::VeryHigh),
];

/// Values at or above this have no rendered gauge image.
const GAUGE_CEILING: f64 = 99.0;

impl GaugeLevel {
    /// Select the band containing `value`.
    ///
    /// Values below zero or at/above the ceiling have no band; so does
    /// NaN, which falls through the scan.
    pub fn from_value(value: f64) -> Option<Self> {
        if value >= GAUGE_CEILING {
            return None;
        }
        BANDS
            .iter()
            .rev()
            .find(|(lower, _)| value >= *lower)
            .map(|(_, level)| *level)
    }

    /// Path of the pre-rendered gauge image for this band.
    pub fn icon_path(self) -> &'static str {
        match self {
            GaugeLevel::VeryLow => "/static/img/gauges/gaugevlow.gif",
            GaugeLevel::Low => "/static/img/gauges/gaugelow.gif",
            GaugeLevel::MediumLow => "/static/img/gauges/gaugemlow.gif",
            GaugeLevel::Medium => "/static/img/gauges/gaugemedium.gif",
            GaugeLevel::MediumHigh => "/static/img/gauges/gaugemhigh.gif",
            GaugeLevel::High => "/static/img/gauges/gaugehigh.gif",
            GaugeLevel::VeryHigh => "/static/img/gauges/gaugevhigh.gif",
        }
    }
}

/// Look up the gauge image for a numeric utilization value.
pub fn gauge_icon(value: f64) -> Option<&'static str> {
    GaugeLevel::from_value(value).map(GaugeLevel::icon_path)
}

#[cfg(test)]
mod tests {
    use super::{GaugeLevel, gauge_icon};

    #[test]
    fn test_band_boundaries_route_upward() {
        assert_eq!(GaugeLevel::from_value(14.0), Some(GaugeLevel::VeryLow));
        assert_eq!(GaugeLevel::from_value(15.0), Some(GaugeLevel::Low));
        assert_eq!(GaugeLevel::from_value(44.9), Some(GaugeLevel::MediumLow));
        assert_eq!(GaugeLevel::from_value(45.0), Some(GaugeLevel::Medium));
        assert_eq!(GaugeLevel::from_value(59.9), Some(GaugeLevel::Medium));
        assert_eq!(GaugeLevel::from_value(60.0), Some(GaugeLevel::MediumHigh));
        assert_eq!(GaugeLevel::from_value(90.0), Some(GaugeLevel::VeryHigh));
    }

    #[test]
    fn test_paths_match_band_names() {
        assert_eq!(gauge_icon(0.0), Some("/static/img/gauges/gaugevlow.gif"));
        assert_eq!(gauge_icon(29.9), Some("/static/img/gauges/gaugelow.gif"));
        assert_eq!(gauge_icon(50.0), Some("/static/img/gauges/gaugemedium.gif"));
        assert_eq!(gauge_icon(98.9), Some("/static/img/gauges/gaugevhigh.gif"));
    }

    #[test]
    fn test_out_of_range_yields_none() {
        assert_eq!(gauge_icon(-0.1), None);
        assert_eq!(gauge_icon(99.0), None);
        assert_eq!(gauge_icon(150.0), None);
        assert_eq!(gauge_icon(f64::NAN), None);
    }
}
