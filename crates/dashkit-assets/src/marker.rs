//! Map marker icons for machine models.

use std::str::FromStr;

use dashkit_text::PositionalFormat;
use thiserror::Error;

/// Marker template; `{0}` is the marker color, `{1}` the pixel size of
/// the rendered image.
const MARKER_TEMPLATE: &str = "/static/img/MapMarkers/{0}_{1}.png";

#[derive(Debug, Error)]
#[error("unknown machine model: {0}")]
pub struct UnknownModelError(pub String);

/// Machine model lines known to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineModel {
    Model1,
    Model2,
    Model3,
    Model4,
}

impl MachineModel {
    /// Marker color used for this model on the fleet map.
    pub fn marker_color(self) -> &'static str {
        match self {
            MachineModel::Model1 => "blue",
            MachineModel::Model2 => "yellow",
            MachineModel::Model3 => "green",
            MachineModel::Model4 => "red",
        }
    }

    /// Marker icon path at the given pixel size.
    pub fn marker_icon(self, size: u32) -> String {
        MARKER_TEMPLATE.format_positional(&[&self.marker_color(), &size])
    }
}

impl FromStr for MachineModel {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "model1" => Ok(MachineModel::Model1),
            "model2" => Ok(MachineModel::Model2),
            "model3" => Ok(MachineModel::Model3),
            "model4" => Ok(MachineModel::Model4),
            _ => Err(UnknownModelError(s.to_string())),
        }
    }
}

/// Look up the map marker icon for a model identifier.
///
/// Unrecognized identifiers yield `None`.
pub fn marker_icon(model: &str, size: u32) -> Option<String> {
    model
        .parse::<MachineModel>()
        .ok()
        .map(|model| model.marker_icon(size))
}

#[cfg(test)]
mod tests {
    use super::{MachineModel, marker_icon};

    #[test]
    fn test_all_documented_models_resolve() {
        assert_eq!(
            marker_icon("model1", 32).as_deref(),
            Some("/static/img/MapMarkers/blue_32.png")
        );
        assert_eq!(
            marker_icon("model2", 32).as_deref(),
            Some("/static/img/MapMarkers/yellow_32.png")
        );
        assert_eq!(
            marker_icon("model3", 32).as_deref(),
            Some("/static/img/MapMarkers/green_32.png")
        );
        assert_eq!(
            marker_icon("model4", 32).as_deref(),
            Some("/static/img/MapMarkers/red_32.png")
        );
    }

    #[test]
    fn test_size_embedded_in_path() {
        assert_eq!(
            marker_icon("model1", 64).as_deref(),
            Some("/static/img/MapMarkers/blue_64.png")
        );
    }

    #[test]
    fn test_unknown_model_yields_none() {
        assert_eq!(marker_icon("model5", 32), None);
        assert_eq!(marker_icon("", 32), None);
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Model1".parse::<MachineModel>().is_err());
    }
}
