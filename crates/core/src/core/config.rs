#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TapeError};
use crate::expression::{ExpressionTemplate, DEFAULT_PATTERN, DEFAULT_PLACEHOLDER};
use crate::geometry::TapeGeometry;
use crate::problem::DEFAULT_MAX_NUMBER;

pub const DEFAULT_TAPE_ASSET: &str = "assets/tape.png";

/// Everything a host can tune about the widget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidgetConfig {
    pub geometry: TapeGeometry,
    /// Largest value on the tape; problems satisfy `a + b <= max_number`.
    pub max_number: u32,
    pub pattern: String,
    pub placeholder: String,
    pub tape_asset: String,
    /// Fixed PRNG seed. Hosts pick one from their own entropy when unset.
    pub seed: Option<u64>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            geometry: TapeGeometry::default(),
            max_number: DEFAULT_MAX_NUMBER,
            pattern: DEFAULT_PATTERN.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            tape_asset: DEFAULT_TAPE_ASSET.to_string(),
            seed: None,
        }
    }
}

impl WidgetConfig {
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: WidgetConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_number < 2 {
            return Err(invalid("max_number", "must be at least 2"));
        }
        let g = &self.geometry;
        for (field, value) in [
            ("geometry.width", g.width),
            ("geometry.height", g.height),
            ("geometry.step", g.step),
            ("geometry.input_size", g.input_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, "must be a positive number"));
            }
        }
        if !(g.margin_left.is_finite() && g.head_len.is_finite()) {
            return Err(invalid("geometry", "must be finite"));
        }
        self.template()?;
        Ok(())
    }

    /// Parsed expression template.
    pub fn template(&self) -> Result<ExpressionTemplate> {
        ExpressionTemplate::parse(&self.pattern, &self.placeholder)
    }
}

fn invalid(field: &'static str, reason: &str) -> TapeError {
    TapeError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(WidgetConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = WidgetConfig::from_json_str(r#"{ "max_number": 10, "seed": 42 }"#).unwrap();
        assert_eq!(cfg.max_number, 10);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.geometry, TapeGeometry::default());
        assert_eq!(cfg.pattern, DEFAULT_PATTERN);
    }

    #[test]
    fn nested_geometry_override() {
        let cfg = WidgetConfig::from_json_str(r#"{ "geometry": { "step": 30 } }"#).unwrap();
        assert_eq!(cfg.geometry.step, 30.0);
        assert_eq!(cfg.geometry.margin_left, 39.0);
    }

    #[test]
    fn rejects_bad_values() {
        let small = WidgetConfig {
            max_number: 1,
            ..Default::default()
        };
        assert!(matches!(
            small.validate(),
            Err(TapeError::InvalidConfig {
                field: "max_number",
                ..
            })
        ));

        let mut flat = WidgetConfig::default();
        flat.geometry.step = 0.0;
        assert!(flat.validate().is_err());

        let slots = WidgetConfig {
            pattern: "{x}".to_string(),
            ..Default::default()
        };
        assert!(matches!(slots.validate(), Err(TapeError::UnknownSlot(_))));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            WidgetConfig::from_json_str("{ nope"),
            Err(TapeError::Json(_))
        ));
    }
}
