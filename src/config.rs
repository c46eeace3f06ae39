//! Processing configuration

use crate::error::{RasterError, RasterResult};
use crate::trim::Margins;
use serde::{Deserialize, Serialize};

/// 80mm paper width class in dots
pub const PAPER_WIDTH_80MM: u32 = 576;

/// 58mm paper width class in dots
pub const PAPER_WIDTH_58MM: u32 = 384;

/// Page processing configuration
///
/// Defaults target 80mm paper at 3x render scale. `enabled: false` skips
/// trimming and scaling; rasterization always runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Run the trim and scale steps
    pub enabled: bool,

    /// Padding around the detected content box
    pub margins: Margins,

    /// Paper width in dots; `None` rasters at the native bitmap width
    pub target_width: Option<u32>,

    /// Up-sampling factor applied when rendering source pages
    pub render_scale: f32,

    /// Luminance cutoff in [0, 255]; pixels below it burn
    ///
    /// Wider than `u8` so an out-of-range caller value is reported by
    /// `validate()` instead of failing deserialization.
    pub threshold: u32,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            margins: Margins::default(),
            target_width: Some(PAPER_WIDTH_80MM),
            render_scale: 3.0,
            threshold: 160,
        }
    }
}

impl ProcessConfig {
    /// Validate the configuration before any page is processed
    pub fn validate(&self) -> RasterResult<()> {
        if let Some(w) = self.target_width
            && w == 0
        {
            return Err(RasterError::InvalidConfig(
                "target width must be positive".to_string(),
            ));
        }

        if self.threshold > 255 {
            return Err(RasterError::InvalidConfig(format!(
                "threshold {} outside 0-255",
                self.threshold
            )));
        }

        if !(self.render_scale > 0.0) {
            return Err(RasterError::InvalidConfig(format!(
                "render scale {} must be positive",
                self.render_scale
            )));
        }

        Ok(())
    }

    /// Threshold narrowed for the rasterizer; call after `validate()`
    pub(crate) fn threshold_u8(&self) -> u8 {
        self.threshold.min(255) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProcessConfig::default();
        assert!(config.enabled);
        assert_eq!(config.margins, Margins::uniform(8));
        assert_eq!(config.target_width, Some(576));
        assert_eq!(config.render_scale, 3.0);
        assert_eq!(config.threshold, 160);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: ProcessConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ProcessConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config: ProcessConfig = serde_json::from_str(
            r#"{"threshold": 128, "margins": {"top": 0, "bottom": 0, "left": 4, "right": 4}}"#,
        )
        .unwrap();
        assert_eq!(config.threshold, 128);
        assert_eq!(config.margins.left, 4);
        assert_eq!(config.margins.top, 0);
        // untouched fields keep their defaults
        assert_eq!(config.target_width, Some(576));
    }

    #[test]
    fn test_zero_target_width_rejected() {
        let config = ProcessConfig {
            target_width: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RasterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let config = ProcessConfig {
            threshold: 300,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RasterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_nonpositive_render_scale_rejected() {
        for scale in [0.0, -1.5] {
            let config = ProcessConfig {
                render_scale: scale,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_no_target_width_is_valid() {
        let config = ProcessConfig {
            target_width: None,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trip() {
        let config = ProcessConfig {
            enabled: false,
            threshold: 96,
            target_width: Some(PAPER_WIDTH_58MM),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ProcessConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
