use std::path::Path;

use anyhow::Context as _;

use crate::{
    curve::svg::SegmentGranularity,
    foundation::error::{EpicycleError, EpicycleResult},
    foundation::pool::Threading,
    fourier::epicycles::DEFAULT_MIN_RADIUS,
};

/// Tunables for one sampling + analysis run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Requested sample count (exact for parametric sources, approximate for paths).
    pub sample_count: usize,
    /// Truncation bound `K` for the coefficient set.
    pub order: i64,
    /// Epicycles smaller than this are not emitted.
    pub min_radius: f64,
    /// Points per traced partial-sum polyline.
    pub trace_steps: usize,
    /// How SVG geometry is split into sampler pieces.
    pub granularity: SegmentGranularity,
    /// Worker-pool settings.
    pub threading: Threading,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_count: 2000,
            order: 50,
            min_radius: DEFAULT_MIN_RADIUS,
            trace_steps: 1000,
            granularity: SegmentGranularity::default(),
            threading: Threading::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> EpicycleResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| EpicycleError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> EpicycleResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check every field's range.
    pub fn validate(&self) -> EpicycleResult<()> {
        if self.sample_count == 0 {
            return Err(EpicycleError::validation("sample_count must be > 0"));
        }
        if self.order < 0 {
            return Err(EpicycleError::InvalidOrder(self.order));
        }
        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return Err(EpicycleError::validation(
                "min_radius must be finite and >= 0",
            ));
        }
        if self.trace_steps == 0 {
            return Err(EpicycleError::validation("trace_steps must be > 0"));
        }
        self.threading.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
