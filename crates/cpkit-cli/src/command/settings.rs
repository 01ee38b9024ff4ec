use std::fmt;

use cpkit_engine::CapabilityConfig;

/// A configuration value that can be entered as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Setting {
    Count,
    RangeX,
    RangeY,
    Precision,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Setting::Count => "count",
            Setting::RangeX => "range-x",
            Setting::RangeY => "range-y",
            Setting::Precision => "precision",
        };
        f.write_str(name)
    }
}

impl Setting {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "count" => Some(Setting::Count),
            "range-x" => Some(Setting::RangeX),
            "range-y" => Some(Setting::RangeY),
            "precision" => Some(Setting::Precision),
            _ => None,
        }
    }

    /// Applies `text` to `config`.
    ///
    /// Invalid or non-positive input is ignored with a warning in the log and
    /// the previous value stays in effect.
    pub(crate) fn apply(self, config: &mut CapabilityConfig, text: &str) -> bool {
        let accepted = match self {
            Setting::Count => config.set_sample_count_text(text),
            Setting::RangeX => config.set_range_x_text(text),
            Setting::RangeY => config.set_range_y_text(text),
            Setting::Precision => config.set_spec_limit_text(text),
        };
        if !accepted {
            log::warn!("ignoring invalid {self} value {text:?}");
        }
        accepted
    }
}

/// Configuration options shared by commands, taken verbatim as text.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConfigArg {
    /// Number of samples to generate [default: 30]
    #[arg(long, allow_hyphen_values = true)]
    pub count: Option<String>,
    /// Half-width of the x deviation range [default: 0.01]
    #[arg(long, allow_hyphen_values = true)]
    pub range_x: Option<String>,
    /// Half-width of the y deviation range [default: 0.01]
    #[arg(long, allow_hyphen_values = true)]
    pub range_y: Option<String>,
    /// Specification limit (precision) used for CPK [default: 0.02]
    #[arg(long, allow_hyphen_values = true)]
    pub precision: Option<String>,
}

impl ConfigArg {
    pub(crate) fn apply(&self, config: &mut CapabilityConfig) {
        let entries = [
            (Setting::Count, &self.count),
            (Setting::RangeX, &self.range_x),
            (Setting::RangeY, &self.range_y),
            (Setting::Precision, &self.precision),
        ];
        for (setting, text) in entries {
            if let Some(text) = text {
                setting.apply(config, text);
            }
        }
    }
}
