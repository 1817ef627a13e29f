use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How block sizes map to display weights.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SizeScale {
    #[default]
    Log,
    Linear,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GraphFormat {
    #[default]
    Json,
    Dot,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Scale used for the size-based display weight
    #[arg(long, value_enum, default_value_t = SizeScale::Log)]
    pub size_scale: SizeScale,

    /// Only show the N largest contributions (0 = all blocks)
    #[arg(long, default_value_t = 0)]
    pub top: usize,

    /// Also print the identity layout's fitness for comparison
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub show_identity: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            size_scale: SizeScale::Log,
            top: 0,
            show_identity: true,
        }
    }
}
