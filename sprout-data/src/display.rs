//! Bar sizing and colors for the chart elements.

use serde::{Deserialize, Serialize};
use sprout_core::Season;
use std::fmt;

/// Hex colors for each season's bars.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonTints {
    pub spring: String,
    pub summer: String,
    pub fall: String,
    pub winter: String,
}

impl Default for SeasonTints {
    fn default() -> Self {
        SeasonTints {
            spring: "#2CA014".to_string(),
            summer: "#FEFF17".to_string(),
            fall: "#D13400".to_string(),
            winter: "#A9F0FF".to_string(),
        }
    }
}

impl SeasonTints {
    pub fn for_season(&self, season: Season) -> &str {
        match season {
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Fall => &self.fall,
            Season::Winter => &self.winter,
        }
    }
}

/// Sizes (display units) and tints used to lay out the bar charts.
///
/// Deserializing a partial object keeps the defaults for any missing field.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub row_width: u32,
    /// Height of a bar at its level's maximum
    pub max_row_height: u32,
    /// Smallest height for any positive value
    pub min_row_height: u32,
    /// Height for a zero or negative value, kept below `min_row_height`
    pub zero_data_row_height: u32,
    /// Added to `min_row_height` for today's placeholder bar
    pub today_height_bump: u32,
    pub today_tint: String,
    pub future_tint: String,
    pub year_tint: String,
    pub cash_in_tint: String,
    pub cash_out_tint: String,
    pub season_tints: SeasonTints,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            row_width: 20,
            max_row_height: 128,
            min_row_height: 3,
            zero_data_row_height: 2,
            today_height_bump: 5,
            today_tint: "#000000".to_string(),
            future_tint: "#959595".to_string(),
            year_tint: "#40FC05".to_string(),
            cash_in_tint: "#696969".to_string(),
            cash_out_tint: "#B22222".to_string(),
            season_tints: SeasonTints::default(),
        }
    }
}

impl DisplayConfig {
    /// Height of a bar for `value` when the level's largest value is `level_max`.
    ///
    /// Non-positive values get the zero-data height so that "recorded zero"
    /// stays distinguishable from the future. Positive values scale linearly
    /// and never drop below `min_row_height`.
    pub fn bar_height(&self, value: i64, level_max: i64) -> u32 {
        if value <= 0 {
            return self.zero_data_row_height;
        }
        let scale = value as f64 / level_max.max(1) as f64;
        let scaled = (scale * f64::from(self.max_row_height)).round_ties_even();
        scaled.max(f64::from(self.min_row_height)) as u32
    }

    pub fn today_height(&self) -> u32 {
        self.min_row_height + self.today_height_bump
    }

    pub fn layout(&self, height: u32) -> BarLayout {
        BarLayout {
            width: self.row_width,
            height,
        }
    }

    pub fn season_tint(&self, season: Season) -> &str {
        self.season_tints.for_season(season)
    }
}

/// Width by height of one bar.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct BarLayout {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for BarLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayConfig;
    use sprout_core::Season;

    #[test]
    fn test_bar_height_zero_and_negative() {
        let config = DisplayConfig::default();
        assert_eq!(config.bar_height(0, 100), 2);
        assert_eq!(config.bar_height(-50, 100), 2);
    }

    #[test]
    fn test_bar_height_scales_to_max() {
        let config = DisplayConfig::default();
        assert_eq!(config.bar_height(100, 100), 128);
        assert_eq!(config.bar_height(50, 100), 64);
        assert_eq!(config.bar_height(1, 1_000_000), 3);
    }

    #[test]
    fn test_bar_height_monotonic_and_floored() {
        let config = DisplayConfig::default();
        let max = 1500;
        let mut previous = 0;
        for value in 1..=max {
            let height = config.bar_height(value, max);
            assert!(height >= config.min_row_height);
            assert!(height >= previous);
            previous = height;
        }
    }

    #[test]
    fn test_layout_display() {
        let config = DisplayConfig::default();
        assert_eq!(config.layout(64).to_string(), "20px 64px");
        assert_eq!(config.today_height(), 8);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r##"{ "max_row_height": 200, "season_tints": { "fall": "#FF8800" } }"##;
        let config: DisplayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_row_height, 200);
        assert_eq!(config.min_row_height, 3);
        assert_eq!(config.season_tint(Season::Fall), "#FF8800");
        assert_eq!(config.season_tint(Season::Spring), "#2CA014");
    }
}
