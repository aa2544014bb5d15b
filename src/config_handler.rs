use anyhow::Context;
use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::log;

const WIN_COLOR: Color = Color::Rgb(0x7B, 0x9F, 0x35);
const LOSS_COLOR: Color = Color::Rgb(0xAA, 0x39, 0x39);
const STAT_COLOR: Color = Color::Rgb(0x22, 0x66, 0x66);

/// Same upper bound as `--bins`.
pub const MAX_HISTOGRAM_BINS: usize = u16::MAX as usize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default="default_histogram_bins")]
    pub histogram_bins: usize,

    #[serde(default="default_headroom")]
    pub headroom: f64,

    #[serde(default="default_win_color")]
    pub win_color: String,

    #[serde(default="default_loss_color")]
    pub loss_color: String,

    #[serde(default="default_stat_color")]
    pub stat_color: String,

    #[serde(default="default_false")]
    pub strict_player: bool,
}

fn default_histogram_bins() -> usize {
    10
}

fn default_headroom() -> f64 {
    1.2
}

fn default_win_color() -> String {
    "#7B9F35".to_string()
}

fn default_loss_color() -> String {
    "#AA3939".to_string()
}

fn default_stat_color() -> String {
    "#226666".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Config {
            histogram_bins: default_histogram_bins(),
            headroom: default_headroom(),
            win_color: default_win_color(),
            loss_color: default_loss_color(),
            stat_color: default_stat_color(),
            strict_player: default_false(),
        }
    }
}

fn parse_color(value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        log::warn!("[CONFIG] Unknown color {value}, using {fallback}");
        fallback
    })
}

impl Config {
    pub fn win_color(&self) -> Color {
        parse_color(&self.win_color, WIN_COLOR)
    }

    pub fn loss_color(&self) -> Color {
        parse_color(&self.loss_color, LOSS_COLOR)
    }

    pub fn stat_color(&self) -> Color {
        parse_color(&self.stat_color, STAT_COLOR)
    }

    fn sanitize(mut self) -> Self {
        if self.histogram_bins == 0 {
            log::warn!("[CONFIG] histogram_bins must be positive, using {}", default_histogram_bins());
            self.histogram_bins = default_histogram_bins();
        }
        if self.histogram_bins > MAX_HISTOGRAM_BINS {
            log::warn!("[CONFIG] histogram_bins {} is too large, using {}", self.histogram_bins, MAX_HISTOGRAM_BINS);
            self.histogram_bins = MAX_HISTOGRAM_BINS;
        }
        if !(self.headroom.is_finite() && self.headroom >= 1.0) {
            log::warn!("[CONFIG] headroom must be at least 1.0, using {}", default_headroom());
            self.headroom = default_headroom();
        }
        self
    }
}

/// Explicit path first, then CONFIG_PATH, otherwise defaults.
pub fn get_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = path.map(PathBuf::from)
        .or_else(|| std::env::var_os("CONFIG_PATH").map(PathBuf::from));
    let Some(path) = path else {
        log::debug!("[CONFIG] No config file, using defaults");
        return Ok(Config::default());
    };

    let data = fs::read_to_string(&path)
        .with_context(|| format!("Unable to read config {}", path.display()))?;
    let result: Config = serde_json::from_str(&data)
        .with_context(|| format!("Could not parse JSON at {}", path.display()))?;
    let result = result.sanitize();
    log::info!("[CONFIG] {:?}", result);
    Ok(result)
}
