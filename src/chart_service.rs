use std::time::Instant;

use ratatui::style::Color;
use tracing::log;

use crate::{config_handler::Config, models_api::summary::AggregateSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct BarModel {
    pub label: String,
    pub value: u64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartModel {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<BarModel>,
    pub y_max: u64,
}

/// Five number summary of a sample, whiskers at 1.5 IQR.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub min_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max_whisker: f64,
    pub outliers: Vec<f64>,
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    sorted[low] + (sorted[high] - sorted[low]) * (rank - low as f64)
}

impl BoxStats {
    pub fn compute(values: &[f64]) -> Option<BoxStats> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|e| e.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);
        let low_fence = q1 - 1.5 * (q3 - q1);
        let high_fence = q3 + 1.5 * (q3 - q1);

        let inside: Vec<f64> = sorted.iter().copied().filter(|e| *e >= low_fence && *e <= high_fence).collect();
        let min_whisker = inside.first().copied().unwrap_or(q1);
        let max_whisker = inside.last().copied().unwrap_or(q3);
        let outliers = sorted.iter().copied().filter(|e| *e < low_fence || *e > high_fence).collect();

        Some(BoxStats { min_whisker, q1, median, q3, max_whisker, outliers })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub label: String,
    pub stats: Option<BoxStats>,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotModel {
    pub title: String,
    pub y_label: String,
    pub groups: Vec<BoxGroup>,
    pub y_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// Equal width bins over [min, max], the last bin includes max.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let values: Vec<f64> = values.iter().copied().filter(|e| e.is_finite()).collect();
    if values.is_empty() || bins == 0 {
        return vec![];
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lower, upper) = match min == max {
        true => (min - 0.5, max + 0.5),
        false => (min, max),
    };
    let width = (upper - lower) / bins as f64;

    let mut counts = vec![0u64; bins];
    for value in values {
        let index = (((value - lower) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts.into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lower + width * i as f64,
            upper: lower + width * (i + 1) as f64,
            count,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramModel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bins: Vec<HistogramBin>,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(BarChartModel),
    Box(BoxPlotModel),
    Histogram(HistogramModel),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(e) => &e.title,
            Chart::Box(e) => &e.title,
            Chart::Histogram(e) => &e.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub player_name: Option<String>,
    pub games: u32,
    pub charts: Vec<Chart>,
}

impl ChartSet {
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

fn bar_y_max(values: &[u64], headroom: f64) -> u64 {
    let max = values.iter().copied().max().unwrap_or_default();
    ((max as f64 * headroom).ceil() as u64).max(1)
}

fn titled(title: &str, player_name: &Option<String>) -> String {
    match player_name {
        Some(name) => format!("{title} ({name})"),
        None => title.to_string(),
    }
}

pub struct ChartService;
impl ChartService {

    pub fn build(summary: &AggregateSummary, config: &Config) -> ChartSet {
        let before = Instant::now();
        let name = &summary.player_name;

        let outcome_values = [u64::from(summary.wins), u64::from(summary.losses)];
        let outcomes = BarChartModel {
            title: titled("Wins vs. losses", name),
            y_label: "Games".to_string(),
            bars: vec![
                BarModel { label: "Wins".to_string(), value: outcome_values[0], color: config.win_color() },
                BarModel { label: "Losses".to_string(), value: outcome_values[1], color: config.loss_color() },
            ],
            y_max: bar_y_max(&outcome_values, config.headroom),
        };

        let stat_values = [
            ("Saves", summary.saves),
            ("Goals", summary.goals),
            ("Shots", summary.shots),
            ("Assists", summary.assists),
        ];
        let stats = BarChartModel {
            title: titled("Stats Breakdown", name),
            y_label: "Count".to_string(),
            bars: stat_values.iter()
                .map(|(label, value)| BarModel { label: label.to_string(), value: *value, color: config.stat_color() })
                .collect(),
            y_max: bar_y_max(&stat_values.map(|(_, e)| e), config.headroom),
        };

        let win_scores: Vec<f64> = summary.win_scores.iter().map(|e| f64::from(*e)).collect();
        let lose_scores: Vec<f64> = summary.lose_scores.iter().map(|e| f64::from(*e)).collect();
        let top_score = win_scores.iter().chain(lose_scores.iter()).copied().fold(0.0, f64::max);
        let scores = BoxPlotModel {
            title: titled("Player's Score Distribution: Wins vs. Losses", name),
            y_label: "Score".to_string(),
            groups: vec![
                BoxGroup { label: "Wins".to_string(), stats: BoxStats::compute(&win_scores), color: config.win_color() },
                BoxGroup { label: "Losses".to_string(), stats: BoxStats::compute(&lose_scores), color: config.loss_color() },
            ],
            y_max: (top_score * config.headroom).max(1.0),
        };

        let goal_diffs: Vec<f64> = summary.goal_diffs.iter().map(|e| *e as f64).collect();
        let goal_difference = HistogramModel {
            title: titled("Goal Difference", name),
            x_label: "Goals".to_string(),
            y_label: "Frequency".to_string(),
            bins: histogram(&goal_diffs, config.histogram_bins),
            color: config.stat_color(),
        };

        let time_between_goals = HistogramModel {
            title: titled("Time Between Goals", name),
            x_label: "Seconds".to_string(),
            y_label: "Frequency".to_string(),
            bins: histogram(&summary.time_diffs, config.histogram_bins),
            color: config.stat_color(),
        };

        let charts = vec![
            Chart::Bar(outcomes),
            Chart::Bar(stats),
            Chart::Box(scores),
            Chart::Histogram(goal_difference),
            Chart::Histogram(time_between_goals),
        ];
        log::info!("[CHART] Built {} charts in {:.2?}", charts.len(), before.elapsed());
        ChartSet { player_name: summary.player_name.clone(), games: summary.games(), charts }
    }
}
