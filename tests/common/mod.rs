pub mod replays;
pub mod rocket_plot;
