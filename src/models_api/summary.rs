use std::fmt::Display;

/// Everything the charts need for one player across a batch of matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateSummary {
    pub wins: u32,
    pub losses: u32,
    pub saves: u64,
    pub goals: u64,
    pub assists: u64,
    pub shots: u64,
    pub win_scores: Vec<u32>,
    pub lose_scores: Vec<u32>,
    pub goal_diffs: Vec<i64>,
    /// Seconds between goals, match by match.
    pub time_diffs: Vec<f64>,
    pub player_name: Option<String>,
}

impl AggregateSummary {
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

fn join<T: Display>(values: &[T]) -> String {
    values.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ")
}

impl Display for AggregateSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let time_diffs: Vec<String> = self.time_diffs.iter().map(|e| format!("{e:.1}")).collect();
        writeln!(f, "Player: {}", self.player_name.as_deref().unwrap_or("-"))?;
        writeln!(f, "Games: {} ({} wins, {} losses)", self.games(), self.wins, self.losses)?;
        writeln!(f, "Saves: {}", self.saves)?;
        writeln!(f, "Goals: {}", self.goals)?;
        writeln!(f, "Shots: {}", self.shots)?;
        writeln!(f, "Assists: {}", self.assists)?;
        writeln!(f, "Win scores: [{}]", join(&self.win_scores))?;
        writeln!(f, "Loss scores: [{}]", join(&self.lose_scores))?;
        writeln!(f, "Goal difference: [{}]", join(&self.goal_diffs))?;
        writeln!(f, "Time between goals (s): [{}]", time_diffs.join(", "))
    }
}
