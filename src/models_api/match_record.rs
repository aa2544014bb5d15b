use crate::models_external::replay::{ReplayGoal, ReplayPlayerStats, ReplayProperties};

/// One replay's worth of stats, as seen from the player who recorded it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub player_name: String,
    /// Frames per second, always positive.
    pub record_fps: f64,
    pub player_stats: Vec<PlayerMatchStats>,
    pub team0_score: u32,
    pub team1_score: u32,
    pub goals: Vec<GoalEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerMatchStats {
    pub name: String,
    pub team: Option<i32>,
    pub score: u32,
    pub saves: u32,
    pub goals: u32,
    pub assists: u32,
    pub shots: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalEvent {
    pub frame: u32,
}

impl MatchRecord {
    /// First stat block named after the recording player.
    pub fn find_player(&self) -> Option<&PlayerMatchStats> {
        self.player_stats.iter().find(|e| e.name == self.player_name)
    }
}

impl From<ReplayPlayerStats> for PlayerMatchStats {
    fn from(v: ReplayPlayerStats) -> Self {
        PlayerMatchStats {
            name: v.Name,
            team: v.Team,
            score: v.Score,
            saves: v.Saves,
            goals: v.Goals,
            assists: v.Assists,
            shots: v.Shots,
        }
    }
}

impl From<ReplayGoal> for GoalEvent {
    fn from(v: ReplayGoal) -> Self {
        GoalEvent { frame: v.frame }
    }
}

impl TryFrom<ReplayProperties> for MatchRecord {
    type Error = anyhow::Error;

    fn try_from(v: ReplayProperties) -> Result<Self, Self::Error> {
        if !(v.RecordFPS.is_finite() && v.RecordFPS > 0.0) {
            anyhow::bail!("RecordFPS must be positive, got {}", v.RecordFPS);
        }
        Ok(MatchRecord {
            player_name: v.PlayerName,
            record_fps: v.RecordFPS,
            player_stats: v.PlayerStats.into_iter().map(|e| e.into()).collect(),
            team0_score: v.Team0Score,
            team1_score: v.Team1Score,
            goals: v.Goals.into_iter().map(|e| e.into()).collect(),
        })
    }
}
