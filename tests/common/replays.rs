use std::path::{Path, PathBuf};

use serde_json::{json, Value};

pub struct ReplayFixture {
    player_name: String,
    team: Option<i32>,
    team0_score: u32,
    team1_score: u32,
    frames: Vec<u32>,
    score: u32,
    saves: u32,
    goals: u32,
    assists: u32,
    shots: u32,
}

impl ReplayFixture {
    pub fn new(player_name: &str, team: Option<i32>, team0_score: u32, team1_score: u32) -> ReplayFixture {
        ReplayFixture {
            player_name: player_name.to_string(),
            team,
            team0_score,
            team1_score,
            frames: vec![],
            score: 0,
            saves: 0,
            goals: 0,
            assists: 0,
            shots: 0,
        }
    }

    pub fn goals_at(mut self, frames: &[u32]) -> Self {
        self.frames = frames.to_vec();
        self
    }

    pub fn stats(mut self, score: u32, saves: u32, goals: u32, assists: u32, shots: u32) -> Self {
        self.score = score;
        self.saves = saves;
        self.goals = goals;
        self.assists = assists;
        self.shots = shots;
        self
    }

    pub fn to_json(&self) -> Value {
        let mut player = json!({
            "Name": self.player_name,
            "Score": self.score,
            "Saves": self.saves,
            "Goals": self.goals,
            "Assists": self.assists,
            "Shots": self.shots,
            "bBot": false,
        });
        if let Some(team) = self.team {
            player["Team"] = json!(team);
        }
        let goals: Vec<Value> = self.frames.iter()
            .map(|frame| json!({ "frame": frame, "PlayerName": self.player_name, "PlayerTeam": self.team }))
            .collect();
        json!({
            "header_size": 4768,
            "major_version": 868,
            "properties": {
                "TeamSize": 3,
                "Team0Score": self.team0_score,
                "Team1Score": self.team1_score,
                "Goals": goals,
                "PlayerStats": [
                    { "Name": "Opponent", "Team": 1, "Score": 999, "Saves": 9, "Goals": 9, "Assists": 9, "Shots": 9 },
                    player,
                ],
                "RecordFPS": 30.0,
                "PlayerName": self.player_name,
            }
        })
    }

    pub fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, serde_json::to_string_pretty(&self.to_json()).unwrap()).unwrap();
        path
    }
}
