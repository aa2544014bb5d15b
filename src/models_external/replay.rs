/*
type ReplayJson = {
    properties: {
        PlayerName: string,
        RecordFPS: number,
        PlayerStats: {
            Name: string,
            Team?: number,
            Score?: number,
            Saves?: number,
            Goals?: number,
            Assists?: number,
            Shots?: number,
        }[],
        Team0Score?: number,
        Team1Score?: number,
        Goals?: { frame: number, PlayerName?: string, PlayerTeam?: number }[],
    }
}
 */

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct ReplayJson {
    pub properties: ReplayProperties,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ReplayProperties {
    pub PlayerName: String,
    pub RecordFPS: f64,
    pub PlayerStats: Vec<ReplayPlayerStats>,
    #[serde(default)]
    pub Team0Score: u32,
    #[serde(default)]
    pub Team1Score: u32,
    #[serde(default)]
    pub Goals: Vec<ReplayGoal>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReplayPlayerStats {
    pub Name: String,
    #[serde(default)]
    pub Team: Option<i32>,
    #[serde(default)]
    pub Score: u32,
    #[serde(default)]
    pub Saves: u32,
    #[serde(default)]
    pub Goals: u32,
    #[serde(default)]
    pub Assists: u32,
    #[serde(default)]
    pub Shots: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ReplayGoal {
    pub frame: u32,
}
