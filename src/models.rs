use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Team0,
    Team1,
}

impl Team {
    pub fn get_all() -> Vec<Team> {
        vec![Team::Team0, Team::Team1]
    }

    /// (own score, opponent score) for this side.
    pub fn scores(&self, team0_score: u32, team1_score: u32) -> (u32, u32) {
        match self {
            Team::Team0 => (team0_score, team1_score),
            Team::Team1 => (team1_score, team0_score),
        }
    }

    pub fn goal_diff(&self, team0_score: u32, team1_score: u32) -> i64 {
        let (own, opponent) = self.scores(team0_score, team1_score);
        i64::from(own) - i64::from(opponent)
    }
}

impl TryFrom<i32> for Team {
    type Error = ParseTeamError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Team::Team0),
            1 => Ok(Team::Team1),
            _ => Err(ParseTeamError(value)),
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseTeamError(pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// A tie is a loss, there is no draw.
    pub fn of(team: Team, team0_score: u32, team1_score: u32) -> Outcome {
        let (own, opponent) = team.scores(team0_score, team1_score);
        match own > opponent {
            true => Outcome::Win,
            false => Outcome::Loss,
        }
    }
}
