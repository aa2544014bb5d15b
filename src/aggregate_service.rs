use std::time::Instant;

use thiserror::Error;
use tracing::log;

use crate::{models::{Outcome, Team}, models_api::{match_record::{GoalEvent, MatchRecord, PlayerMatchStats}, summary::AggregateSummary}};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("Did not see player {player_name} in match {match_index}")]
    PlayerNotFound { match_index: usize, player_name: String },
    #[error("Player {player_name} has no usable team in match {match_index} (team: {team:?})")]
    InvalidTeam { match_index: usize, player_name: String, team: Option<i32> },
    #[error("Expected player {expected} but match {match_index} was recorded by {found}")]
    PlayerMismatch { match_index: usize, expected: String, found: String },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// Every match must be recorded by the same player as the first one.
    pub strict_player: bool,
}

/// Seconds from kickoff to the first goal, then between each following goal.
/// Frames are taken in ascending order, out of order goals are reordered first.
pub fn goal_intervals(goals: &[GoalEvent], fps: f64) -> Vec<f64> {
    let mut frames: Vec<u32> = goals.iter().map(|e| e.frame).collect();
    frames.sort_unstable();

    let mut previous = 0.0;
    frames.into_iter()
        .map(|frame| {
            let seconds = f64::from(frame) / fps;
            let interval = seconds - previous;
            previous = seconds;
            interval
        })
        .collect()
}

#[derive(Default)]
struct SummaryBuilder {
    summary: AggregateSummary,
}

impl SummaryBuilder {
    fn add_match(&mut self, record: &MatchRecord, player: &PlayerMatchStats, team: Team) {
        let summary = &mut self.summary;
        match Outcome::of(team, record.team0_score, record.team1_score) {
            Outcome::Win => {
                summary.wins += 1;
                summary.win_scores.push(player.score);
            },
            Outcome::Loss => {
                summary.losses += 1;
                summary.lose_scores.push(player.score);
            },
        }
        summary.goal_diffs.push(team.goal_diff(record.team0_score, record.team1_score));
        summary.time_diffs.extend(goal_intervals(&record.goals, record.record_fps));

        summary.saves += u64::from(player.saves);
        summary.goals += u64::from(player.goals);
        summary.assists += u64::from(player.assists);
        summary.shots += u64::from(player.shots);
        summary.player_name = Some(player.name.clone());
    }

    fn build(self) -> AggregateSummary {
        self.summary
    }
}

pub struct AggregateService;
impl AggregateService {

    pub fn aggregate(matches: &[MatchRecord]) -> Result<AggregateSummary, AggregateError> {
        AggregateService::aggregate_with(matches, &AggregateOptions::default())
    }

    pub fn aggregate_with(matches: &[MatchRecord], options: &AggregateOptions) -> Result<AggregateSummary, AggregateError> {
        log::info!("[AGGREGATE] Start with {} matches", matches.len());
        let before = Instant::now();
        let expected_player = matches.first().map(|e| e.player_name.as_str());
        let mut builder = SummaryBuilder::default();

        for (match_index, record) in matches.iter().enumerate() {
            if let Some(expected) = expected_player.filter(|_| options.strict_player) {
                if record.player_name != expected {
                    return Err(AggregateError::PlayerMismatch {
                        match_index,
                        expected: expected.to_string(),
                        found: record.player_name.clone(),
                    });
                }
            }

            let player = record.find_player()
                .ok_or_else(|| AggregateError::PlayerNotFound { match_index, player_name: record.player_name.clone() })?;
            let team = player.team
                .and_then(|e| Team::try_from(e).ok())
                .ok_or_else(|| AggregateError::InvalidTeam { match_index, player_name: player.name.clone(), team: player.team })?;

            log::debug!("[AGGREGATE] Match {match_index} {} on {team} {}-{}", player.name, record.team0_score, record.team1_score);
            builder.add_match(record, player, team);
        }

        let summary = builder.build();
        log::info!("[AGGREGATE] Finished {} wins, {} losses in {:.0?}", summary.wins, summary.losses, before.elapsed());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use crate::models_api::match_record::{GoalEvent, MatchRecord, PlayerMatchStats};

    use super::{goal_intervals, AggregateError, AggregateOptions, AggregateService};

    pub fn get_match(name: &str, team: Option<i32>, team0_score: u32, team1_score: u32, frames: &[u32]) -> MatchRecord {
        MatchRecord {
            player_name: name.to_string(),
            record_fps: 30.0,
            player_stats: vec![
                PlayerMatchStats { name: "opponent".to_string(), team: Some(1), score: 999, saves: 7, goals: 7, assists: 7, shots: 7 },
                PlayerMatchStats { name: name.to_string(), team, score: 500, saves: 2, goals: 1, assists: 0, shots: 5 },
            ],
            team0_score,
            team1_score,
            goals: frames.iter().map(|e| GoalEvent { frame: *e }).collect(),
        }
    }

    #[test]
    fn single_win() {
        // Given
        let matches = [get_match("Kaydop", Some(0), 3, 1, &[300, 600])];

        // When
        let summary = AggregateService::aggregate(&matches).unwrap();

        // Then
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 0);
        assert_eq!(summary.win_scores, vec![500]);
        assert!(summary.lose_scores.is_empty());
        assert_eq!(summary.goal_diffs, vec![2]);
        assert_eq!(summary.time_diffs, vec![10.0, 10.0]);
        assert_eq!(summary.saves, 2);
        assert_eq!(summary.goals, 1);
        assert_eq!(summary.shots, 5);
        assert_eq!(summary.assists, 0);
        assert_eq!(summary.player_name.as_deref(), Some("Kaydop"));
    }

    #[test]
    fn tie_counts_as_loss() {
        // Given - there is no draw category, a tie is recorded as a loss
        let matches = [get_match("Kaydop", Some(1), 2, 2, &[100, 200, 300, 400])];

        // When
        let summary = AggregateService::aggregate(&matches).unwrap();

        // Then
        assert_eq!(summary.wins, 0);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.lose_scores, vec![500]);
        assert_eq!(summary.goal_diffs, vec![0]);
    }

    #[test]
    fn missing_player_aborts() {
        // Given
        let mut missing = get_match("Kaydop", Some(0), 3, 1, &[]);
        missing.player_name = "Squishy".to_string();
        let matches = [get_match("Kaydop", Some(0), 3, 1, &[]), missing];

        // When
        let result = AggregateService::aggregate(&matches);

        // Then
        assert_eq!(result, Err(AggregateError::PlayerNotFound { match_index: 1, player_name: "Squishy".to_string() }));
    }

    #[test]
    fn win_and_loss_keep_input_order() {
        // Given
        let matches = [
            get_match("Kaydop", Some(1), 1, 4, &[30]),
            get_match("Kaydop", Some(0), 0, 2, &[60, 90]),
        ];

        // When
        let summary = AggregateService::aggregate(&matches).unwrap();

        // Then
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.win_scores.len(), 1);
        assert_eq!(summary.lose_scores.len(), 1);
        assert_eq!(summary.goal_diffs, vec![3, -2]);
        assert_eq!(summary.time_diffs, vec![1.0, 2.0, 1.0]);
        assert_eq!(summary.saves, 4);
        assert_eq!(summary.shots, 10);
    }

    #[test]
    fn no_goals_no_intervals() {
        // Given
        let matches = [get_match("Kaydop", Some(0), 0, 0, &[])];

        // When
        let summary = AggregateService::aggregate(&matches).unwrap();

        // Then
        assert!(summary.time_diffs.is_empty());
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.goal_diffs, vec![0]);
    }

    #[test]
    fn no_matches() {
        let summary = AggregateService::aggregate(&[]).unwrap();
        assert_eq!(summary.games(), 0);
        assert!(summary.goal_diffs.is_empty());
        assert_eq!(summary.player_name, None);
    }

    #[test]
    fn missing_team_is_invalid() {
        // Given
        let matches = [get_match("Kaydop", None, 3, 1, &[])];

        // When
        let result = AggregateService::aggregate(&matches);

        // Then
        assert_eq!(result, Err(AggregateError::InvalidTeam { match_index: 0, player_name: "Kaydop".to_string(), team: None }));
    }

    #[test]
    fn unknown_team_is_invalid() {
        let matches = [get_match("Kaydop", Some(0), 3, 1, &[]), get_match("Kaydop", Some(2), 3, 1, &[])];
        let result = AggregateService::aggregate(&matches);
        assert_eq!(result, Err(AggregateError::InvalidTeam { match_index: 1, player_name: "Kaydop".to_string(), team: Some(2) }));
    }

    #[test]
    fn player_name_comes_from_last_match() {
        // Given
        let matches = [get_match("Kaydop", Some(0), 3, 1, &[]), get_match("Turbopolsa", Some(0), 3, 1, &[])];

        // When
        let summary = AggregateService::aggregate(&matches).unwrap();

        // Then
        assert_eq!(summary.player_name.as_deref(), Some("Turbopolsa"));
        assert_eq!(summary.wins, 2);
    }

    #[test]
    fn strict_player_rejects_other_recorder() {
        // Given
        let matches = [get_match("Kaydop", Some(0), 3, 1, &[]), get_match("Turbopolsa", Some(0), 3, 1, &[])];
        let options = AggregateOptions { strict_player: true };

        // When
        let result = AggregateService::aggregate_with(&matches, &options);

        // Then
        assert_eq!(result, Err(AggregateError::PlayerMismatch {
            match_index: 1,
            expected: "Kaydop".to_string(),
            found: "Turbopolsa".to_string(),
        }));
    }

    #[test]
    fn strict_player_accepts_same_recorder() {
        let matches = [get_match("Kaydop", Some(0), 3, 1, &[]), get_match("Kaydop", Some(1), 3, 1, &[])];
        let summary = AggregateService::aggregate_with(&matches, &AggregateOptions { strict_player: true }).unwrap();
        assert_eq!(summary.games(), 2);
    }

    #[test]
    fn counts_line_up_with_matches() {
        // Given
        let outcomes = [(Some(0), 1, 0), (Some(1), 1, 0), (Some(0), 2, 2), (Some(1), 0, 5), (Some(0), 4, 3)];
        let matches: Vec<MatchRecord> = outcomes.iter()
            .enumerate()
            .map(|(i, (team, t0, t1))| get_match("Kaydop", *team, *t0, *t1, &[i as u32 * 100, i as u32 * 150]))
            .collect();

        // When
        let summary = AggregateService::aggregate(&matches).unwrap();

        // Then
        assert_eq!(summary.games() as usize, matches.len());
        assert_eq!(summary.win_scores.len(), summary.wins as usize);
        assert_eq!(summary.lose_scores.len(), summary.losses as usize);
        assert_eq!(summary.goal_diffs, vec![1, -1, 0, 5, 1]);
        assert!(summary.time_diffs.iter().all(|e| *e >= 0.0));
        assert_eq!(summary.wins, 3);
    }

    #[test]
    fn counters_ignore_match_order() {
        // Given
        let mut matches = vec![
            get_match("Kaydop", Some(0), 3, 1, &[10]),
            get_match("Kaydop", Some(1), 3, 1, &[20]),
        ];
        matches[1].player_stats[1].saves = 9;

        // When
        let forward = AggregateService::aggregate(&matches).unwrap();
        matches.reverse();
        let backward = AggregateService::aggregate(&matches).unwrap();

        // Then
        assert_eq!(forward.saves, backward.saves);
        assert_eq!(forward.wins, backward.wins);
        assert_eq!(forward.goal_diffs, vec![2, -2]);
        assert_eq!(backward.goal_diffs, vec![-2, 2]);
    }

    #[test]
    fn counters_do_not_overflow() {
        // Given
        let mut matches = vec![
            get_match("Kaydop", Some(0), 3, 1, &[]),
            get_match("Kaydop", Some(0), 3, 1, &[]),
        ];
        for record in matches.iter_mut() {
            let player = &mut record.player_stats[1];
            player.saves = u32::MAX;
            player.goals = u32::MAX;
            player.assists = u32::MAX;
            player.shots = u32::MAX;
        }

        // When
        let summary = AggregateService::aggregate(&matches).unwrap();

        // Then
        let expected = u64::from(u32::MAX) * 2;
        assert_eq!(summary.saves, expected);
        assert_eq!(summary.goals, expected);
        assert_eq!(summary.assists, expected);
        assert_eq!(summary.shots, expected);
    }

    #[test]
    fn intervals_start_at_kickoff() {
        let goals = [GoalEvent { frame: 60 }];
        assert_eq!(goal_intervals(&goals, 30.0), vec![2.0]);
        assert!(goal_intervals(&[], 30.0).is_empty());
    }

    #[test]
    fn intervals_never_negative() {
        let goals = [GoalEvent { frame: 600 }, GoalEvent { frame: 300 }];
        assert_eq!(goal_intervals(&goals, 30.0), vec![10.0, 10.0]);
    }
}
