use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Cancelled,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Contestant {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub embed_html: Option<String>,
    pub original_url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Match {
    pub match_id: u32,
    pub contestant_a: Contestant,
    /// `None` is a bye
    #[serde(default)]
    pub contestant_b: Option<Contestant>,
    #[serde(default)]
    pub votes_a: u32,
    #[serde(default)]
    pub votes_b: u32,
    #[serde(default)]
    pub winner_id: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Round {
    pub round_index: usize,
    pub round_name: String,
    pub matches: Vec<Match>,
    /// Raw server timestamp, usually without a UTC marker
    pub end_time: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Tournament {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    pub voting_duration_minutes: u32,
    #[serde(default)]
    pub current_round_index: usize,
    #[serde(default)]
    pub status: TournamentStatus,
    #[serde(default)]
    pub contestants: Vec<Contestant>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Tournament {
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.get(self.current_round_index)
    }

    /// Deadline the countdown runs toward; only active tournaments have one
    pub fn current_deadline(&self) -> Option<&str> {
        if self.status != TournamentStatus::Active {
            return None;
        }
        self.current_round().map(|round| round.end_time.as_str())
    }
}

/// Entry of the public tournament list
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TournamentSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub status: TournamentStatus,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TournamentCreate {
    pub name: String,
    pub voting_duration_minutes: u32,
    pub urls: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreatedTournament {
    pub tournament_id: String,
    #[serde(default)]
    pub message: Option<String>,
}
