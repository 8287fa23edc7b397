use serde::{Deserialize, Serialize};
use crate::utils::VOTE_PATH;

/// One submission attempt; never persisted
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct VoteRequest {
    pub tournament_id: String,
    pub match_id: u32,
    pub option: String,
}

impl VoteRequest {
    pub fn new(tournament_id: impl Into<String>, match_id: u32, option: impl Into<String>) -> Self {
        Self {
            tournament_id: tournament_id.into(),
            match_id,
            option: option.into(),
        }
    }

    /// `/api/vote/vote/{tournament}/{match}/{option}`, segments passed through as-is
    pub fn path(&self) -> String {
        format!("{}/{}/{}/{}", VOTE_PATH, self.tournament_id, self.match_id, self.option)
    }
}

/// Error body of a rejected request
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorDetail {
    /// Detail of a JSON error body; `None` when absent, empty or unparseable
    pub fn from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .and_then(|e| e.detail)
            .filter(|d| !d.trim().is_empty())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_path_keeps_segments_verbatim() {
        assert_eq!(VoteRequest::new("42", 7, "A").path(), "/api/vote/vote/42/7/A");
        assert_eq!(VoteRequest::new("", 3, "b").path(), "/api/vote/vote//3/b");
    }

    #[test]
    fn error_detail_tolerates_bad_bodies() {
        assert_eq!(ErrorDetail::from_body(r#"{"detail":"already voted"}"#), Some("already voted".into()));
        assert_eq!(ErrorDetail::from_body(r#"{"detail":""}"#), None);
        assert_eq!(ErrorDetail::from_body(r#"{"message":"nope"}"#), None);
        assert_eq!(ErrorDetail::from_body("<html>502</html>"), None);
    }
}
