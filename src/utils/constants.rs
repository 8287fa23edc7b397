// API paths
pub const LOGIN_PATH: &str = "/api/admin/login";
pub const ADMIN_PATH: &str = "/api/admin";
pub const VOTE_PATH: &str = "/api/vote/vote";
pub const TOURNAMENTS_PATH: &str = "/api/vote/tournaments";
pub const TOURNAMENT_PATH: &str = "/api/vote/tournament";

/// Where logout and missing-session redirects land
pub const ROOT_PATH: &str = "/";

// User-facing messages
pub const MSG_PASSWORD_PROMPT: &str = "Enter Site Admin Password:";
pub const MSG_LOGGED_IN: &str = "Logged in successfully!";
pub const MSG_WRONG_PASSWORD: &str = "Wrong password";
pub const MSG_LOGIN_ERROR: &str = "Login error";
pub const MSG_MUST_LOG_IN: &str = "You must be logged in!";
pub const MSG_SESSION_EXPIRED: &str = "Session expired. Please login again.";
pub const MSG_VOTING_FAILED: &str = "Voting failed";
pub const MSG_ROUND_ENDED: &str = "Round Ended! Refreshing...";
pub const MSG_BRACKET_FAILED: &str = "Could not load the bracket";
pub const MSG_ADMIN_FAILED: &str = "Request failed";
pub const MSG_CONFIRM_DELETE: &str = "Delete this tournament? This cannot be undone.";
