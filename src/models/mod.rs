// Wire models shared with the bracket service

pub mod auth;
pub mod tournament;
pub mod vote;

pub use auth::*;
pub use tournament::*;
pub use vote::*;
