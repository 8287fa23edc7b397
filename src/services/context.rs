use std::rc::Rc;
use crate::platform::Navigator;

/// Final path segment, unchecked: `/bracket/42` -> `42`, `/bracket/` -> ``
pub fn tournament_id_from_path(path: &str) -> String {
    path.rsplit('/').next().unwrap_or_default().to_string()
}

/// Resolves the active tournament from the page location
#[derive(Clone)]
pub struct ContextResolver {
    navigator: Rc<dyn Navigator>,
}

impl ContextResolver {
    pub fn new(navigator: Rc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    pub fn resolve_tournament_id(&self) -> String {
        tournament_id_from_path(&self.navigator.pathname())
    }
}
