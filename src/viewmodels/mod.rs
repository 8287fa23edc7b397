pub mod bracket_viewmodel;

pub use bracket_viewmodel::BracketViewModel;
