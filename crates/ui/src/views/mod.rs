mod name_entry;
mod quiz;
mod quiz_root;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use name_entry::NameEntryView;
pub use quiz::QuizView;
pub use quiz_root::QuizRoot;
pub use state::{ViewError, ViewState, view_state_from_resource};
