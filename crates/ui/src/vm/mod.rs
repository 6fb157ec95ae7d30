mod quiz_vm;

pub use quiz_vm::{NameEntryVm, QuizScreenVm, ResultVm, map_name_entry, map_quiz_screen};
