// Task-Modul: Enthält die Embassy Tasks
//
// Der Strip-Task besitzt Buffer und Driver allein, es gibt keine
// Channels zwischen Tasks.

pub mod strip;

// Re-export Tasks für einfachen Import
pub use strip::strip_task;
