//! Settings editor implementations.

pub mod editor_launcher;

pub use editor_launcher::EditorSettingsLauncher;
