//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Slide Prompt Studio";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "slideprompt";
