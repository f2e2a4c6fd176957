pub mod format;
pub mod layout;
pub mod screens;
pub mod theme;
pub mod widgets;
