pub mod composer;
pub mod console;
pub mod filesystem;
pub mod formatters;
