/// Composer subprocess adapter
mod composer_cli;

pub use composer_cli::ComposerCli;
