use clap::Parser;

/// Analyze Composer dependencies and render a Markdown report
#[derive(Parser, Debug)]
#[command(name = "composer-report")]
#[command(version)]
#[command(
    about = "Report installed Composer packages, licenses, available updates, and security advisories",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory to run composer in (defaults to the
    /// current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, the report goes to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Composer executable to invoke
    #[arg(long, default_value = "composer")]
    pub composer: String,

    /// Fail instead of producing an empty report when the installed-package
    /// listing cannot be obtained
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
