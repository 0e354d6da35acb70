//! CLI argument definitions
//!
//! Every option is opt-in; the bare invocation always prints the banner.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "archive-demo")]
#[command(
    about = "Print a status banner confirming the archive pipeline ran",
    version
)]
pub(crate) struct Cli {
    /// Output as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Enable debug output on stderr
    #[arg(long)]
    pub(crate) debug: bool,

    /// Timezone for the timestamp (e.g., "Asia/Shanghai", "UTC", "America/New_York")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,
}
