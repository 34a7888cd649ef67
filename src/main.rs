//! Attendance portal automation CLI
//!
//! Automates routine interactions with an attendance web portal (login,
//! logout, clock-in/out, daily activity log) by driving a headless browser.

use attend::{cli, common, runner};
use clap::Parser;

#[derive(Parser)]
#[command(name = "attend", about = "Attendance portal automation")]
#[command(version, long_about = None)]
struct Cli {
    /// Action to run
    #[arg(long, value_enum, default_value_t = cli::Action::DryRun)]
    action: cli::Action,
}

#[tokio::main]
async fn main() {
    common::logging::init();

    let cli = Cli::parse();

    if let Err(e) = runner::run(cli.action).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
