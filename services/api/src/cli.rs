use crate::demo::{run_demo, run_shortlist, DemoArgs, ShortlistArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use influencer_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Influencer Match",
    about = "Rank analyzed influencers against a campaign profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank a candidate export against a campaign profile
    Shortlist(ShortlistArgs),
    /// Rank a built-in synthetic roster for stakeholder demos
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Shortlist(args) => run_shortlist(args),
        Command::Demo(args) => run_demo(args),
    }
}
