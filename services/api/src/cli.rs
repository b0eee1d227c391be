use crate::demo::{run_demo, DemoArgs};
use crate::infra::{run_crm_export, run_crm_stats, CrmExportArgs, CrmStatsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use studio_crm::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Studio CRM",
    about = "Run the studio lead pipeline: quiz scoring, lead CRM, and admin tooling",
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
    /// Inspect or export the durable lead collection
    Crm {
        #[command(subcommand)]
        command: CrmCommand,
    },
    /// Run an end-to-end CLI demo covering the quiz and the lead lifecycle
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CrmCommand {
    /// Export every stored lead as CSV
    Export(CrmExportArgs),
    /// Print the dashboard statistics for the stored leads
    Stats(CrmStatsArgs),
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
        Command::Crm {
            command: CrmCommand::Export(args),
        } => run_crm_export(args).await,
        Command::Crm {
            command: CrmCommand::Stats(args),
        } => run_crm_stats(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
