use crate::demo::{run_demo, DemoArgs};
use crate::listing::{run_export, run_list, ExportArgs, ListArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_board::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Job Board",
    about = "Search, filter, and export the job board's listing and admin collections",
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
    /// Print one page of a filtered collection as a table
    List(ListArgs),
    /// Write every record of a filtered collection as CSV
    Export(ExportArgs),
    /// Walk through the job seeker and admin filtering scenarios
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
        Command::List(args) => run_list(args),
        Command::Export(args) => run_export(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["job-board-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_collects_repeated_facets() {
        let cli = Cli::try_parse_from([
            "job-board-api",
            "list",
            "jobs",
            "--search",
            "react",
            "--facet",
            "type=Full-time",
            "--facet",
            "location=San Francisco",
            "--per-page",
            "2",
        ])
        .expect("parses");

        let Some(Command::List(args)) = cli.command else {
            panic!("expected list command");
        };
        let query = args.query();
        assert_eq!(args.collection, "jobs");
        assert_eq!(query.search.as_deref(), Some("react"));
        assert_eq!(query.facets.len(), 2);
        assert_eq!(query.facets[1].1, "San Francisco");
        assert_eq!(query.per_page, Some(2));
    }

    #[test]
    fn malformed_facet_argument_is_a_usage_error() {
        let result = Cli::try_parse_from(["job-board-api", "export", "users", "--facet", "active"]);
        assert!(result.is_err());
    }
}
