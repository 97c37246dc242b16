use clap::{Parser, Subcommand};
use bazaar_app_core::RedbSelectionRepo;
use bazaar_cli::commands;
use bazaar_core::RouteRegistry;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the navigation registry
    Routes {
        #[command(subcommand)]
        command: RouteCommands,
    },
    /// Inspect or delete the persisted order selection
    Selection {
        #[command(subcommand)]
        command: SelectionCommands,
    },
    /// Fetch the dashboard snapshot and print the headline numbers
    Snapshot {
        #[arg(long, env = bazaar_config::API_URL_ENV)]
        api_url: Option<String>,
        #[arg(long, env = bazaar_config::API_TOKEN_ENV, hide_env_values = true)]
        token: Option<String>,
    },
}

#[derive(Subcommand)]
enum RouteCommands {
    List,
    Search { query: String },
}

#[derive(Subcommand)]
enum SelectionCommands {
    Show,
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let registry = RouteRegistry::default();

    match cli.command {
        Commands::Routes { command } => match command {
            RouteCommands::List => print!("{}", commands::render_route_list(&registry)),
            RouteCommands::Search { query } => {
                print!("{}", commands::render_search(&registry, &query))
            }
        },
        Commands::Selection { command } => {
            let repo = RedbSelectionRepo::open_default()?;
            let out = match command {
                SelectionCommands::Show => commands::cmd_selection_show(&repo)?,
                SelectionCommands::Clear => commands::cmd_selection_clear(&repo)?,
            };
            print!("{out}");
        }
        Commands::Snapshot { api_url, token } => {
            let url = api_url.unwrap_or_else(|| bazaar_config::DEFAULT_API_BASE_URL.to_owned());
            println!(":: Fetching dashboard from {url}");
            let snapshot = commands::cmd_snapshot(url, token).await?;
            print!("{}", commands::render_snapshot(&snapshot));
        }
    }

    Ok(())
}
