use bluebonnets_points::api::users::filter as user_filter;
use bluebonnets_points::api::{ApiError, PointsApi};
use bluebonnets_points::config::{ClientConfig, ConfigError};
use bluebonnets_points::view::{PointCategorySelectView, SelectElement};
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "points-cli", about = "Bluebonnets points API client")]
struct Cli {
    /// Backend origin; falls back to `POINTS_BASE_URL`, then the default.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List users, optionally filtered by status.
    Users {
        #[arg(long, default_value = user_filter::BOTH)]
        filter: String,
    },
    /// List events, optionally restricted to one category.
    Events {
        #[arg(long)]
        category: Option<String>,
    },
    /// Render the point-category select as HTML.
    Categories {
        #[arg(long, default_value = "")]
        default_selected: String,
        #[arg(long, default_value = "point-category")]
        id: String,
    },
    /// Show one point category.
    Category { name: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config.base_url = ClientConfig::new(base_url)?.base_url;
    }
    tracing::info!(base_url = %config.base_url, "points client configured");

    let api = PointsApi::from_config(&config)?;
    api.init();

    match cli.command {
        Command::Users { filter } => print_json(&api.users.fetch_users(&filter).await?),
        Command::Events { category } => {
            let events = match category.as_deref() {
                Some(category) => api.events.fetch_events_in_category(category).await?,
                None => api.events.fetch_events().await?,
            };
            print_json(&events)
        }
        Command::Categories { default_selected, id } => {
            let categories = api.point_categories.fetch_point_categories().await?;
            let mut view = PointCategorySelectView::init(SelectElement::new().attr("id", &id), default_selected);
            view.render(&categories);
            println!("{}", view.element().to_html());
            Ok(())
        }
        Command::Category { name } => {
            let detail = api.point_categories.fetch_point_category(&name).await?;
            print_json(&serde_json::to_value(detail)?)
        }
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
