use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use figuras::api::{CatalogClient, UpdateMode};
use figuras::catalog::{parse_price, Category, Figure, FigureDraft, FigureId, FigurePatch};
use figuras::config::Config;
use figuras::logging::{init_cli_tracing, init_tui_tracing};
use figuras::ui::render::format_price;
use figuras::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "figuras", version, about = "Saint Seiya figure catalog client")]
struct Cli {
    /// Config file (default: ~/.config/figuras/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the collection base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override the API key
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Interactive catalog (default)
    Tui,
    /// Print figures, optionally for one category
    List {
        #[arg(long, value_parser = parse_category)]
        categoria: Option<Category>,
    },
    /// Print the number of figures per category
    Stats,
    /// Create a figure
    Add {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        descripcion: Option<String>,
        #[arg(long)]
        precio: Option<String>,
        #[arg(long, value_parser = parse_category, default_value = "myth cloth")]
        categoria: Category,
        #[arg(long)]
        imagen: Option<String>,
        #[arg(long)]
        adquirida: bool,
    },
    /// Flip the acquired flag of a figure
    Toggle { id: String },
    /// Delete a figure
    Delete { id: String },
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::from_key(raw).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        format!("unknown category '{}' (expected one of: {})", raw, known.join(", "))
    })
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    config.apply_env();
    config.apply_overrides(cli.base_url.clone(), cli.api_key.clone());
    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(CliCommand::Tui));
    if interactive {
        init_tui_tracing();
    } else {
        init_cli_tracing();
    }

    let config = load_config(&cli)?;
    let client = CatalogClient::new(config.api.clone());

    match cli.command {
        None | Some(CliCommand::Tui) => {
            runtime::run(client, config.ui).await?;
        }
        Some(CliCommand::List { categoria }) => {
            let figures = match categoria {
                Some(category) => client.list_by_category(category).await,
                None => client.list_all().await,
            }
            .map_err(|err| anyhow!(err.user_message()))?;
            if figures.is_empty() {
                println!("No hay figuras");
            }
            for figure in &figures {
                print_figure(figure);
            }
        }
        Some(CliCommand::Stats) => {
            let stats = client
                .get_stats()
                .await
                .map_err(|err| anyhow!(err.user_message()))?;
            for category in Category::ALL {
                println!("{}: {} figuras", category.label(), stats.count(category));
            }
        }
        Some(CliCommand::Add {
            nombre,
            descripcion,
            precio,
            categoria,
            imagen,
            adquirida,
        }) => {
            let price = match precio {
                Some(raw) => parse_price(&raw).map_err(|err| anyhow!(err.user_message()))?,
                None => None,
            };
            let draft = FigureDraft {
                description: descripcion,
                price,
                image: imagen,
                acquired: adquirida,
                ..FigureDraft::new(nombre, categoria)
            };
            let figure = client
                .create(&draft)
                .await
                .map_err(|err| anyhow!(err.user_message()))?;
            print_figure(&figure);
        }
        Some(CliCommand::Toggle { id }) => {
            let id = FigureId::new(id);
            let current = client
                .list_all()
                .await
                .map_err(|err| anyhow!(err.user_message()))?
                .into_iter()
                .find(|figure| figure.id == id)
                .with_context(|| format!("Figura {} no encontrada", id))?;
            let updated = client
                .update(&id, &FigurePatch::acquired(!current.acquired), UpdateMode::Merge)
                .await
                .map_err(|err| anyhow!(err.user_message()))?;
            print_figure(&updated);
        }
        Some(CliCommand::Delete { id }) => {
            let id = FigureId::new(id);
            client
                .remove(&id)
                .await
                .map_err(|err| anyhow!(err.user_message()))?;
            println!("Figura {} eliminada", id);
        }
    }

    Ok(())
}

fn print_figure(figure: &Figure) {
    let status = if figure.acquired {
        "Adquirida"
    } else {
        "Pendiente"
    };
    println!(
        "{}  {}  [{}]  Precio: {}  {}",
        figure.id,
        figure.name,
        figure.category.key(),
        format_price(figure.price),
        status
    );
}
