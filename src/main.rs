use anyhow::Result;
use clap::Parser;
use imovel_showcase::catalog;
use imovel_showcase::cli::{Cli, Commands};
use imovel_showcase::config::ShowcaseConfig;
use imovel_showcase::display;
use imovel_showcase::filter::{filter_properties, LocationInput};
use imovel_showcase::models::Catalog;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = ShowcaseConfig::load(&cli.config)?;
    if let Some(catalog) = &cli.catalog {
        config.catalog = catalog.clone();
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!("Using config {:?}", config);

    match cli.command {
        Commands::Suggest { partial } => {
            let labels = config.location_labels();
            let mut input = LocationInput::new();
            input.on_input(&partial, &labels);
            if input.is_dropdown_visible() {
                for label in input.suggestions() {
                    println!("{}", label);
                }
            } else {
                info!("No known location matches {:?}", partial);
            }
        }
        Commands::List(args) => {
            let catalog = load_catalog(&config).await?;
            let criteria = args.to_form().to_criteria();
            let matches = filter_properties(&catalog.records, &criteria);
            info!("🏠 {} of {} properties match", matches.len(), catalog.len());

            if args.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                println!("{}", display::render_listing(&matches));
            }
        }
        Commands::Show { id, view } => {
            let catalog = load_catalog(&config).await?;
            match display::find_property(&catalog.records, id) {
                Some(property) => println!("{}", display::render_detail(property, view)),
                None => println!("{}", display::NOT_FOUND_MESSAGE),
            }
        }
    }

    Ok(())
}

async fn load_catalog(config: &ShowcaseConfig) -> Result<Catalog> {
    let provider = catalog::provider_for(&config.catalog, config.request_timeout())?;
    info!("Loading catalog from {} source", provider.source_name());
    let catalog = provider.load().await?;
    debug!("Catalog loaded at {}", catalog.loaded_at);
    Ok(catalog)
}
