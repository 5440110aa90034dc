use crate::display::ViewMode;
use crate::filter::form::{FilterForm, ANY};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "imovel-showcase")]
#[command(about = "Browse and filter the real-estate showcase catalog")]
#[command(version)]
pub struct Cli {
    /// YAML config file
    #[arg(short, long, default_value = "showcase.yaml")]
    pub config: PathBuf,

    /// Catalog source: "mock", a JSON file, or an http(s) URL
    #[arg(long)]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List properties matching the filters
    List(FilterArgs),

    /// Suggest known locations for a partial query
    Suggest {
        partial: String,
    },

    /// Show one property in detail
    Show {
        id: u32,

        /// Media view to render
        #[arg(long, value_enum, default_value_t = ViewMode::Gallery)]
        view: ViewMode,
    },
}

/// Raw filter fields, exactly as a user would type them
#[derive(Debug, Args)]
pub struct FilterArgs {
    #[arg(long, default_value = "")]
    pub min_price: String,

    #[arg(long, default_value = "")]
    pub max_price: String,

    /// Minimum bedrooms, or "any"
    #[arg(long, default_value = ANY)]
    pub bedrooms: String,

    /// Minimum bathrooms, or "any"
    #[arg(long, default_value = ANY)]
    pub bathrooms: String,

    /// "yes", "no" or "any"
    #[arg(long, default_value = ANY)]
    pub garage: String,

    #[arg(long, default_value = "")]
    pub location: String,

    /// Print matches as JSON instead of cards
    #[arg(long)]
    pub json: bool,
}

impl FilterArgs {
    pub fn to_form(&self) -> FilterForm {
        FilterForm {
            min_price: self.min_price.clone(),
            max_price: self.max_price.clone(),
            bedrooms: self.bedrooms.clone(),
            bathrooms: self.bathrooms.clone(),
            garage: self.garage.clone(),
            location: self.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCriteria;

    #[test]
    fn list_without_flags_is_unconstrained() {
        let cli = Cli::parse_from(["imovel-showcase", "list"]);
        match cli.command {
            Commands::List(args) => assert!(args.to_form().to_criteria().is_unconstrained()),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn list_flags_flow_into_criteria() {
        let cli = Cli::parse_from([
            "imovel-showcase",
            "--catalog",
            "mock",
            "list",
            "--bedrooms",
            "3",
            "--garage",
            "yes",
            "--location",
            "rio",
            "--min-price",
            "oops",
        ]);
        assert_eq!(cli.catalog.as_deref(), Some("mock"));
        match cli.command {
            Commands::List(args) => assert_eq!(
                args.to_form().to_criteria(),
                FilterCriteria::new().min_bedrooms(3).has_garage(true).location("rio")
            ),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn show_parses_view_mode() {
        let cli = Cli::parse_from(["imovel-showcase", "show", "7", "--view", "panorama"]);
        match cli.command {
            Commands::Show { id, view } => {
                assert_eq!(id, 7);
                assert_eq!(view, ViewMode::Panorama);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
