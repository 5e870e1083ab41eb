//! Pagecraft CLI
//!
//! Resolve component styles, render page descriptions to HTML and manage
//! the persisted theme.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagecraft::theme::detect_color_mode;
use pagecraft::{Density, ThemePreference};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::RenderOptions;

const DEFAULT_STORE: &str = ".pagecraft/storage.json";

#[derive(Parser)]
#[command(name = "pagecraft")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Typed style variants, theming and page blocks", long_about = None)]
struct Cli {
    /// Theme storage file
    #[arg(long, global = true, default_value = DEFAULT_STORE)]
    store: PathBuf,

    /// Theme configuration (YAML: default_theme, default_density, storage_key)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a component's style axes to classes
    Resolve {
        /// Component name, e.g. Heading or CTABlock
        component: String,

        /// Axis values as axis=value
        props: Vec<String>,

        /// Override classes appended last
        #[arg(long)]
        class: Option<String>,
    },

    /// Render a YAML page description to HTML
    Render {
        /// Page description
        input: PathBuf,

        /// Theme for this render (light, dark, system)
        #[arg(long)]
        theme: Option<ThemePreference>,

        /// Density for this render (compact, default, comfortable)
        #[arg(long)]
        density: Option<Density>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change the persisted theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Print the current theme state
    Show,

    /// Set the theme preference
    Set {
        /// light, dark or system
        token: String,
    },

    /// Set the density
    Density {
        /// compact, default or comfortable
        token: String,
    },

    /// Switch light to dark, anything else to light
    Toggle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("PAGECRAFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let mut store = commands::open_store(&cli.store, config, detect_color_mode);

    let out = match cli.command {
        Commands::Resolve {
            component,
            props,
            class,
        } => commands::resolve_component(&component, &props, class.as_deref())?,

        Commands::Render {
            input,
            theme,
            density,
            output,
        } => commands::render_page(
            &input,
            &store,
            RenderOptions {
                theme,
                density,
                output: output.as_deref(),
            },
        )?,

        Commands::Theme { command } => match command.unwrap_or(ThemeCommands::Show) {
            ThemeCommands::Show => commands::theme_show(&store),
            ThemeCommands::Set { token } => commands::theme_set(&mut store, &token)?,
            ThemeCommands::Density { token } => commands::theme_density(&mut store, &token)?,
            ThemeCommands::Toggle => commands::theme_toggle(&mut store),
        },
    };

    println!("{out}");
    Ok(())
}
