//! ASIC Settings CLI
//!
//! Resolves the backend settings the same way the server does and prints
//! them, runs the deployment checks, or dumps the admin navigation.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use asic_env::load_environment;
use asic_hex::{SettingsResolver, deployment_warnings};
use asic_types::{Settings, Sidebar};

#[derive(Parser)]
#[command(name = "asic-settings")]
#[command(author, version, about = "Inspect the ASIC backend settings", long_about = None)]
struct Cli {
    /// Environment file layered under the process environment
    #[arg(long, global = true, env = "ASIC_ENV_FILE", default_value = ".env")]
    env_file: PathBuf,

    /// Project base directory (defaults to the current directory)
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved settings with secrets redacted
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve the settings and report problems
    Check {
        /// Also run the production deployment checks
        #[arg(long)]
        deploy: bool,
    },
    /// Print the admin sidebar navigation
    Nav,
}

fn resolve(env_file: &Path, base_dir: Option<PathBuf>) -> Result<Settings> {
    let base_dir = match base_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let env_file = if env_file.is_relative() {
        base_dir.join(env_file)
    } else {
        env_file.to_path_buf()
    };

    let env = load_environment(&env_file)?;
    Ok(SettingsResolver::new(&env, base_dir)
        .with_platform(env.process())
        .resolve()?)
}

fn render_summary(settings: &Settings) -> String {
    let mut out = String::new();
    let hosts = settings
        .allowed_hosts
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let origins = settings
        .cors
        .allowed_origins
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(out, "debug:            {}", settings.debug);
    let _ = writeln!(out, "secret_key:       {}", settings.secret_key);
    let _ = writeln!(out, "allowed_hosts:    [{}]", hosts);
    let _ = writeln!(
        out,
        "database:         {} ({:?}, conn_max_age={}s)",
        settings.database.redacted_location(),
        settings.database.source,
        settings.database.conn_max_age.as_secs()
    );
    let _ = writeln!(out, "cors_origins:     [{}]", origins);
    let _ = writeln!(out, "ssl_redirect:     {}", settings.security.ssl_redirect);
    let _ = writeln!(out, "secure_cookies:   {}", settings.security.session_cookie_secure);
    let _ = writeln!(
        out,
        "static:           {} -> {}",
        settings.files.static_url,
        settings.files.static_root.display()
    );
    let _ = writeln!(
        out,
        "media:            {} -> {}",
        settings.files.media_url,
        settings.files.media_root.display()
    );
    let _ = writeln!(
        out,
        "i18n:             {} / {}",
        settings.i18n.language_code, settings.i18n.time_zone
    );
    out
}

fn render_nav(sidebar: &Sidebar) -> String {
    let mut out = String::new();
    for group in &sidebar.navigation {
        let marker = if group.collapsible { "+" } else { "-" };
        let _ = writeln!(out, "{} {}", marker, group.title);
        for item in &group.items {
            let _ = writeln!(out, "    {:<20} {:<16} {}", item.title, item.icon, item.link);
        }
    }
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = resolve(&cli.env_file, cli.base_dir)?;

    match cli.command {
        Commands::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                print!("{}", render_summary(&settings));
            }
        }

        Commands::Check { deploy } => {
            println!("✓ Settings resolved");
            if deploy {
                let warnings = deployment_warnings(&settings);
                if warnings.is_empty() {
                    println!("✓ No deployment issues");
                } else {
                    for warning in &warnings {
                        println!("✗ {}", warning);
                    }
                    println!("{} deployment issue(s) found", warnings.len());
                    std::process::exit(1);
                }
            }
        }

        Commands::Nav => {
            print!("{}", render_nav(&settings.admin.sidebar));
        }
    }

    Ok(())
}
