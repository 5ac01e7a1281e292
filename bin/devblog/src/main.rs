//! DevBlog CLI
//!
//! Browse the article catalog, validate site content and exercise the
//! colour-mode preference from the terminal.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for DevBlog.
#[derive(Parser)]
#[command(
    name = "devblog",
    version,
    about = "Browse and validate the DevBlog article catalog"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "devblog.toml")]
    config: std::path::PathBuf,

    /// Article catalog to use instead of the bundled one
    #[arg(long, global = true)]
    catalog: Option<std::path::PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// OS colour scheme to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Scheme {
    Dark,
    Light,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// List articles, newest first
    List {
        /// Only articles with this tag (case-insensitive)
        #[arg(short, long, default_value = "")]
        tag: String,
        /// Only articles whose title, summary or tags contain this text
        #[arg(short, long, default_value = "")]
        search: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single article
    Show {
        /// Article slug
        slug: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List distinct tags
    Tags,
    /// List featured articles
    Featured {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Resolve the colour-mode preference
    Theme {
        /// Flip the mode and remember the choice
        #[arg(long)]
        toggle: bool,
        /// OS colour scheme; without it the OS preference is unavailable
        #[arg(long, value_enum)]
        system: Option<Scheme>,
        /// File holding the persisted preference
        #[arg(long, default_value = ".devblog/preferences.json")]
        state: std::path::PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    devblog::init_tracing(cli.verbose);

    let catalog = cli.catalog.as_deref();
    let load_site = || devblog::load_site(&cli.config, catalog);

    match cli.command {
        Commands::List { tag, search, json } => {
            devblog::cmd::list::run(&load_site()?, &tag, &search, json)?;
        }
        Commands::Show { slug, json } => {
            devblog::cmd::show::run(&load_site()?, &slug, json)?;
        }
        Commands::Tags => devblog::cmd::list::tags(&load_site()?)?,
        Commands::Featured { json } => devblog::cmd::list::featured(&load_site()?, json)?,
        Commands::Check { strict } => {
            devblog::cmd::check::run(&cli.config, catalog, strict)?;
        }
        Commands::Theme {
            toggle,
            system,
            state,
        } => {
            let system = system.map(|s| s == Scheme::Dark);
            devblog::cmd::theme::run(&load_site()?.config, &state, toggle, system)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_list_command_parsing() {
        let args = ["devblog", "list", "--tag", "React", "--search", "hooks"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("devblog.toml"));
        assert_eq!(cli.verbose, 0);
        assert!(cli.catalog.is_none());

        match cli.command {
            Commands::List { tag, search, json } => {
                assert_eq!(tag, "React");
                assert_eq!(search, "hooks");
                assert!(!json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_list_defaults_to_no_filter() {
        let cli = Cli::parse_from(["devblog", "list", "--json"]);

        match cli.command {
            Commands::List { tag, search, json } => {
                assert!(tag.is_empty());
                assert!(search.is_empty());
                assert!(json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_show_command_parsing() {
        let cli = Cli::parse_from(["devblog", "show", "modern-css-grid-flexbox"]);

        match cli.command {
            Commands::Show { slug, json } => {
                assert_eq!(slug, "modern-css-grid-flexbox");
                assert!(!json);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_show_requires_slug() {
        assert!(Cli::try_parse_from(["devblog", "show"]).is_err());
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["devblog", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_theme_command_parsing() {
        let args = [
            "devblog",
            "theme",
            "--toggle",
            "--system",
            "dark",
            "--state",
            "prefs.json",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Theme {
                toggle,
                system,
                state,
            } => {
                assert!(toggle);
                assert_eq!(system, Some(Scheme::Dark));
                assert_eq!(state, std::path::PathBuf::from("prefs.json"));
            }
            _ => panic!("Expected Theme command"),
        }
    }

    #[test]
    fn test_cli_theme_defaults_to_headless() {
        let cli = Cli::parse_from(["devblog", "theme"]);

        match cli.command {
            Commands::Theme { toggle, system, .. } => {
                assert!(!toggle);
                assert!(system.is_none());
            }
            _ => panic!("Expected Theme command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_scheme() {
        assert!(Cli::try_parse_from(["devblog", "theme", "--system", "sepia"]).is_err());
    }

    #[test]
    fn test_cli_verbosity_and_catalog_flags() {
        let args = ["devblog", "-vv", "tags", "--catalog", "posts.toml"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.catalog, Some(std::path::PathBuf::from("posts.toml")));
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["devblog", "--config", "site.toml", "featured"]);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
