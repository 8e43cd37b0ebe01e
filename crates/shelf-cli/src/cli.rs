use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shelf_core::SearchField;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "shelf - Personal library catalog", long_about = None)]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,
    /// Add a new book
    Add {
        /// Book title
        #[arg(value_parser = non_empty)]
        title: String,
        /// Author name
        #[arg(value_parser = non_empty)]
        author: String,
        /// Publication year
        year: i64,
        /// ISBN (must be unique in the catalog)
        #[arg(value_parser = non_empty)]
        isbn: String,
    },
    /// List all books
    #[command(alias = "ls")]
    List,
    /// Search books by title, author or year
    Search {
        /// Text to look for (case-insensitive)
        #[arg(value_parser = non_empty)]
        keyword: String,
        /// Field to search
        #[arg(short, long, default_value = "title", value_parser = parse_field)]
        field: SearchField,
    },
    /// Borrow a book
    Borrow {
        /// ISBN of the book
        #[arg(value_parser = non_empty)]
        isbn: String,
    },
    /// Return a borrowed book
    Return {
        /// ISBN of the book
        #[arg(value_parser = non_empty)]
        isbn: String,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (storage_path, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

/// Trimmed text that must not be blank
fn non_empty(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Err("Input cannot be empty.".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_field(s: &str) -> Result<SearchField, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args() {
        let cli = Cli::try_parse_from(vec!["shelf"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_add_book() {
        let cli =
            Cli::try_parse_from(vec!["shelf", "add", "Dune", "Frank Herbert", "1965", "111"])
                .unwrap();

        match cli.command {
            Some(Commands::Add {
                title,
                author,
                year,
                isbn,
            }) => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "Frank Herbert");
                assert_eq!(year, 1965);
                assert_eq!(isbn, "111");
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_add_rejects_non_numeric_year() {
        let result = Cli::try_parse_from(vec!["shelf", "add", "Dune", "Herbert", "1965a", "111"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let result = Cli::try_parse_from(vec!["shelf", "add", "  ", "Herbert", "1965", "111"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_alias() {
        let cli = Cli::try_parse_from(vec!["shelf", "ls"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_search_defaults_to_title() {
        let cli = Cli::try_parse_from(vec!["shelf", "search", "dune"]).unwrap();

        match cli.command {
            Some(Commands::Search { keyword, field }) => {
                assert_eq!(keyword, "dune");
                assert_eq!(field, SearchField::Title);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_with_field() {
        let cli =
            Cli::try_parse_from(vec!["shelf", "search", "196", "--field", "year"]).unwrap();

        match cli.command {
            Some(Commands::Search { field, .. }) => assert_eq!(field, SearchField::Year),
            _ => panic!("Expected Search command"),
        }

        let result = Cli::try_parse_from(vec!["shelf", "search", "x", "--field", "isbn"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_borrow_and_return() {
        let cli = Cli::try_parse_from(vec!["shelf", "borrow", "111"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Borrow { ref isbn }) if isbn == "111"));

        let cli = Cli::try_parse_from(vec!["shelf", "return", "111"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Return { ref isbn }) if isbn == "111"));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(vec![
            "shelf",
            "list",
            "--json",
            "--file",
            "/tmp/books.json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/books.json")));
    }

    #[test]
    fn test_config_set() {
        let cli = Cli::try_parse_from(vec![
            "shelf",
            "config",
            "set",
            "storage_path",
            "/data/books.json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Config {
                command: Some(ConfigCommands::Set { key, value }),
            }) => {
                assert_eq!(key, "storage_path");
                assert_eq!(value, "/data/books.json");
            }
            _ => panic!("Expected Config Set command"),
        }
    }
}
