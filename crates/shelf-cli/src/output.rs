//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use shelf_core::{format_line, Book, BookListing, CatalogError};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a listing or search report
    pub fn print_listing(&self, listing: &BookListing<'_>) {
        if let Some(text) = self.listing_text(listing) {
            println!("{}", text);
        }
    }

    fn listing_text(&self, listing: &BookListing<'_>) -> Option<String> {
        match self.format {
            OutputFormat::Human => Some(listing.to_string()),
            OutputFormat::Json => Some(to_json(&listing.to_books())),
            OutputFormat::Quiet => {
                if listing.is_empty() {
                    None
                } else {
                    let isbns: Vec<&str> =
                        listing.books().iter().map(|b| b.isbn.as_str()).collect();
                    Some(isbns.join("\n"))
                }
            }
        }
    }

    /// Print the outcome of a successful change to one book
    pub fn book_success(&self, message: &str, book: &Book) {
        println!("{}", self.book_success_text(message, book));
    }

    fn book_success_text(&self, message: &str, book: &Book) -> String {
        match self.format {
            OutputFormat::Human => format!("{}\n{}", message, format_line(1, book)),
            OutputFormat::Json => serde_json::json!({
                "status": "success",
                "message": message,
                "book": book,
            })
            .to_string(),
            OutputFormat::Quiet => book.isbn.clone(),
        }
    }

    /// Report an operation the catalog refused
    ///
    /// Quiet mode still reports on stderr so scripts can see why nothing
    /// happened.
    pub fn rejection(&self, error: &CatalogError) {
        match self.format {
            OutputFormat::Human => println!("{}", error),
            OutputFormat::Json => println!("{}", rejection_json(error)),
            OutputFormat::Quiet => eprintln!("{}", error),
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Machine-readable name of a rejection
fn rejection_kind(error: &CatalogError) -> &'static str {
    match error {
        CatalogError::DuplicateIsbn { .. } => "duplicate_isbn",
        CatalogError::NotFound { .. } => "not_found",
        CatalogError::AlreadyBorrowed { .. } => "already_borrowed",
        CatalogError::NotBorrowed { .. } => "not_borrowed",
        CatalogError::Storage(_) => "storage",
    }
}

fn rejection_json(error: &CatalogError) -> serde_json::Value {
    serde_json::json!({
        "status": "rejected",
        "error": rejection_kind(error),
        "message": error.to_string(),
    })
}

fn to_json(books: &[Book]) -> String {
    serde_json::to_string_pretty(books).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{Catalog, Config, SearchField};
    use tempfile::TempDir;

    fn catalog_with_books(temp_dir: &TempDir) -> Catalog {
        let mut catalog = Catalog::open(&Config::with_storage_path(
            temp_dir.path().join("books.json"),
        ));
        catalog
            .add_book("Dune", "Frank Herbert", 1965, "111")
            .unwrap();
        catalog.add_book("Emma", "Jane Austen", 1815, "222").unwrap();
        catalog
    }

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_human_listing() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = catalog_with_books(&temp_dir);
        let output = Output::new(OutputFormat::Human);

        let text = output.listing_text(&catalog.list_books()).unwrap();
        assert!(text.starts_with("Library Collection:\n1. Dune"));
    }

    #[test]
    fn test_json_listing() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = catalog_with_books(&temp_dir);
        let output = Output::new(OutputFormat::Json);

        let text = output
            .listing_text(&catalog.search_books("austen", SearchField::Author))
            .unwrap();
        let parsed: Vec<Book> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].isbn, "222");
    }

    #[test]
    fn test_quiet_listing() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = catalog_with_books(&temp_dir);
        let output = Output::new(OutputFormat::Quiet);

        assert_eq!(
            output.listing_text(&catalog.list_books()).unwrap(),
            "111\n222"
        );
        assert!(output
            .listing_text(&catalog.search_books("zzz", SearchField::Title))
            .is_none());
    }

    #[test]
    fn test_book_success_text() {
        let book = Book::new("Dune", "Frank Herbert", 1965, "111");

        let human = Output::new(OutputFormat::Human)
            .book_success_text("Book added successfully.", &book);
        assert_eq!(
            human,
            "Book added successfully.\n1. Dune | Frank Herbert | 1965 | ISBN: 111 | Available"
        );

        let json = Output::new(OutputFormat::Json)
            .book_success_text("Book added successfully.", &book);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["book"]["isbn"], "111");
    }

    #[test]
    fn test_rejection_json() {
        let err = CatalogError::AlreadyBorrowed {
            isbn: "111".to_string(),
        };

        let value = rejection_json(&err);
        assert_eq!(value["status"], "rejected");
        assert_eq!(value["error"], "already_borrowed");
        assert_eq!(value["message"], "This book is already borrowed.");
    }
}
