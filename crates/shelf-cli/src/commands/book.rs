//! Book command handlers
//!
//! Rejections (duplicate ISBN, unknown ISBN, wrong lending state) are
//! reported and the command still succeeds. Storage failures are returned.

use anyhow::{Context, Result};

use shelf_core::{Catalog, CatalogError, SearchField};

use crate::output::Output;

/// Add a new book
pub fn add(
    catalog: &mut Catalog,
    title: String,
    author: String,
    year: i64,
    isbn: String,
    output: &Output,
) -> Result<()> {
    match catalog.add_book(title, author, year, isbn) {
        Ok(book) => {
            output.book_success("Book added successfully.", book);
            Ok(())
        }
        Err(e) => report(e, output),
    }
}

/// List all books
pub fn list(catalog: &Catalog, output: &Output) -> Result<()> {
    output.print_listing(&catalog.list_books());
    Ok(())
}

/// Search books on one field
pub fn search(
    catalog: &Catalog,
    keyword: String,
    field: SearchField,
    output: &Output,
) -> Result<()> {
    output.print_listing(&catalog.search_books(&keyword, field));
    Ok(())
}

/// Borrow a book
pub fn borrow(catalog: &mut Catalog, isbn: String, output: &Output) -> Result<()> {
    match catalog.borrow_book(&isbn) {
        Ok(book) => {
            output.book_success("Book borrowed successfully.", book);
            Ok(())
        }
        Err(e) => report(e, output),
    }
}

/// Return a borrowed book
pub fn give_back(catalog: &mut Catalog, isbn: String, output: &Output) -> Result<()> {
    match catalog.return_book(&isbn) {
        Ok(book) => {
            output.book_success("Book returned successfully.", book);
            Ok(())
        }
        Err(e) => report(e, output),
    }
}

/// Print a rejection, or hand a storage failure back to the caller
fn report(error: CatalogError, output: &Output) -> Result<()> {
    if error.is_rejection() {
        output.rejection(&error);
        return Ok(());
    }

    if let CatalogError::Storage(ref e) = error {
        if let Some(hint) = e.recovery_suggestion() {
            eprintln!("Hint: {}", hint);
        }
    }

    Err(error).context("Failed to save catalog")
}
