//! Interactive numbered menu
//!
//! The default front end when no subcommand is given. Reads one choice per
//! line, validates prompts locally, and drives the catalog. End of input
//! leaves the loop as if "Exit" had been chosen.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use shelf_core::{Catalog, CatalogError, SearchField};

const MENU: &str = "\nLibrary Book Manager\n\
                    ----------------------\n\
                    1. Add New Book\n\
                    2. List All Books\n\
                    3. Search for Books\n\
                    4. Borrow a Book\n\
                    5. Return a Book\n\
                    6. Exit\n";

/// Whether the loop keeps going after a menu action
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Run the menu until the user exits or input ends
pub fn run<R: BufRead, W: Write>(catalog: &mut Catalog, input: R, output: W) -> Result<()> {
    let mut menu = Menu {
        catalog,
        input,
        output,
    };

    loop {
        writeln!(menu.output, "{}", MENU)?;
        let Some(choice) = menu.prompt("Select an option (1-6): ")? else {
            writeln!(menu.output)?;
            break;
        };
        debug!("Menu choice {:?}", choice);

        let flow = match choice.as_str() {
            "1" => menu.add_book()?,
            "2" => menu.list_books()?,
            "3" => menu.search_books()?,
            "4" => menu.borrow_book()?,
            "5" => menu.return_book()?,
            "6" => {
                writeln!(menu.output, "Exiting Library Book Manager. Goodbye!")?;
                Flow::Exit
            }
            _ => {
                writeln!(menu.output, "Invalid option. Please select 1-6.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            break;
        }
    }

    menu.output.flush()?;
    Ok(())
}

struct Menu<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn add_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt_nonempty("Enter book title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt_nonempty("Enter author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt_year()? else {
            return Ok(Flow::Exit);
        };
        let Some(isbn) = self.prompt_nonempty("Enter ISBN: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self
            .catalog
            .add_book(title, author, year, isbn)
            .map(|_| ());
        self.report(result, "Book added successfully.")?;
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> Result<Flow> {
        let listing = self.catalog.list_books();
        if listing.is_empty() {
            writeln!(self.output, "{}", listing)?;
        } else {
            writeln!(self.output, "\n{}", listing)?;
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> Result<Flow> {
        writeln!(self.output, "Search by: 1. Title  2. Author  3. Year")?;
        let Some(choice) = self.prompt("Choose field (1-3): ")? else {
            return Ok(Flow::Exit);
        };

        let (field, keyword_prompt) = match choice.as_str() {
            "1" => (SearchField::Title, "Enter title keyword: "),
            "2" => (SearchField::Author, "Enter author keyword: "),
            "3" => (SearchField::Year, "Enter year: "),
            _ => {
                writeln!(self.output, "Invalid field.")?;
                return Ok(Flow::Continue);
            }
        };

        let Some(keyword) = self.prompt_nonempty(keyword_prompt)? else {
            return Ok(Flow::Exit);
        };

        let listing = self.catalog.search_books(&keyword, field);
        if listing.is_empty() {
            writeln!(self.output, "{}", listing)?;
        } else {
            writeln!(self.output, "\n{}", listing)?;
        }
        Ok(Flow::Continue)
    }

    fn borrow_book(&mut self) -> Result<Flow> {
        let Some(isbn) = self.prompt_nonempty("Enter ISBN to borrow: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.catalog.borrow_book(&isbn).map(|_| ());
        self.report(result, "Book borrowed successfully.")?;
        Ok(Flow::Continue)
    }

    fn return_book(&mut self) -> Result<Flow> {
        let Some(isbn) = self.prompt_nonempty("Enter ISBN to return: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.catalog.return_book(&isbn).map(|_| ());
        self.report(result, "Book returned successfully.")?;
        Ok(Flow::Continue)
    }

    /// Print the outcome of a mutation; storage failures end the session
    fn report(&mut self, result: Result<(), CatalogError>, success: &str) -> Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "{}", success)?,
            Err(e) if e.is_rejection() => writeln!(self.output, "{}", e)?,
            Err(e) => return Err(e).context("Failed to save catalog"),
        }
        Ok(())
    }

    /// Read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer is not blank
    fn prompt_nonempty(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.prompt(prompt)? {
                Some(value) if value.is_empty() => {
                    writeln!(self.output, "Input cannot be empty.")?;
                }
                other => return Ok(other),
            }
        }
    }

    /// Ask until the answer is all digits
    fn prompt_year(&mut self) -> Result<Option<i64>> {
        loop {
            let Some(value) = self.prompt("Enter publication year: ")? else {
                return Ok(None);
            };
            match parse_year(&value) {
                Some(year) => return Ok(Some(year)),
                None => writeln!(self.output, "Year must be a number.")?,
            }
        }
    }
}

/// A year is one or more ASCII digits that fit in an `i64`
fn parse_year(value: &str) -> Option<i64> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
