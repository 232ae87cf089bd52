//! Interactive menu loop over an explicit reader/writer pair.
//!
//! The loop owns the catalog for the process lifetime. All parsing of user
//! input happens here; the catalog never sees raw text. Taking `BufRead`
//! and `Write` as parameters (instead of touching stdin/stdout directly)
//! keeps the loop scriptable from tests.

use anyhow::Result;
use shelfmark_core::catalog::{Catalog, Record, RecordId};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::table::render_records;

const BANNER: &str = "-------- Library Management System --------";

pub struct Menu<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Run the menu loop until the user picks Exit or input reaches EOF.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_int("Enter your choice: ")? else {
                debug!("stdin closed, leaving menu loop");
                break;
            };
            match choice {
                1 => self.add_book()?,
                2 => self.remove_book()?,
                3 => self.search_by_title()?,
                4 => self.search_by_author()?,
                5 => self.search_by_year()?,
                6 => self.search_by_genre()?,
                7 => self.display_all()?,
                8 => {
                    writeln!(self.output, "Exiting Library Management System...")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "1. Add Book")?;
        writeln!(self.output, "2. Remove Book")?;
        writeln!(self.output, "3. Search by Title")?;
        writeln!(self.output, "4. Search by Author")?;
        writeln!(self.output, "5. Search by Year")?;
        writeln!(self.output, "6. Search by Genre")?;
        writeln!(self.output, "7. Display All Books")?;
        writeln!(self.output, "8. Exit")?;
        Ok(())
    }

    /// Prompt and read one line. `None` means EOF.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt until a whole number arrives. `None` means EOF.
    ///
    /// Malformed numeric input is handled here so the catalog never sees
    /// it; the original program would have crashed instead.
    fn read_int(&mut self, prompt: &str) -> Result<Option<i32>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    fn add_book(&mut self) -> Result<()> {
        let Some(title) = self.read_line("Enter book title: ")? else {
            return Ok(());
        };
        let Some(author) = self.read_line("Enter book author: ")? else {
            return Ok(());
        };
        let Some(year) = self.read_int("Enter publication year: ")? else {
            return Ok(());
        };
        let Some(genre) = self.read_line("Enter the Genre: ")? else {
            return Ok(());
        };

        match self.catalog.add(Record::new(title, author, year, genre)) {
            Ok(_) => writeln!(self.output, "Book added successfully!")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn remove_book(&mut self) -> Result<()> {
        let Some(title) = self.read_line("Enter the title of the book to remove: ")? else {
            return Ok(());
        };
        let matches: Vec<RecordId> = self
            .catalog
            .search_by_title(&title)
            .iter()
            .filter_map(|r| r.id())
            .collect();
        if matches.is_empty() {
            writeln!(self.output, "No books found with the given title.")?;
            return Ok(());
        }

        writeln!(self.output, "Matching books found:")?;
        for (index, id) in matches.iter().enumerate() {
            if let Some(record) = self.catalog.get(*id) {
                writeln!(self.output, "{index}. {record}")?;
            }
        }
        let Some(index) = self.read_int("Enter the index of the book to remove: ")? else {
            return Ok(());
        };
        match usize::try_from(index).ok().and_then(|i| matches.get(i)) {
            Some(id) => {
                self.catalog.remove(*id);
                writeln!(self.output, "Book removed successfully!")?;
            }
            None => writeln!(self.output, "Invalid index!")?,
        }
        Ok(())
    }

    fn search_by_title(&mut self) -> Result<()> {
        let Some(title) = self.read_line("Enter the title to search: ")? else {
            return Ok(());
        };
        let results = clone_all(self.catalog.search_by_title(&title));
        self.report_matches(&results, "No books found with the given title.")
    }

    fn search_by_author(&mut self) -> Result<()> {
        let Some(author) = self.read_line("Enter the author to search: ")? else {
            return Ok(());
        };
        let results = clone_all(self.catalog.search_by_author(&author));
        self.report_matches(&results, "No books found by the given author.")
    }

    fn search_by_year(&mut self) -> Result<()> {
        let Some(year) = self.read_int("Enter the year to search: ")? else {
            return Ok(());
        };
        let results = clone_all(self.catalog.search_by_year(year));
        self.report_matches(&results, "No books found published in the given year.")
    }

    fn search_by_genre(&mut self) -> Result<()> {
        let Some(genre) = self.read_line("Enter the Genre of the book to be searched: ")? else {
            return Ok(());
        };
        let results = clone_all(self.catalog.search_by_genre(&genre));
        self.report_matches(&results, "No books found published in the given genre.")
    }

    fn report_matches(&mut self, records: &[Record], none_message: &str) -> Result<()> {
        if records.is_empty() {
            writeln!(self.output, "{none_message}")?;
        } else {
            writeln!(self.output, "Matching books found:")?;
            writeln!(self.output, "{}", render_records(records))?;
        }
        Ok(())
    }

    fn display_all(&mut self) -> Result<()> {
        writeln!(self.output, "All books in the library:")?;
        if !self.catalog.is_empty() {
            writeln!(self.output, "{}", render_records(self.catalog.records()))?;
        }
        Ok(())
    }
}

/// Detach search results from the catalog borrow so the loop can write to
/// its output while holding them.
fn clone_all(records: Vec<&Record>) -> Vec<Record> {
    records.into_iter().cloned().collect()
}
