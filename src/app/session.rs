use crate::core::catalog::Catalog;
use crate::domain::model::{format_amount, Entry};
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const PROMPT: &str = "Введите текст для поиска (или \"exit\" для выхода): ";
pub const EXIT_COMMAND: &str = "exit";

/// Interactive search over a loaded catalog. Exporting happens once the user
/// leaves the loop.
pub struct Session<'a> {
    catalog: &'a Catalog,
    export_path: PathBuf,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, export_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            export_path: export_path.into(),
        }
    }

    /// Reads queries until `exit` (any case) or end of input, then exports the
    /// catalog and returns the export confirmation.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<String> {
        let mut line = String::new();

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let query = line.trim_end_matches(['\r', '\n']);
            if query.to_lowercase() == EXIT_COMMAND {
                break;
            }

            tracing::debug!("Searching for '{}'", query);
            self.print_results(&self.catalog.search(query), &mut output)?;
        }

        writeln!(output, "Работа программы завершена.")?;

        let message = self.catalog.export_html(&self.export_path)?;
        writeln!(output, "{}", message)?;
        Ok(message)
    }

    fn print_results<W: Write>(&self, found: &[&Entry], output: &mut W) -> Result<()> {
        if found.is_empty() {
            writeln!(output, "По вашему запросу ничего не найдено.")?;
            return Ok(());
        }

        writeln!(output, "Найдено {} позиций:", found.len())?;
        for (index, entry) in found.iter().enumerate() {
            writeln!(output, "{}", format_match(index + 1, entry))?;
        }
        Ok(())
    }
}

pub fn format_match(number: usize, entry: &Entry) -> String {
    format!(
        "{}. {} - {} руб., {} кг., {}, {:.2} руб./кг.",
        number,
        entry.product,
        format_amount(entry.price),
        format_amount(entry.weight),
        entry.source_file,
        entry.unit_price
    )
}
