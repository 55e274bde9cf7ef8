use crate::domain::model::{format_amount, Entry};
use maud::{html, Markup, DOCTYPE};

pub const DEFAULT_EXPORT_PATH: &str = "output.html";

const TITLE: &str = "Позиции продуктов";
const HEADERS: [&str; 6] = ["Номер", "Название", "Цена", "Фасовка", "Файл", "Цена за кг."];

/// Renders entries as a single HTML table, numbered from 1 in the given order.
pub fn render_catalog(entries: &[Entry]) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { (TITLE) }
            }
            body {
                table {
                    tr {
                        @for header in HEADERS {
                            th { (header) }
                        }
                    }
                    @for (index, entry) in entries.iter().enumerate() {
                        (entry_row(index + 1, entry))
                    }
                }
            }
        }
    }
}

fn entry_row(number: usize, entry: &Entry) -> Markup {
    html! {
        tr {
            td { (number) }
            td { (entry.product) }
            td { (format_amount(entry.price)) }
            td { (format_amount(entry.weight)) }
            td { (entry.source_file) }
            td { (format!("{:.2}", entry.unit_price)) }
        }
    }
}
