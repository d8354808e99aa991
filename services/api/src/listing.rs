use clap::Args;
use job_board::board::{
    BoardFixture, Collection, CsvListing, ListingQuery, RenderedTable, TableListing,
};
use job_board::config::AppConfig;
use job_board::error::AppError;
use std::io::Write;
use std::path::PathBuf;

const MAX_CELL_WIDTH: usize = 40;

#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive text matched against the collection's search fields
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Facet selection such as `type=Full-time`; repeat for several facets
    #[arg(
        long = "facet",
        value_name = "NAME=VALUE",
        value_parser = ListingQuery::parse_facet_argument
    )]
    pub(crate) facets: Vec<(String, String)>,
}

impl FilterArgs {
    pub(crate) fn query(&self) -> ListingQuery {
        ListingQuery {
            search: self.search.clone(),
            facets: self.facets.clone(),
            ..ListingQuery::default()
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// Collection to list (jobs, companies, users, postings, reports, resources)
    pub(crate) collection: String,
    #[command(flatten)]
    pub(crate) filter: FilterArgs,
    /// 1-based page number
    #[arg(long)]
    pub(crate) page: Option<usize>,
    /// Rows per page (defaults to APP_PAGE_SIZE)
    #[arg(long)]
    pub(crate) per_page: Option<usize>,
}

impl ListArgs {
    pub(crate) fn query(&self) -> ListingQuery {
        ListingQuery {
            page: self.page,
            per_page: self.per_page,
            ..self.filter.query()
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Collection to export
    pub(crate) collection: String,
    #[command(flatten)]
    pub(crate) filter: FilterArgs,
    /// Destination file; CSV goes to stdout when omitted
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let collection: Collection = args.collection.parse()?;
    let query = args.query();

    let fixture = BoardFixture::sample();
    let table = collection.visit(
        &fixture,
        TableListing {
            query: &query,
            default_page_size: config.listing.default_page_size,
        },
    )?;

    print!("{}", render_table(&table));
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let collection: Collection = args.collection.parse()?;
    let query = args.filter.query();

    let fixture = BoardFixture::sample();
    let export = collection.visit(&fixture, CsvListing { query: &query })?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &export.bytes)?;
            println!(
                "Wrote {} {} rows to {}",
                export.rows,
                collection,
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&export.bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Fixed-width text rendering of a table page, including its heading.
pub(crate) fn render_table(table: &RenderedTable) -> String {
    let mut out = format!("{}\n", table.summary.heading);

    if let Some(empty) = &table.summary.empty_state {
        out.push_str(&format!("{}\n{}\n", empty.message, empty.hint));
        return out;
    }

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| clip(cell)).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|column| column.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = table.columns.iter().map(|column| column.to_string()).collect();
    out.push_str(&format_row(&header, &widths));
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    out.push_str(&format_row(&rule, &widths));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }

    out.push_str(&format!("{}\n", table.page_label));
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

fn clip(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        return cell.to_string();
    }
    let kept: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(collection: Collection, query: &ListingQuery) -> RenderedTable {
        collection
            .visit(
                &BoardFixture::sample(),
                TableListing {
                    query,
                    default_page_size: 10,
                },
            )
            .expect("table renders")
    }

    #[test]
    fn table_output_lists_heading_rows_and_page() {
        let query = ListingQuery {
            facets: vec![("status".to_string(), "pending".to_string())],
            ..ListingQuery::default()
        };
        let output = render_table(&table_for(Collection::Postings, &query));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "1 Posting Found");
        assert!(lines[1].starts_with("id  title"));
        assert!(lines[2].starts_with("--"));
        assert_eq!(lines.last().copied(), Some("Page 1 of 1"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn empty_tables_print_the_empty_state() {
        let query = ListingQuery {
            search: Some("quantum".to_string()),
            ..ListingQuery::default()
        };
        let output = render_table(&table_for(Collection::Jobs, &query));

        assert!(output.starts_with("0 Jobs Found\nNo jobs found\n"));
        assert!(!output.contains("Page"));
    }

    #[test]
    fn long_cells_are_clipped() {
        let clipped = clip(&"x".repeat(60));
        assert_eq!(clipped.chars().count(), MAX_CELL_WIDTH);
        assert!(clipped.ends_with("..."));
        assert_eq!(clip("Remote"), "Remote");
    }
}
