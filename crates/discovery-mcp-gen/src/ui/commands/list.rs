use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use discovery_mcp_gen::{discovery::source, utils::truncate_chars};

use crate::ui::{Colors, DocumentInput, colors::IntoComfyColor, commands::load_document, term_width};

const LIST_DESCRIPTION_CHARS: usize = 80;

fn table() -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());
  table
}

fn header(colors: &Colors, titles: &[&str]) -> Row {
  let mut row = Row::new();
  for title in titles {
    row.add_cell(Cell::new(title).fg(IntoComfyColor::into(colors.label())));
  }
  row
}

pub async fn list_methods(input: &DocumentInput, colors: &Colors) -> anyhow::Result<()> {
  let document = load_document(input).await?;
  let methods = document.all_methods();

  let mut table = table();
  table.set_header(header(colors, &["METHOD", "VERB", "PATH", "DESCRIPTION"]));

  for (name, method) in &methods {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(&method.http_method)
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(&method.path).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(truncate_chars(&method.description, LIST_DESCRIPTION_CHARS)).fg(IntoComfyColor::into(colors.info())),
    );
    table.add_row(row);
  }

  println!("Methods in {}:\n", document.name);
  println!("{table}");
  println!("\nTotal: {} methods", methods.len());

  Ok(())
}

pub async fn list_apis(preferred_only: bool, colors: &Colors) -> anyhow::Result<()> {
  let apis = source::list_apis().await?;

  let mut table = table();
  table.set_header(header(colors, &["", "NAME", "VERSION", "TITLE"]));

  let mut shown = 0usize;
  for api in apis.iter().filter(|api| api.preferred || !preferred_only) {
    let mut row = Row::new();
    row.add_cell(Cell::new(if api.preferred { "*" } else { "" }).fg(IntoComfyColor::into(colors.accent())));
    row.add_cell(
      Cell::new(&api.name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(&api.version).fg(IntoComfyColor::into(colors.accent())));
    row.add_cell(Cell::new(&api.title).fg(IntoComfyColor::into(colors.primary())));
    table.add_row(row);
    shown += 1;
  }

  println!("{table}");
  println!("\n* = preferred version");
  println!("Total: {shown} APIs");

  Ok(())
}
