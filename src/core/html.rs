// src/core/html.rs
//
// Turns every <table> in a page into a rectangular-ish grid of cleaned text.
// rowspan/colspan are expanded, leading all-<th> rows become the column labels
// (joined per column, like "Total" over "Goals" → "Total Goals").

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::clean_cell;

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));
static TR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid row selector"));

/// Spans past this are treated as malformed markup.
const MAX_SPAN: usize = 1000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlTable {
    /// Flattened header label per column; empty when the table had no header rows.
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl HtmlTable {
    /// Index of the first column whose label contains `needle`.
    pub fn find_column(&self, needle: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.contains(needle))
    }
}

#[derive(Clone, Debug)]
struct Cell {
    text: String,
    header: bool,
}

struct Pending {
    left: usize,
    cell: Cell,
}

struct GridRow {
    cells: Vec<Cell>,
    /// Every cell written in this <tr> (not carried down by rowspan) is a <th>.
    own_all_th: bool,
}

/// All tables in document order, nested ones included.
pub fn read_tables(html: &str) -> Vec<HtmlTable> {
    let doc = Html::parse_document(html);
    doc.select(&TABLE).map(read_table).collect()
}

fn read_table(table: ElementRef<'_>) -> HtmlTable {
    let grid = expand_rows(table);

    let header_len = grid.iter().take_while(|r| r.own_all_th).count();
    let (head, body) = grid.split_at(header_len);

    HtmlTable {
        columns: flatten_labels(head),
        rows: body
            .iter()
            .map(|r| r.cells.iter().map(|c| c.text.clone()).collect())
            .collect(),
    }
}

fn expand_rows(table: ElementRef<'_>) -> Vec<GridRow> {
    let mut carry: Vec<Option<Pending>> = Vec::new();
    let mut out = Vec::new();

    for tr in table.select(&TR).filter(|tr| owned_by(*tr, table)) {
        let mut own = tr
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|e| matches!(e.value().name(), "th" | "td"))
            .peekable();
        if own.peek().is_none() {
            continue;
        }

        let mut cells = Vec::new();
        let mut own_all_th = true;
        let mut col = 0usize;

        loop {
            if let Some(slot) = carry.get_mut(col) {
                if let Some(p) = slot {
                    cells.push(p.cell.clone());
                    p.left -= 1;
                    if p.left == 0 {
                        *slot = None;
                    }
                    col += 1;
                    continue;
                }
            }

            let Some(el) = own.next() else {
                // Row ran out early; keep alignment if something is still spanning further right.
                if carry.get(col..).is_some_and(|rest| rest.iter().any(Option::is_some)) {
                    cells.push(Cell { text: s!(), header: false });
                    col += 1;
                    continue;
                }
                break;
            };

            let header = el.value().name() == "th";
            own_all_th &= header;
            let cell = Cell { text: cell_text(el), header };
            let rowspan = span(el, "rowspan");
            let colspan = span(el, "colspan");

            for _ in 0..colspan {
                cells.push(cell.clone());
                if rowspan > 1 {
                    if carry.len() <= col {
                        carry.resize_with(col + 1, || None);
                    }
                    carry[col] = Some(Pending { left: rowspan - 1, cell: cell.clone() });
                }
                col += 1;
            }
        }

        out.push(GridRow { cells, own_all_th });
    }
    out
}

fn flatten_labels(head: &[GridRow]) -> Vec<String> {
    let width = head.iter().map(|r| r.cells.len()).max().unwrap_or(0);
    (0..width)
        .map(|j| {
            let mut parts: Vec<&str> = Vec::new();
            for row in head {
                let Some(cell) = row.cells.get(j) else { continue };
                if !cell.header || cell.text.is_empty() {
                    continue;
                }
                if parts.last() != Some(&cell.text.as_str()) {
                    parts.push(&cell.text);
                }
            }
            parts.join(" ")
        })
        .collect()
}

/// Nearest enclosing <table> is `table` (skips rows of nested tables).
fn owned_by(tr: ElementRef<'_>, table: ElementRef<'_>) -> bool {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
        .is_some_and(|t| t.id() == table.id())
}

fn span(el: ElementRef<'_>, attr: &str) -> usize {
    el.value()
        .attr(attr)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

/// Visible text of a cell: inline <style>/<script> skipped, footnotes stripped.
fn cell_text(cell: ElementRef<'_>) -> String {
    let mut buf = s!();
    for node in cell.descendants() {
        let Some(text) = node.value().as_text() else { continue };
        let hidden = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .take_while(|e| e.id() != cell.id())
            .any(|e| matches!(e.value().name(), "style" | "script"));
        if !hidden {
            buf.push_str(text);
        }
    }
    clean_cell(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLUB: &str = r#"
    <table class="wikitable">
      <tr><th rowspan="2">Club</th><th rowspan="2">Season</th>
          <th colspan="2">League</th><th colspan="2">Total</th></tr>
      <tr><th>Apps</th><th>Goals</th><th>Apps</th><th>Goals</th></tr>
      <tr><th rowspan="2">Barcelona</th><td>2004–05</td><td>7</td><td>1</td><td>9</td><td>1</td></tr>
      <tr><td>2005–06</td><td>17</td><td>6</td><td>25</td><td>8<sup>[a]</sup></td></tr>
    </table>"#;

    #[test]
    fn flattens_two_level_headers() {
        let t = &read_tables(CLUB)[0];
        assert_eq!(
            t.columns,
            vec!["Club", "Season", "League Apps", "League Goals", "Total Apps", "Total Goals"]
        );
        assert_eq!(t.find_column("Total Goals"), Some(5));
    }

    #[test]
    fn expands_rowspans_into_body() {
        let t = &read_tables(CLUB)[0];
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[1][0], "Barcelona");
        assert_eq!(t.rows[1][1], "2005–06");
        assert_eq!(t.rows[1][5], "8");
    }

    #[test]
    fn nested_tables_keep_their_own_rows() {
        let html = r#"<table><tr><th>Outer</th></tr>
            <tr><td><table><tr><th>Inner</th></tr><tr><td>x</td></tr></table></td></tr></table>"#;
        let tables = read_tables(html);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].columns, vec!["Outer"]);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[1].rows, vec![vec![s!("x")]]);
    }

    #[test]
    fn skips_inline_styles() {
        let html = r#"<table><tr><th>Goals</th></tr>
            <tr><td><style>.mw-parser-output .x{color:red}</style>12</td></tr></table>"#;
        assert_eq!(read_tables(html)[0].rows[0][0], "12");
    }

    #[test]
    fn headerless_table_has_no_labels() {
        let t = &read_tables("<table><tr><td>1</td><td>2</td></tr></table>")[0];
        assert!(t.columns.is_empty());
        assert_eq!(t.rows.len(), 1);
    }

    #[test]
    fn no_tables() {
        assert!(read_tables("<html><body></body></html>").is_empty());
    }
}
