// src/specs/career.rs
//
// Career statistics tables on a player's Wikipedia page.
//
// Club table:          a column labelled "...Season...";
//                      goals from "Total Goals", else the first "...Goals..." column.
// International table: columns "...Year..." and "...Goals..." (checked only when the
//                      table is not a club table).
//
// Rows whose season/year cell has no four-digit number (club totals, career
// totals) are skipped. Goal text is passed through untouched for the cleaner.

use crate::core::html::{HtmlTable, read_tables};
use crate::core::sanitize::first_year;
use crate::pipeline::{Category, RawRecord};

/// Which table a record came from and the two columns that matter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLayout {
    pub category: Category,
    pub year_col: usize,
    pub goals_col: usize,
}

/// Classify a table, or `None` if it holds no per-season goal totals.
pub fn classify(table: &HtmlTable) -> Option<TableLayout> {
    if let Some(year_col) = table.find_column("Season") {
        let goals_col = table
            .find_column("Total Goals")
            .or_else(|| table.find_column("Goals"))?;
        return Some(TableLayout { category: Category::Club, year_col, goals_col });
    }
    let year_col = table.find_column("Year")?;
    let goals_col = table.find_column("Goals")?;
    Some(TableLayout { category: Category::International, year_col, goals_col })
}

/// Every (year, goals) observation on the page, club tables first in page order.
pub fn extract_records(html: &str, name: &str) -> Vec<RawRecord> {
    let mut club = Vec::new();
    let mut international = Vec::new();

    for table in read_tables(html) {
        let Some(layout) = classify(&table) else { continue };
        let sink = match layout.category {
            Category::Club => &mut club,
            Category::International => &mut international,
        };
        sink.extend(records_from(&table, layout, name));
    }

    logd!("{name}: {} club rows, {} international rows", club.len(), international.len());
    club.append(&mut international);
    club
}

fn records_from<'a>(
    table: &'a HtmlTable,
    layout: TableLayout,
    name: &'a str,
) -> impl Iterator<Item = RawRecord> + 'a {
    table.rows.iter().filter_map(move |row| {
        let year = first_year(row.get(layout.year_col)?)?;
        let goals = row.get(layout.goals_col).map(String::as_str).unwrap_or("");
        Some(RawRecord::new(name, year, goals, layout.category))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str]) -> HtmlTable {
        HtmlTable { columns: columns.iter().map(|c| s!(*c)).collect(), rows: Vec::new() }
    }

    #[test]
    fn club_prefers_total_goals() {
        let t = table(&["Club", "Season", "League Goals", "Total Apps", "Total Goals"]);
        let l = classify(&t).unwrap();
        assert_eq!(l.category, Category::Club);
        assert_eq!((l.year_col, l.goals_col), (1, 4));
    }

    #[test]
    fn club_falls_back_to_first_goals() {
        let t = table(&["Season", "Apps", "League Goals", "Cup Goals"]);
        assert_eq!(classify(&t).unwrap().goals_col, 2);
    }

    #[test]
    fn season_without_goals_is_skipped() {
        assert_eq!(classify(&table(&["Season", "Apps"])), None);
    }

    #[test]
    fn international_needs_year_and_goals() {
        let t = table(&["National team", "Year", "Apps", "Goals"]);
        let l = classify(&t).unwrap();
        assert_eq!(l.category, Category::International);
        assert_eq!((l.year_col, l.goals_col), (1, 3));
        assert_eq!(classify(&table(&["Year", "Apps"])), None);
        assert_eq!(classify(&table(&["No.", "Date", "Venue"])), None);
    }

    #[test]
    fn extracts_both_tables_and_skips_totals() {
        let html = r#"
        <table>
          <tr><th rowspan="2">Club</th><th rowspan="2">Season</th><th colspan="2">Total</th></tr>
          <tr><th>Apps</th><th>Goals</th></tr>
          <tr><td rowspan="3">Sporting</td><td>2002–03</td><td>31</td><td>5</td></tr>
          <tr><td>2003–04</td><td>40</td><td>—</td></tr>
          <tr><td>Total</td><td>71</td><td>5</td></tr>
          <tr><th colspan="2">Career total</th><td>71</td><td>5</td></tr>
        </table>
        <table>
          <tr><th>National team</th><th>Year</th><th>Apps</th><th>Goals</th></tr>
          <tr><td rowspan="2">Portugal</td><td>2003</td><td>6</td><td>0</td></tr>
          <tr><td>2004</td><td>16</td><td>7[b]</td></tr>
        </table>"#;
        let recs = extract_records(html, "CR7");
        let got: Vec<(&str, &str, Category)> = recs
            .iter()
            .map(|r| (r.year_text.as_str(), r.total_text.as_str(), r.category))
            .collect();
        assert_eq!(
            got,
            vec![
                ("2002", "5", Category::Club),
                ("2003", "—", Category::Club),
                ("2003", "0", Category::International),
                ("2004", "7", Category::International),
            ]
        );
        assert!(recs.iter().all(|r| r.entity_name == "CR7"));
    }

    #[test]
    fn empty_page_yields_nothing() {
        assert!(extract_records("<html><body></body></html>", "Nobody").is_empty());
    }
}
