use super::table::ScoreTable;
use crate::model::Category;

pub fn render_table(table: &ScoreTable) -> String {
    let rows = table.rows_with_average();
    let id_width = rows
        .iter()
        .map(|r| r.case_id.chars().count())
        .chain(std::iter::once("case_id".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("== {} ==\n", table.metric);
    out.push_str(&format!("{:<id_width$}", "case_id"));
    for category in Category::ALL {
        out.push_str(&format!("  {:>10}", category.as_str()));
    }
    out.push_str(&format!("  {:>10}\n", "Overall"));

    for row in rows {
        out.push_str(&format!("{:<id_width$}", row.case_id));
        for score in &row.scores {
            out.push_str(&format!("  {:>10}", score.to_string()));
        }
        out.push_str(&format!("  {:>10.2}\n", row.overall));
    }
    out
}

pub fn print_table(table: &ScoreTable) {
    if table.is_empty() {
        println!("== {} ==\n(no cases)", table.metric);
        return;
    }
    print!("{}", render_table(table));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TableRow;
    use crate::scoring::CategoryScore::{NotApplicable, Scored};

    #[test]
    fn renders_sentinel_and_average() {
        let table = ScoreTable::new("conciseness").with_row(TableRow {
            case_id: "c1".into(),
            scores: [Scored(100.0), NotApplicable, Scored(0.0), NotApplicable],
            overall: 50.0,
        });
        let text = render_table(&table);
        assert!(text.starts_with("== conciseness =="));
        assert!(text.contains("N/A"));
        assert!(text.lines().last().unwrap().starts_with("Average"));
    }
}
