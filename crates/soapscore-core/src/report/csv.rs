use super::table::ScoreTable;
use crate::model::Category;
use std::io;
use std::path::Path;

/// Write a table with an `Average` row. Parent directories are created as needed.
pub fn write_csv(table: &ScoreTable, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_table(table, csv::Writer::from_path(out)?)
}

pub fn write_table<W: io::Write>(table: &ScoreTable, mut wtr: csv::Writer<W>) -> anyhow::Result<()> {
    let mut header = vec!["case_id"];
    header.extend(Category::ALL.iter().map(|c| c.as_str()));
    header.push("Overall");
    wtr.write_record(&header)?;

    for row in table.rows_with_average() {
        let mut record = Vec::with_capacity(header.len());
        record.push(row.case_id.clone());
        record.extend(row.scores.iter().map(ToString::to_string));
        record.push(format!("{:.2}", row.overall));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
