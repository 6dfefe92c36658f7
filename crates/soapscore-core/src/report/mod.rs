pub mod console;
pub mod csv;
pub mod table;

pub use table::{ScoreTable, TableRow};
