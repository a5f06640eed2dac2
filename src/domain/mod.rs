pub mod chart;
pub mod frequency_table;
pub mod page;
