pub mod chart;
pub mod statistics_tab;

pub use statistics_tab::StatisticsTab;
