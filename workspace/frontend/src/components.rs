pub mod chart_panel;
pub mod dashboard;
pub mod kpi;
pub mod process_button;
pub mod transactions;
