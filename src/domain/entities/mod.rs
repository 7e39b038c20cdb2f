pub mod monitor_position;
pub mod screener_row;
