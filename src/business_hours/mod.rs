mod schedule;
mod table;

pub use schedule::{BusinessConfig, DEFAULT_BUSINESS_CONFIG, weekday_name};
pub use table::{BUSINESS_TABLE, BusinessTable};
