mod country_names;
mod region_code;

pub use country_names::country_name;
pub use region_code::RegionCode;
