// Module exports for models

pub mod day;
pub mod scope;
pub mod settings;
pub mod time_period;
