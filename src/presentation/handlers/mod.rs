mod health;
mod info;
mod process;

pub use health::health_handler;
pub use info::info_handler;
pub use process::process_handler;
