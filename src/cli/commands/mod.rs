mod countdown;
mod history;
mod holidays;

pub use countdown::cmd_countdown;
pub use history::{cmd_history, effective_limit};
pub use holidays::{cmd_holidays, fetch_holidays};
