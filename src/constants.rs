pub const USER_AGENT: &str = concat!("holidayd/", env!("CARGO_PKG_VERSION"));

pub mod limits {

    pub const HISTORY_LIMIT: u64 = 50;
}

pub mod formats {

    pub const HOLIDAY_DATE: &str = "%Y-%m-%d";

    pub const SEARCHED_AT: &str = "%Y-%m-%d %H:%M:%S";
}
