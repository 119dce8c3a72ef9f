pub mod prelude;

pub mod holiday_searches;
