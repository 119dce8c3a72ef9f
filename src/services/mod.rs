pub mod calculator;
pub use calculator::{Calculation, CalculationError, CalculatorService};

pub mod countdown;

pub mod holidays;
pub use holidays::{HolidayService, HolidaySource};
