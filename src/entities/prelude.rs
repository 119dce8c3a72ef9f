pub use super::holiday_searches::Entity as HolidaySearches;
