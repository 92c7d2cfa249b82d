/// Data rows per report page before the table spills onto a new page.
pub const ROWS_PER_PAGE: usize = 25;

/// Fixed currency suffix; all settled amounts are in a single currency.
pub const CURRENCY_SUFFIX: &str = "€";

/// ISO-8601 date rendering, locale-independent.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
