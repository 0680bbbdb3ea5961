/// Number of records on one page of a paginated listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the query string has no usable `page`
pub const DEFAULT_PAGE: i64 = 1;
