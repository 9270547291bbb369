/// Page size applied when a list request does not specify a limit
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest page size a list request may ask for
pub const MAX_PAGE_SIZE: u64 = 100;

/// Resolves requested pagination values to the bounds the list queries run with
///
/// A missing limit falls back to [`DEFAULT_PAGE_SIZE`], a limit above
/// [`MAX_PAGE_SIZE`] is capped, and a missing offset starts from the first record.
pub fn clamp(limit: Option<u64>, offset: Option<u64>) -> (u64, u64) {
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
    let offset = offset.unwrap_or(0);

    (limit, offset)
}
