//! Tests for the company listing endpoint.
//!
//! Companies are read-only reference data for the record forms, so the only
//! endpoint under test here is the paginated listing.

mod get_companies;
