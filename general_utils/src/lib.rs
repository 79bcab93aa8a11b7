//! Stateless helpers shared across the CacheHaus ecosystem
//!
//! Nothing here depends on the cache store; these are plain functions the
//! application calls around it.

pub mod collections;
pub mod conversion;
pub mod datetime;
pub mod errors;
pub mod json;
pub mod text;
pub mod token;

pub use collections::{find_index_of, in_array, remove_duplicates};
pub use conversion::ToInt64;
pub use datetime::{format_datetime_by_language, user_never_signed};
pub use errors::UtilError;
pub use json::read_json_file;
pub use text::{decode_latin5, encode_latin5, remove_accents, replace_gender, Gender};
pub use token::random_hash;
