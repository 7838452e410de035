//! # utilkit
//!
//! Small building blocks for application code.
//!
//! This library provides:
//! - A dynamic `Value` tree with a structural clone engine
//! - Sequential and concurrent combinators for fallible async tasks
//! - Formatting helpers for phone numbers, dates and money
//! - Record grouping and aggregation, text cleanup and input validation
//!
//! ## Task Flow
//! 1. Each task receives the previous task's result (nothing for the first)
//! 2. A task answers immediately or with a future
//! 3. The first failure stops the chain and is returned as-is
//!
//! ## Modules
//! - `value`: `Value`, `deep_copy`, `try_deep_copy`
//! - `sequence`: `run_in_sequence`, `Chain`, `Step`, `run_all`
//! - `array`, `records`: list helpers and aggregation
//! - `codec`, `phone`, `text`, `names`, `validate`: string helpers
//! - `datetime`, `intl`: timestamp, date and currency formatting
//! - `config`: formatting defaults from a file or the environment

pub mod array;
pub mod codec;
pub mod config;
pub mod datetime;
pub mod error;
pub mod intl;
pub mod names;
pub mod phone;
pub mod records;
pub mod sequence;
pub mod text;
pub mod validate;
pub mod value;

pub use array::{array_sum, create_array, random_sample, random_sample_with};
pub use codec::{b64_decode_unicode, b64_encode_unicode};
pub use config::Config;
pub use datetime::{
    convert_timestamp_to_date_time, timestamp_to_utc, DateTimeFormat, DateTimeOptions, Zone,
};
pub use error::{Result, UtilError};
pub use intl::{
    convert_to_date, convert_to_money, Currency, DateFormat, DayStyle, Locale, MoneyFormat,
    MonthStyle, YearStyle,
};
pub use names::{split_full_name, PersonName};
pub use phone::convert_phone_to_e164;
pub use records::{
    group_by, group_by_key, object_key_average, object_key_max, object_key_min, object_key_sum,
};
pub use sequence::{run_all, run_in_sequence, task, Chain, Step, Task};
pub use text::replace_special_chars;
pub use validate::{
    validate_email, validate_name, validate_number, validate_password, validate_phone,
};
pub use value::{deep_copy, try_deep_copy, Mapping, Sequence, Value};
