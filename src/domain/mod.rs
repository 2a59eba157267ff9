//! Validated field types.
//!
//! Each kind of contact field is its own value object. Names, phones and
//! birthdays validate at construction time (and again on deserialization),
//! so an invalid value can never be held by a [`Record`](crate::models::Record).
//! Addresses are free text.

pub mod address;
pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::Address;
pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::Phone;
