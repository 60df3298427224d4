//! Record description types for SoapStack.
//!
//! A record destined for a SOAP envelope describes itself as an ordered
//! list of tagged field values plus root metadata, through the
//! [`SoapRecord`] trait. The tag metadata follows the conventional
//! string form:
//!
//! - Root metadata: `"<namespace> <localName>"`, one single space.
//! - Field tags: `"<elementName>[,modifier]*"`; the only recognized
//!   modifier is `omitempty`.
//!
//! Field values come from the closed [`FieldValue`] set (integer,
//! string, boolean, floating-point). Types outside that set have no
//! [`ToFieldValue`] impl and are rejected at compile time.
//!
//! Implement [`SoapRecord`] by hand, or declare the struct through the
//! [`soap_record!`] macro and get the impl generated.

mod macros;
pub mod record;
pub mod value;

pub use record::{SoapField, SoapRecord};
pub use value::{FieldValue, ToFieldValue};
