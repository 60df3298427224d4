//! SOAP 1.1 envelope encoding for SoapStack.
//!
//! This crate turns described records (see [`soapstack_model`]) into
//! SOAP 1.1 request/response bodies without hand-written XML.
//!
//! # Key components
//!
//! - [`SoapEncoder`] for buffering one root element per encoded record
//!   and flushing a complete envelope to a sink in a single write
//! - [`to_envelope`] for one-shot batch encoding into a byte vector
//! - [`SoapError`] for the error taxonomy
//!
//! # Wire conventions
//!
//! - SOAP 1.1 namespace: `http://schemas.xmlsoap.org/soap/envelope/`
//! - XML declaration: `<?xml version="1.0" encoding="utf-8"?>`
//! - Root elements carry the record's literal namespace; field
//!   elements carry an explicit `xmlns=""` override
//! - Character data is written verbatim, without XML escaping
//!
//! # Example
//!
//! ```
//! use soapstack_envelope::SoapEncoder;
//! use soapstack_model::soap_record;
//!
//! soap_record! {
//!     struct Person("urn:example Person") {
//!         name: String => "Name",
//!         age: i64 => "Age",
//!     }
//! }
//!
//! let mut encoder = SoapEncoder::new(Vec::new());
//! encoder.encode(&Person {
//!     name: "Alice".to_owned(),
//!     age: 30,
//! })?;
//! encoder.flush()?;
//!
//! let xml = String::from_utf8(encoder.into_inner())?;
//! assert!(xml.contains("<Person xmlns=\"urn:example\">"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod encode;
pub mod error;

pub use encode::{SOAP_ENVELOPE_END, SOAP_ENVELOPE_START, SoapEncoder, to_envelope};
pub use error::SoapError;
