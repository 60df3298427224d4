//! SOAP 1.1 envelope encoding: buffering record elements and flushing
//! complete envelopes to a sink.
//!
//! The wire format is byte-exact: a 4-space indent for root elements,
//! a 6-space indent for field elements, no newline between consecutive
//! root elements, and field elements carrying an explicit `xmlns=""`
//! override that detaches them from the root's namespace. Character
//! data is written verbatim; values containing `<` or `&` are not
//! escaped, matching the consumers this format targets.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use soapstack_model::{SoapField, SoapRecord};

use crate::error::SoapError;

/// Opening boilerplate of a SOAP 1.1 envelope: XML declaration plus
/// the `<soap:Envelope>`/`<soap:Body>` opening tags.
pub const SOAP_ENVELOPE_START: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
"#;

/// Closing boilerplate of a SOAP 1.1 envelope.
pub const SOAP_ENVELOPE_END: &str = r#"  </soap:Body>
</soap:Envelope>"#;

/// Streaming encoder that accumulates records into one SOAP envelope.
///
/// [`encode`](Self::encode) appends one root element per record;
/// [`flush`](Self::flush) wraps the accumulated body in envelope
/// boilerplate and hands the whole message to the sink in a single
/// write. After a successful flush the encoder starts a fresh envelope
/// on the next encode, indefinitely.
///
/// The encoder owns its buffer exclusively and performs no internal
/// synchronization; use one encoder per logical request.
#[derive(Debug)]
pub struct SoapEncoder<W: Write> {
    sink: W,
    buffer: Vec<u8>,
}

impl<W: Write> SoapEncoder<W> {
    /// Create an encoder writing finished envelopes to `sink`.
    ///
    /// Performs no I/O.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            buffer: Vec::new(),
        }
    }

    /// Bytes accumulated since the last flush.
    ///
    /// Includes the envelope opening once a record has been encoded;
    /// the closing boilerplate is only appended during
    /// [`flush`](Self::flush). Callers needing durability across a
    /// failing sink can capture these bytes before flushing.
    #[must_use]
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Whether nothing has been encoded since the last flush.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Shared reference to the sink.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Mutable reference to the sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consume the encoder, returning the sink. Pending unflushed
    /// content is dropped.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Append one record to the envelope under construction.
    ///
    /// The envelope opening is written lazily when the first record
    /// arrives; each call appends one more root element in call order,
    /// so a single envelope body may carry several sibling roots
    /// before [`flush`](Self::flush).
    ///
    /// # Errors
    ///
    /// [`SoapError::MissingRootName`] if the record's root metadata is
    /// absent or does not split into `"<namespace> <localName>"`. The
    /// buffer is left untouched on error.
    pub fn encode<R: SoapRecord + ?Sized>(&mut self, record: &R) -> Result<(), SoapError> {
        let (namespace, local_name) = split_root_name(record.xml_name())?;
        let fields = record.fields();

        // Serialize into scratch first so a failure cannot leave a
        // partial record in the envelope buffer.
        let mut scratch = Vec::with_capacity(256);
        write_root_element(&mut scratch, namespace, local_name, &fields)?;

        if self.buffer.is_empty() {
            self.buffer.extend_from_slice(SOAP_ENVELOPE_START.as_bytes());
        }
        self.buffer.extend_from_slice(&scratch);

        tracing::trace!(root = local_name, fields = fields.len(), "encoded record");
        Ok(())
    }

    /// Close the envelope and write it to the sink in one call.
    ///
    /// A flush with nothing buffered is a no-op: no sink write, no
    /// envelope emitted for zero records. On success the buffer is
    /// reset so the next encode starts a fresh envelope.
    ///
    /// # Errors
    ///
    /// [`SoapError::SinkWriteFailed`] if the sink rejects the write.
    /// The pending content (without the closing boilerplate) is
    /// preserved so the caller can retry or capture
    /// [`buffered`](Self::buffered).
    pub fn flush(&mut self) -> Result<(), SoapError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let body_len = self.buffer.len();
        let mut envelope = std::mem::take(&mut self.buffer);
        envelope.push(b'\n');
        envelope.extend_from_slice(SOAP_ENVELOPE_END.as_bytes());

        if let Err(e) = self.sink.write_all(&envelope) {
            // Retain the body so the caller can retry the flush.
            envelope.truncate(body_len);
            self.buffer = envelope;
            tracing::warn!(error = %e, pending = body_len, "sink rejected SOAP envelope");
            return Err(SoapError::SinkWriteFailed(e));
        }

        tracing::debug!(bytes = envelope.len(), "flushed SOAP envelope");
        Ok(())
    }
}

/// Encode a batch of records into one finished SOAP envelope.
///
/// Convenience wrapper over [`SoapEncoder`] against an in-memory sink.
/// An empty batch yields an empty byte vector: no envelope is emitted
/// for zero records, matching [`SoapEncoder::flush`]'s no-op rule.
///
/// # Errors
///
/// [`SoapError::MissingRootName`] if any record carries unusable root
/// metadata; the partial envelope is discarded in that case.
pub fn to_envelope<R: SoapRecord>(records: &[R]) -> Result<Vec<u8>, SoapError> {
    let mut encoder = SoapEncoder::new(Vec::with_capacity(512));
    for record in records {
        encoder.encode(record)?;
    }
    encoder.flush()?;
    Ok(encoder.into_inner())
}

/// Split `"<namespace> <localName>"` root metadata into its two parts.
///
/// Exactly two space-separated parts are required, and the local name
/// must be non-empty so every emitted root element has a name.
fn split_root_name(xml_name: Option<&str>) -> Result<(&str, &str), SoapError> {
    let Some(tag) = xml_name else {
        return Err(SoapError::MissingRootName(
            "no XMLName metadata declared".to_owned(),
        ));
    };

    let mut parts = tag.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(namespace), Some(local_name), None) if !local_name.is_empty() => {
            Ok((namespace, local_name))
        }
        _ => Err(SoapError::MissingRootName(tag.to_owned())),
    }
}

/// Write one `<localName xmlns="namespace">…</localName>` root element,
/// including its field children, into `buf`.
fn write_root_element(
    buf: &mut Vec<u8>,
    namespace: &str,
    local_name: &str,
    fields: &[SoapField],
) -> io::Result<()> {
    let mut writer = Writer::new(buf);

    writer.write_event(Event::Text(BytesText::from_escaped("    ")))?;
    writer.write_event(Event::Start(
        BytesStart::new(local_name).with_attributes([("xmlns", namespace)]),
    ))?;

    for field in fields {
        if field.omit_if_empty() && field.value.is_empty() {
            continue;
        }

        let name = field.element_name();
        writer.write_event(Event::Text(BytesText::from_escaped("\n      ")))?;
        writer.write_event(Event::Start(
            BytesStart::new(name).with_attributes([("xmlns", "")]),
        ))?;
        // Pre-escaped text: character data passes through verbatim.
        writer.write_event(Event::Text(BytesText::from_escaped(field.value.as_text())))?;
        writer.write_event(Event::End(BytesEnd::new(name)))?;
    }

    writer.write_event(Event::Text(BytesText::from_escaped("\n    ")))?;
    writer.write_event(Event::End(BytesEnd::new(local_name)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use soapstack_model::FieldValue;

    use super::*;

    #[test]
    fn test_should_split_root_metadata() {
        let (ns, name) = split_root_name(Some("urn:example Person")).expect("valid metadata");
        assert_eq!(ns, "urn:example");
        assert_eq!(name, "Person");
    }

    #[test]
    fn test_should_reject_absent_or_malformed_root_metadata() {
        for xml_name in [None, Some("Person"), Some("urn:a b c"), Some("urn:a ")] {
            let err = split_root_name(xml_name).expect_err("must be rejected");
            assert!(matches!(err, SoapError::MissingRootName(_)));
        }
    }

    #[test]
    fn test_should_accept_empty_namespace_part() {
        // " Person" still splits into two parts; only the local name
        // must be non-empty.
        let (ns, name) = split_root_name(Some(" Person")).expect("valid metadata");
        assert_eq!(ns, "");
        assert_eq!(name, "Person");
    }

    #[test]
    fn test_should_write_fields_with_empty_namespace_override() {
        let mut buf = Vec::new();
        let fields = vec![SoapField::new("Name", "Alice")];
        write_root_element(&mut buf, "urn:example", "Person", &fields).expect("in-memory write");

        let xml = String::from_utf8(buf).expect("valid UTF-8");
        assert_eq!(
            xml,
            "    <Person xmlns=\"urn:example\">\n      <Name xmlns=\"\">Alice</Name>\n    </Person>"
        );
    }

    #[test]
    fn test_should_skip_zero_valued_omitempty_fields() {
        let mut buf = Vec::new();
        let fields = vec![
            SoapField::new("Name", "Alice"),
            SoapField::new("Age,omitempty", &0_i64),
            SoapField::new("Score,omitempty", &7_i64),
        ];
        write_root_element(&mut buf, "urn:example", "Person", &fields).expect("in-memory write");

        let xml = String::from_utf8(buf).expect("valid UTF-8");
        assert!(!xml.contains("<Age"));
        assert!(xml.contains("<Score xmlns=\"\">7</Score>"));
    }

    #[test]
    fn test_should_write_verbatim_character_data() {
        let mut buf = Vec::new();
        let fields = vec![SoapField {
            tag: "Expr",
            value: FieldValue::Str("a<b&c".to_owned()),
        }];
        write_root_element(&mut buf, "urn:example", "Calc", &fields).expect("in-memory write");

        let xml = String::from_utf8(buf).expect("valid UTF-8");
        assert!(xml.contains("<Expr xmlns=\"\">a<b&c</Expr>"));
    }
}
