//! The describable-record capability consumed by the envelope encoder.

use crate::value::{FieldValue, ToFieldValue};

/// One described field: tag metadata plus its value.
///
/// The tag string carries the XML element name as its first
/// comma-separated segment; later segments are modifier flags. The
/// only recognized modifier is `omitempty`.
#[derive(Debug, Clone, PartialEq)]
pub struct SoapField {
    /// Tag metadata string, e.g. `"Age,omitempty"`.
    pub tag: &'static str,
    /// The field's value.
    pub value: FieldValue,
}

impl SoapField {
    /// Describe a field from its tag metadata and any supported value.
    pub fn new<V: ToFieldValue + ?Sized>(tag: &'static str, value: &V) -> Self {
        Self {
            tag,
            value: value.to_field_value(),
        }
    }

    /// The XML element name: the first comma-separated tag segment.
    #[must_use]
    pub fn element_name(&self) -> &str {
        self.tag.split(',').next().unwrap_or(self.tag)
    }

    /// Whether a modifier segment carries the `omitempty` token.
    #[must_use]
    pub fn omit_if_empty(&self) -> bool {
        self.tag.split(',').skip(1).any(|m| m == "omitempty")
    }
}

/// A record that can describe itself for SOAP encoding.
///
/// This is the explicit form of a reflective field-inspection
/// contract: an ordered list of field descriptions plus root metadata
/// in the form `"<namespace> <localName>"`. Implement it by hand or
/// declare the struct through [`soap_record!`](crate::soap_record).
pub trait SoapRecord {
    /// Root metadata in the form `"<namespace> <localName>"`.
    ///
    /// The default `None` models a record without an `XMLName` field;
    /// the encoder rejects such records before touching its buffer.
    fn xml_name(&self) -> Option<&str> {
        None
    }

    /// Ordered field descriptions, excluding the root metadata itself.
    fn fields(&self) -> Vec<SoapField>;
}

impl<T: SoapRecord + ?Sized> SoapRecord for &T {
    fn xml_name(&self) -> Option<&str> {
        (**self).xml_name()
    }

    fn fields(&self) -> Vec<SoapField> {
        (**self).fields()
    }
}

impl<T: SoapRecord + ?Sized> SoapRecord for Box<T> {
    fn xml_name(&self) -> Option<&str> {
        (**self).xml_name()
    }

    fn fields(&self) -> Vec<SoapField> {
        (**self).fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_take_element_name_from_first_tag_segment() {
        assert_eq!(SoapField::new("Name", "x").element_name(), "Name");
        assert_eq!(SoapField::new("Age,omitempty", &0_i64).element_name(), "Age");
    }

    #[test]
    fn test_should_recognize_omitempty_modifier() {
        assert!(SoapField::new("Age,omitempty", &0_i64).omit_if_empty());
        assert!(SoapField::new("A,b,omitempty", "x").omit_if_empty());
        assert!(!SoapField::new("Age", &0_i64).omit_if_empty());
        // A field NAMED omitempty is not a modifier.
        assert!(!SoapField::new("omitempty", &0_i64).omit_if_empty());
    }

    struct Manual {
        name: String,
    }

    impl SoapRecord for Manual {
        fn xml_name(&self) -> Option<&str> {
            Some("urn:test Manual")
        }

        fn fields(&self) -> Vec<SoapField> {
            vec![SoapField::new("Name", &self.name)]
        }
    }

    #[test]
    fn test_should_describe_through_references() {
        let record = Manual {
            name: "x".to_owned(),
        };
        let by_ref: &Manual = &record;
        assert_eq!(by_ref.xml_name(), Some("urn:test Manual"));
        assert_eq!(by_ref.fields().len(), 1);

        let boxed: Box<Manual> = Box::new(record);
        assert_eq!(boxed.xml_name(), Some("urn:test Manual"));
    }
}
