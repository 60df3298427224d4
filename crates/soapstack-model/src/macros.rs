//! Declarative [`SoapRecord`](crate::SoapRecord) derivation.

/// Declare a struct together with its [`SoapRecord`](crate::SoapRecord)
/// implementation.
///
/// The root metadata string follows the struct name in parentheses;
/// each field carries its tag metadata after `=>`. Field types must
/// implement [`ToFieldValue`](crate::ToFieldValue). The generated
/// struct derives `Debug` and `Clone`.
///
/// ```
/// use soapstack_model::{SoapRecord, soap_record};
///
/// soap_record! {
///     /// A login request body.
///     pub struct LoginRequest("urn:example:auth Login") {
///         pub user: String => "User",
///         pub attempts: i64 => "Attempts,omitempty",
///     }
/// }
///
/// let req = LoginRequest {
///     user: "root".to_owned(),
///     attempts: 0,
/// };
/// assert_eq!(req.xml_name(), Some("urn:example:auth Login"));
/// assert_eq!(req.fields().len(), 2);
/// ```
#[macro_export]
macro_rules! soap_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($xml_name:literal) {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty => $tag:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::SoapRecord for $name {
            fn xml_name(&self) -> ::core::option::Option<&str> {
                ::core::option::Option::Some($xml_name)
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::SoapField> {
                ::std::vec![
                    $($crate::SoapField::new($tag, &self.$field)),*
                ]
            }
        }
    };
}
