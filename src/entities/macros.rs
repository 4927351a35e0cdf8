//! Macros for reducing boilerplate when defining entities

/// Declare an enumeration stored and exchanged as a short code.
///
/// Generates the enum with serde renames for each code, a `Default`
/// (mark one variant `#[default]`), `Display` and the
/// [`Choice`](crate::core::Choice) implementation.
///
/// # Example
/// ```rust,ignore
/// choice_enum! {
///     /// Work order priority
///     pub enum Priority {
///         Low => "BAJ",
///         #[default]
///         Medium => "MED",
///     }
/// }
///
/// assert_eq!(Priority::from_code("BAJ"), Some(Priority::Low));
/// assert_eq!(Priority::default().code(), "MED");
/// ```
#[macro_export]
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Default,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $crate::core::Choice for $name {
            const CODES: &'static [&'static str] = &[$($code),+];

            fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Choice::code(self))
            }
        }

        impl From<$name> for $crate::core::FieldValue {
            fn from(value: $name) -> Self {
                $crate::core::FieldValue::String(
                    $crate::core::Choice::code(&value).to_string(),
                )
            }
        }
    };
}
