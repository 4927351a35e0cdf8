//! Record traits shared by storage, wire mapping and the list pipeline

use crate::core::field::FieldValue;
use uuid::Uuid;

/// A stored record type.
///
/// Every record has a system-assigned UUID and a singular type name used in
/// logs and error messages (e.g. "client", "work_order").
pub trait Record: Clone + Send + Sync + 'static {
    /// Singular type name
    fn entity_type() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;
}

/// A read representation that list operations can filter, search and sort.
///
/// `field_value` is keyed by wire names. Lookup-only keys such as
/// `usuario__last_name` may be answered even when they are not serialized.
pub trait Listable: Send {
    /// Tie-breaker for stable ordering
    fn row_id(&self) -> Uuid;

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

/// A closed set of short codes, such as a work order status.
///
/// Implemented through [`choice_enum!`](crate::choice_enum).
pub trait Choice: Sized + Copy + Send + Sync + 'static {
    /// Every accepted code, in declaration order
    const CODES: &'static [&'static str];

    fn code(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self>;
}
