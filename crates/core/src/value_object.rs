//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value; aging rules follow this by returning a fresh item each day
/// instead of mutating their input.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Item { name: String, sell_in: i32, quality: i32 }
///
/// impl ValueObject for Item {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
