//! Decode outcomes.

use std::fmt;

use crate::util::{ComponentType, ShapeType};

/// Outcome of one accessor decode.
///
/// Resolution failures (bad view index, truncated window) are `Err` at the
/// call site. This type only distinguishes fully decoded values from
/// combinations the decoder does not implement; an unsupported outcome
/// carries no partial data, so absence of values always means "not
/// decodable", never "zero elements by design".
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded<T> {
    /// Fully decoded values, in buffer order.
    Values(T),
    /// The requested (shape, component) combination is not implemented.
    Unsupported(Unsupported),
}

impl<T> Decoded<T> {
    /// True if this outcome carries decoded values.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    /// The decoded values, discarding an unsupported marker.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Values(values) => Some(values),
            Self::Unsupported(_) => None,
        }
    }

    /// Borrow the decoded values, if any.
    pub fn values(&self) -> Option<&T> {
        match self {
            Self::Values(values) => Some(values),
            Self::Unsupported(_) => None,
        }
    }

    /// Borrow the unsupported marker, if any.
    pub fn unsupported(&self) -> Option<&Unsupported> {
        match self {
            Self::Values(_) => None,
            Self::Unsupported(unsupported) => Some(unsupported),
        }
    }
}

/// Which part of a requested combination is not implemented.
///
/// Carries the offending pair so callers can decide policy (log, skip the
/// primitive, abort the load) instead of the decoder printing and returning
/// null. `None` fields mean the descriptor never carried a recognized value
/// for that slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsupported {
    /// Vector extraction over a shape other than VEC3.
    Shape {
        shape: Option<ShapeType>,
    },
    /// Vector extraction over a component type other than FLOAT.
    Component {
        shape: ShapeType,
        component: Option<ComponentType>,
    },
    /// Index extraction over a component type other than the two unsigned
    /// widths.
    Indices {
        component: Option<ComponentType>,
    },
}

fn write_component(f: &mut fmt::Formatter<'_>, component: Option<ComponentType>) -> fmt::Result {
    match component {
        Some(c) => write!(f, "{} ({})", c.name(), c.code()),
        None => write!(f, "<unset>"),
    }
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { shape } => match shape {
                Some(shape) => write!(f, "unsupported accessor type {}", shape),
                None => write!(f, "unsupported accessor type <unset>"),
            },
            Self::Component { shape, component } => {
                write!(f, "unsupported buffer component type ")?;
                write_component(f, *component)?;
                write!(f, " for {}", shape)
            }
            Self::Indices { component } => {
                write!(f, "unsupported indices component type ")?;
                write_component(f, *component)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_accessors() {
        let d: Decoded<Vec<u32>> = Decoded::Values(vec![1, 2, 3]);
        assert!(d.is_supported());
        assert_eq!(d.values(), Some(&vec![1, 2, 3]));
        assert_eq!(d.ok(), Some(vec![1, 2, 3]));

        let u: Decoded<Vec<u32>> = Decoded::Unsupported(Unsupported::Indices {
            component: Some(ComponentType::Float),
        });
        assert!(!u.is_supported());
        assert!(u.unsupported().is_some());
        assert_eq!(u.ok(), None);
    }

    #[test]
    fn test_unsupported_display() {
        let s = Unsupported::Shape { shape: Some(ShapeType::Vec2) }.to_string();
        assert!(s.contains("VEC2"));

        let s = Unsupported::Component {
            shape: ShapeType::Vec3,
            component: Some(ComponentType::UnsignedInt),
        }
        .to_string();
        assert!(s.contains("UNSIGNED_INT"));
        assert!(s.contains("5125"));
        assert!(s.contains("VEC3"));

        let s = Unsupported::Indices { component: None }.to_string();
        assert!(s.contains("<unset>"));
    }
}
