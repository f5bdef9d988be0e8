//! Element types - component type plus structural shape.

use super::ComponentType;
use std::fmt;

/// Structural shape of one accessor element.
///
/// The shape groups scalar components into one logical element: a `VEC3`
/// element is three components, a `MAT4` element is sixteen. The full glTF
/// shape set is recognized here so descriptors can carry any tag the
/// document declares; which shapes actually decode is up to each extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// Single scalar
    Scalar,
    /// 2-component vector
    Vec2,
    /// 3-component vector
    Vec3,
    /// 4-component vector
    Vec4,
    /// 2x2 matrix
    Mat2,
    /// 3x3 matrix
    Mat3,
    /// 4x4 matrix
    Mat4,
}

impl ShapeType {
    /// Number of scalar components per element.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 => 4,
            Self::Mat2 => 4,
            Self::Mat3 => 9,
            Self::Mat4 => 16,
        }
    }

    /// Returns the format's tag for this shape.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Vec2 => "VEC2",
            Self::Vec3 => "VEC3",
            Self::Vec4 => "VEC4",
            Self::Mat2 => "MAT2",
            Self::Mat3 => "MAT3",
            Self::Mat4 => "MAT4",
        }
    }

    /// Parse a shape from its tag. Unknown tags yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SCALAR" => Some(Self::Scalar),
            "VEC2" => Some(Self::Vec2),
            "VEC3" => Some(Self::Vec3),
            "VEC4" => Some(Self::Vec4),
            "MAT2" => Some(Self::Mat2),
            "MAT3" => Some(Self::Mat3),
            "MAT4" => Some(Self::Mat4),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// ElementType describes how one accessor element is stored.
///
/// It combines a [`ComponentType`] with a [`ShapeType`]. For example, a
/// position element is Float with shape Vec3, 12 bytes per element.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementType {
    /// The scalar component type
    pub component: ComponentType,
    /// The structural shape
    pub shape: ShapeType,
}

impl ElementType {
    /// Create a new ElementType with given component and shape.
    #[inline]
    pub const fn new(component: ComponentType, shape: ShapeType) -> Self {
        Self { component, shape }
    }

    /// Create a scalar ElementType.
    #[inline]
    pub const fn scalar(component: ComponentType) -> Self {
        Self { component, shape: ShapeType::Scalar }
    }

    /// Returns the total size in bytes for one element - the stride between
    /// successive elements in a tightly packed buffer.
    #[inline]
    pub const fn num_bytes(&self) -> usize {
        self.component.num_bytes() * self.shape.arity()
    }

    // === Common predefined types ===

    pub const VEC3_F32: Self = Self::new(ComponentType::Float, ShapeType::Vec3);
    pub const VEC2_F32: Self = Self::new(ComponentType::Float, ShapeType::Vec2);
    pub const VEC4_F32: Self = Self::new(ComponentType::Float, ShapeType::Vec4);
    pub const MAT4_F32: Self = Self::new(ComponentType::Float, ShapeType::Mat4);

    pub const SCALAR_U8: Self = Self::scalar(ComponentType::UnsignedByte);
    pub const SCALAR_U16: Self = Self::scalar(ComponentType::UnsignedShort);
    pub const SCALAR_U32: Self = Self::scalar(ComponentType::UnsignedInt);
    pub const SCALAR_F32: Self = Self::scalar(ComponentType::Float);
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.shape.name(), self.component.name())
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_arity() {
        assert_eq!(ShapeType::Scalar.arity(), 1);
        assert_eq!(ShapeType::Vec3.arity(), 3);
        assert_eq!(ShapeType::Mat2.arity(), 4);
        assert_eq!(ShapeType::Mat4.arity(), 16);
    }

    #[test]
    fn test_shape_name_roundtrip() {
        for shape in [
            ShapeType::Scalar,
            ShapeType::Vec2,
            ShapeType::Vec3,
            ShapeType::Vec4,
            ShapeType::Mat2,
            ShapeType::Mat3,
            ShapeType::Mat4,
        ] {
            assert_eq!(ShapeType::from_name(shape.name()), Some(shape));
        }
        assert_eq!(ShapeType::from_name("VEC5"), None);
        assert_eq!(ShapeType::from_name("vec3"), None);
    }

    #[test]
    fn test_element_sizes() {
        assert_eq!(ElementType::VEC3_F32.num_bytes(), 12);
        assert_eq!(ElementType::SCALAR_U16.num_bytes(), 2);
        assert_eq!(ElementType::SCALAR_U8.num_bytes(), 1);
        assert_eq!(ElementType::MAT4_F32.num_bytes(), 64);
        assert_eq!(
            ElementType::new(ComponentType::Short, ShapeType::Vec2).num_bytes(),
            4
        );
    }

    #[test]
    fn test_element_display() {
        assert_eq!(format!("{}", ElementType::VEC3_F32), "VEC3(FLOAT)");
        assert_eq!(format!("{}", ElementType::SCALAR_U16), "SCALAR(UNSIGNED_SHORT)");
    }
}
