//! Accessor descriptors and typed extraction.
//!
//! An accessor describes how a span of a buffer view is interpreted as an
//! array of typed elements: component type, element shape, element count,
//! byte offset. [`Accessor::from_properties`] builds the immutable
//! descriptor from parser-provided properties; [`Accessor::decode_positions`]
//! and [`Accessor::decode_indices`] materialize typed arrays from the bytes
//! a [`ViewResolver`] hands back.
//!
//! Decoding is stateless and side-effect free: every call re-resolves and
//! re-reads, nothing is cached, and the source bytes are never mutated.
//! Descriptors are plain data, safe to share across threads.

mod decoded;
mod property;

pub use decoded::{Decoded, Unsupported};
pub use property::{PropertyBag, PropertyValue};

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::buffer::{LeReader, ViewResolver};
use crate::util::{BBox3d, ComponentType, DVec3, ElementType, Error, Result, ShapeType};

/// Property key: buffer view index.
pub const KEY_BUFFER_VIEW: &str = "bufferView";
/// Property key: extra byte offset into the view.
pub const KEY_BYTE_OFFSET: &str = "byteOffset";
/// Property key: component type enumerant.
pub const KEY_COMPONENT_TYPE: &str = "componentType";
/// Property key: element count.
pub const KEY_COUNT: &str = "count";
/// Property key: element shape tag.
pub const KEY_TYPE: &str = "type";
/// Property key: per-component maximum bounds.
pub const KEY_MAX: &str = "max";
/// Property key: per-component minimum bounds.
pub const KEY_MIN: &str = "min";

/// Per-component bounds; inline up to vector width.
type BoundsArray = SmallVec<[f64; 4]>;

/// Immutable accessor descriptor.
///
/// Built once from parsed document properties and never mutated afterwards.
/// Construction does not validate field ranges - consistency against the
/// actual buffer is checked at decode time, when the resolved window length
/// is known.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accessor {
    buffer_view: usize,
    byte_offset: usize,
    component: Option<ComponentType>,
    count: usize,
    shape: Option<ShapeType>,
    min: Option<BoundsArray>,
    max: Option<BoundsArray>,
}

impl Accessor {
    /// Build a descriptor from an ordered property bag.
    ///
    /// Each recognized key is assigned through its typed coercion.
    /// Unrecognized keys are reported and skipped - unknown fields never
    /// abort construction. Missing numeric fields stay zero; a missing or
    /// unrecognized `type` or `componentType` leaves the field unset, and
    /// later decodes report the combination as unsupported instead of
    /// failing here.
    pub fn from_properties(properties: &PropertyBag) -> Self {
        let mut accessor = Self::default();
        for (name, value) in properties.iter() {
            match name {
                KEY_BUFFER_VIEW => accessor.buffer_view = value.as_usize().unwrap_or(0),
                KEY_BYTE_OFFSET => accessor.byte_offset = value.as_usize().unwrap_or(0),
                KEY_COMPONENT_TYPE => {
                    accessor.component = value
                        .as_i64()
                        .and_then(|code| u32::try_from(code).ok())
                        .and_then(ComponentType::from_code);
                }
                KEY_COUNT => accessor.count = value.as_usize().unwrap_or(0),
                KEY_TYPE => accessor.shape = value.as_str().and_then(ShapeType::from_name),
                KEY_MIN => accessor.min = value.as_f64_array().map(BoundsArray::from_slice),
                KEY_MAX => accessor.max = value.as_f64_array().map(BoundsArray::from_slice),
                _ => debug!("ignoring unrecognized accessor property {}", name),
            }
        }
        accessor
    }

    /// Index of the buffer view this accessor reads from.
    #[inline]
    pub fn buffer_view(&self) -> usize {
        self.buffer_view
    }

    /// Extra byte offset into the view window.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Component type, if the document declared a recognized enumerant.
    #[inline]
    pub fn component(&self) -> Option<ComponentType> {
        self.component
    }

    /// Number of elements to extract.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Element shape, if the document declared a recognized tag.
    #[inline]
    pub fn shape(&self) -> Option<ShapeType> {
        self.shape
    }

    /// Declared per-component minimum bounds.
    pub fn min(&self) -> Option<&[f64]> {
        self.min.as_deref()
    }

    /// Declared per-component maximum bounds.
    pub fn max(&self) -> Option<&[f64]> {
        self.max.as_deref()
    }

    /// The element type, when both component and shape are known.
    pub fn element_type(&self) -> Option<ElementType> {
        Some(ElementType::new(self.component?, self.shape?))
    }

    /// Total bytes implied by `count` elements, when the element type is
    /// known.
    pub fn byte_length(&self) -> Option<usize> {
        self.element_type()
            .map(|element| self.count.saturating_mul(element.num_bytes()))
    }

    /// Declared min/max as a bounding box, when this is a VEC3 accessor
    /// with three-component bounds.
    pub fn declared_bounds(&self) -> Option<BBox3d> {
        if self.shape != Some(ShapeType::Vec3) {
            return None;
        }
        let min = self.min.as_deref()?;
        let max = self.max.as_deref()?;
        if min.len() != 3 || max.len() != 3 {
            return None;
        }
        Some(BBox3d::new(
            DVec3::new(min[0], min[1], min[2]),
            DVec3::new(max[0], max[1], max[2]),
        ))
    }

    /// Resolve this accessor's window into a little-endian reader.
    fn resolve(&self, resolver: &impl ViewResolver) -> Result<LeReader> {
        let bytes = resolver.view_bytes(self.buffer_view, self.byte_offset)?;
        Ok(LeReader::new(bytes))
    }

    /// Fail if the resolved window cannot hold `count` elements.
    fn check_window(&self, reader: &LeReader, element: ElementType) -> Result<()> {
        let needed = self.count.saturating_mul(element.num_bytes());
        let available = reader.remaining();
        if needed > available {
            return Err(Error::BufferTooShort { needed, available });
        }
        Ok(())
    }

    /// Decode this accessor as an array of 3-component position vectors.
    ///
    /// Supported combination: shape `VEC3` with component `FLOAT`. Reads
    /// exactly `count` float triples sequentially, widening each to f64;
    /// output order equals buffer order. Any other combination is a
    /// recoverable [`Unsupported`] outcome with no partial output. A window
    /// shorter than `count` elements is a hard error: the document is
    /// truncated.
    pub fn decode_positions(&self, resolver: &impl ViewResolver) -> Result<Decoded<Vec<DVec3>>> {
        match self.shape {
            Some(ShapeType::Vec3) => {}
            shape @ (Some(ShapeType::Scalar)
            | Some(ShapeType::Vec2)
            | Some(ShapeType::Vec4)
            | Some(ShapeType::Mat2)
            | Some(ShapeType::Mat3)
            | Some(ShapeType::Mat4)
            | None) => {
                let outcome = Unsupported::Shape { shape };
                warn!("{}", outcome);
                return Ok(Decoded::Unsupported(outcome));
            }
        }

        match self.component {
            Some(ComponentType::Float) => {
                let mut reader = self.resolve(resolver)?;
                self.check_window(&reader, ElementType::VEC3_F32)?;
                let mut positions = Vec::with_capacity(self.count);
                for _ in 0..self.count {
                    let x = reader.read_f32()?;
                    let y = reader.read_f32()?;
                    let z = reader.read_f32()?;
                    positions.push(DVec3::new(x as f64, y as f64, z as f64));
                }
                Ok(Decoded::Values(positions))
            }
            component @ (Some(ComponentType::Byte)
            | Some(ComponentType::UnsignedByte)
            | Some(ComponentType::Short)
            | Some(ComponentType::UnsignedShort)
            | Some(ComponentType::UnsignedInt)
            | None) => {
                let outcome = Unsupported::Component {
                    shape: ShapeType::Vec3,
                    component,
                };
                warn!("{}", outcome);
                Ok(Decoded::Unsupported(outcome))
            }
        }
    }

    /// Decode this accessor as an array of indices.
    ///
    /// Supported components: `UNSIGNED_SHORT` and `UNSIGNED_BYTE`, each
    /// widened to u32 without sign extension. Extraction is shape-agnostic.
    /// Output order equals buffer order exactly - index buffers encode
    /// primitive topology, so reordering would corrupt geometry. Any other
    /// component is a recoverable [`Unsupported`] outcome with no partial
    /// output.
    pub fn decode_indices(&self, resolver: &impl ViewResolver) -> Result<Decoded<Vec<u32>>> {
        match self.component {
            Some(ComponentType::UnsignedShort) => {
                let mut reader = self.resolve(resolver)?;
                self.check_window(&reader, ElementType::SCALAR_U16)?;
                let mut indices = Vec::with_capacity(self.count);
                for _ in 0..self.count {
                    indices.push(reader.read_u16()? as u32);
                }
                Ok(Decoded::Values(indices))
            }
            Some(ComponentType::UnsignedByte) => {
                let mut reader = self.resolve(resolver)?;
                self.check_window(&reader, ElementType::SCALAR_U8)?;
                let mut indices = Vec::with_capacity(self.count);
                for _ in 0..self.count {
                    indices.push(reader.read_u8()? as u32);
                }
                Ok(Decoded::Values(indices))
            }
            component @ (Some(ComponentType::Byte)
            | Some(ComponentType::Short)
            | Some(ComponentType::UnsignedInt)
            | Some(ComponentType::Float)
            | None) => {
                let outcome = Unsupported::Indices { component };
                warn!("{}", outcome);
                Ok(Decoded::Unsupported(outcome))
            }
        }
    }
}

/// Axis-aligned bounds of a decoded position array.
///
/// Lets loaders cross-check an accessor's declared min/max against what was
/// actually decoded.
pub fn bounds_of(positions: &[DVec3]) -> BBox3d {
    let mut bounds = BBox3d::EMPTY;
    for &p in positions {
        bounds.expand_by_point(p);
    }
    bounds
}
