//! # gltf-accessor
//!
//! Accessor decoding core for the glTF 3D interchange format.
//!
//! Accessors are the format's declarative description of how typed values
//! (vertex positions, triangle indices) are laid out inside shared binary
//! buffers. This crate turns an accessor descriptor plus resolved bytes into
//! typed in-memory arrays, with little-endian normalization and strict
//! bounds checking. Document parsing, the scene-graph object model and
//! rendering live in the embedding application.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (components, shapes, errors, math)
//! - [`buffer`] - Buffer views, byte acquisition, little-endian reading
//! - [`accessor`] - Accessor descriptors and typed extraction
//!
//! ## Example
//!
//! ```
//! use gltf_accessor::prelude::*;
//!
//! let mut buffers = BufferSet::new();
//! // One little-endian float triple
//! let view = buffers.push_whole_buffer(vec![
//!     0x00, 0x00, 0x80, 0x3f, // 1.0
//!     0x00, 0x00, 0x00, 0x40, // 2.0
//!     0x00, 0x00, 0x40, 0x40, // 3.0
//! ]);
//!
//! let mut props = PropertyBag::new();
//! props.insert("bufferView", view as i64);
//! props.insert("componentType", 5126i64);
//! props.insert("count", 1i64);
//! props.insert("type", "VEC3");
//!
//! let accessor = Accessor::from_properties(&props);
//! let positions = accessor.decode_positions(&buffers)?.ok().unwrap();
//! assert_eq!(positions, vec![DVec3::new(1.0, 2.0, 3.0)]);
//! # Ok::<(), gltf_accessor::Error>(())
//! ```

pub mod accessor;
pub mod buffer;
pub mod util;

// Re-export commonly used types
pub use accessor::{Accessor, Decoded, PropertyBag, PropertyValue, Unsupported};
pub use buffer::{BufferSet, BufferView, ViewResolver};
pub use util::{ComponentType, ElementType, Error, Result, ShapeType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accessor::{
        bounds_of, Accessor, Decoded, PropertyBag, PropertyValue, Unsupported,
    };
    pub use crate::buffer::{BufferSet, BufferView, LeReader, ViewResolver};
    pub use crate::util::{
        BBox3d, ComponentType, DVec3, ElementType, Error, Result, ShapeType,
    };
}
