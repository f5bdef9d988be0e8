//! Sequential little-endian byte reading.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::util::{Error, Result};

/// Sequential little-endian reader over an owned byte copy.
///
/// glTF binary buffers are little-endian regardless of host byte order, so
/// endianness is normalized here, exactly once, right after the bytes are
/// resolved. Reads advance an internal cursor monotonically; there is no
/// seeking, matching the row-major layout of the source data. A short read
/// maps to [`Error::BufferTooShort`].
#[derive(Debug)]
pub struct LeReader {
    inner: Cursor<Vec<u8>>,
}

impl LeReader {
    /// Take ownership of a resolved byte copy.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { inner: Cursor::new(bytes) }
    }

    /// Total length of the underlying bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    /// True if the underlying byte copy is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.get_ref().is_empty()
    }

    /// Bytes left in front of the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.inner.position() as usize)
    }

    /// Read one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let available = self.remaining();
        self.inner
            .read_u8()
            .map_err(|_| Error::BufferTooShort { needed: 1, available })
    }

    /// Read one signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        let available = self.remaining();
        self.inner
            .read_i8()
            .map_err(|_| Error::BufferTooShort { needed: 1, available })
    }

    /// Read one little-endian u16.
    pub fn read_u16(&mut self) -> Result<u16> {
        let available = self.remaining();
        self.inner
            .read_u16::<LittleEndian>()
            .map_err(|_| Error::BufferTooShort { needed: 2, available })
    }

    /// Read one little-endian i16.
    pub fn read_i16(&mut self) -> Result<i16> {
        let available = self.remaining();
        self.inner
            .read_i16::<LittleEndian>()
            .map_err(|_| Error::BufferTooShort { needed: 2, available })
    }

    /// Read one little-endian u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        let available = self.remaining();
        self.inner
            .read_u32::<LittleEndian>()
            .map_err(|_| Error::BufferTooShort { needed: 4, available })
    }

    /// Read one little-endian f32.
    pub fn read_f32(&mut self) -> Result<f32> {
        let available = self.remaining();
        self.inner
            .read_f32::<LittleEndian>()
            .map_err(|_| Error::BufferTooShort { needed: 4, available })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_reads() {
        let mut r = LeReader::new(vec![0x01, 0x00, 0x02, 0x00, 0xff]);
        assert_eq!(r.len(), 5);
        assert_eq!(r.read_u16().unwrap(), 1);
        assert_eq!(r.read_u16().unwrap(), 2);
        assert_eq!(r.remaining(), 1);
        assert_eq!(r.read_u8().unwrap(), 255);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_read_f32_le() {
        let mut r = LeReader::new(vec![0x00, 0x00, 0x80, 0x3f]);
        assert_eq!(r.read_f32().unwrap(), 1.0);
    }

    #[test]
    fn test_read_signed() {
        let mut r = LeReader::new(vec![0xff, 0xfe, 0xff]);
        assert_eq!(r.read_i8().unwrap(), -1);
        assert_eq!(r.read_i16().unwrap(), -2);
    }

    #[test]
    fn test_read_u32_le() {
        let mut r = LeReader::new(vec![0x01, 0x02, 0x03, 0x04]);
        assert_eq!(r.read_u32().unwrap(), 0x0403_0201);
    }

    #[test]
    fn test_short_read() {
        let mut r = LeReader::new(vec![0x01, 0x02]);
        assert!(matches!(
            r.read_u32(),
            Err(Error::BufferTooShort { needed: 4, available: 2 })
        ));
    }

    #[test]
    fn test_empty() {
        let r = LeReader::new(Vec::new());
        assert!(r.is_empty());
        assert_eq!(r.remaining(), 0);
    }
}
