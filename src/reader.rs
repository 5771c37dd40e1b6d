//! Bounds-checked cursor over a byte slice.

use std::marker::PhantomData;

use zerocopy::byteorder;

use crate::{ByteOrder, Error, Result, cold_path};

/// A position-tracking reader over a byte slice.
///
/// All multi-byte reads are interpreted in the byte order `O`. Every read
/// advances the position past the consumed bytes on success; on failure it
/// returns [`Error::EndOfFile`] with the offset at which the read started,
/// and the reader must not be reused.
pub struct Reader<'s, O: ByteOrder> {
    input: &'s [u8],
    pos: usize,
    marker: PhantomData<O>,
}

impl<'s, O: ByteOrder> Reader<'s, O> {
    pub fn new(input: &'s [u8]) -> Self {
        Self {
            input,
            pos: 0,
            marker: PhantomData,
        }
    }

    /// Current offset from the start of the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        match self.input[self.pos..].first_chunk::<N>() {
            Some(chunk) => {
                self.pos += N;
                Ok(*chunk)
            }
            None => {
                cold_path();
                Err(Error::EndOfFile(self.pos))
            }
        }
    }

    /// Consumes `len` bytes and returns them as a slice of the input.
    pub fn get_slice(&mut self, len: usize) -> Result<&'s [u8]> {
        let end = self.pos.checked_add(len);
        match end.and_then(|end| self.input.get(self.pos..end)) {
            Some(slice) => {
                self.pos += len;
                Ok(slice)
            }
            None => {
                cold_path();
                Err(Error::EndOfFile(self.pos))
            }
        }
    }

    #[inline]
    pub fn get_u8(&mut self) -> Result<u8> {
        let [byte] = self.take()?;
        Ok(byte)
    }

    #[inline]
    pub fn get_i8(&mut self) -> Result<i8> {
        Ok(self.get_u8()? as i8)
    }

    #[inline]
    pub fn get_u16(&mut self) -> Result<u16> {
        Ok(byteorder::U16::<O>::from_bytes(self.take()?).get())
    }

    #[inline]
    pub fn get_i16(&mut self) -> Result<i16> {
        Ok(byteorder::I16::<O>::from_bytes(self.take()?).get())
    }

    #[inline]
    pub fn get_u32(&mut self) -> Result<u32> {
        Ok(byteorder::U32::<O>::from_bytes(self.take()?).get())
    }

    #[inline]
    pub fn get_i32(&mut self) -> Result<i32> {
        Ok(byteorder::I32::<O>::from_bytes(self.take()?).get())
    }

    #[inline]
    pub fn get_i64(&mut self) -> Result<i64> {
        Ok(byteorder::I64::<O>::from_bytes(self.take()?).get())
    }

    #[inline]
    pub fn get_f32(&mut self) -> Result<f32> {
        Ok(byteorder::F32::<O>::from_bytes(self.take()?).get())
    }

    #[inline]
    pub fn get_f64(&mut self) -> Result<f64> {
        Ok(byteorder::F64::<O>::from_bytes(self.take()?).get())
    }
}

#[cfg(test)]
mod tests {
    use zerocopy::{BigEndian, LittleEndian};

    use super::*;

    #[test]
    fn reads_advance_position() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut reader = Reader::<BigEndian>::new(&data);
        assert_eq!(reader.get_u8().unwrap(), 0x01);
        assert_eq!(reader.get_u32().unwrap(), 0x02030405);
        assert_eq!(reader.position(), 5);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn byte_order_is_respected() {
        let data = [0x01, 0x02];
        assert_eq!(Reader::<BigEndian>::new(&data).get_i16().unwrap(), 0x0102);
        assert_eq!(
            Reader::<LittleEndian>::new(&data).get_i16().unwrap(),
            0x0201
        );
    }

    #[test]
    fn short_read_reports_start_offset() {
        let data = [0x01, 0x02];
        let mut reader = Reader::<BigEndian>::new(&data);
        reader.get_u8().unwrap();
        assert_eq!(reader.get_u32(), Err(Error::EndOfFile(1)));
    }

    #[test]
    fn slice_read_is_bounds_checked() {
        let data = [0xAA, 0xBB, 0xCC];
        let mut reader = Reader::<BigEndian>::new(&data);
        assert_eq!(reader.get_slice(2).unwrap(), &[0xAA, 0xBB]);
        assert_eq!(reader.get_slice(2), Err(Error::EndOfFile(2)));
    }
}
