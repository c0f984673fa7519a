use std::convert::Infallible;

/// Marker returned when a caller-provided buffer cannot hold another digit.
pub struct BufferTooSmall;

/// Little-endian digit accumulator used by the base conversion loops.
pub trait Digits {
    type Error;

    fn push(&mut self, value: u8) -> Result<(), Self::Error>;

    fn digits_mut(&mut self) -> &mut [u8];
}

impl Digits for Vec<u8> {
    type Error = Infallible;

    fn push(&mut self, value: u8) -> Result<(), Infallible> {
        Vec::push(self, value);
        Ok(())
    }

    fn digits_mut(&mut self) -> &mut [u8] {
        self
    }
}

pub struct SliceDigits<'a> {
    slice: &'a mut [u8],
    len: usize,
}

impl<'a> SliceDigits<'a> {
    pub fn new(slice: &'a mut [u8]) -> Self {
        Self { slice, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl Digits for SliceDigits<'_> {
    type Error = BufferTooSmall;

    fn push(&mut self, value: u8) -> Result<(), BufferTooSmall> {
        *self.slice.get_mut(self.len).ok_or(BufferTooSmall)? = value;
        self.len += 1;
        Ok(())
    }

    fn digits_mut(&mut self) -> &mut [u8] {
        &mut self.slice[..self.len]
    }
}
