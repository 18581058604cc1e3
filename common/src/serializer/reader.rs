use crate::crypto::{Hash, HASH_SIZE};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderError {
    #[error("Not enough bytes to read: requested {requested}, remaining {remaining}")]
    NotEnoughBytes { requested: usize, remaining: usize },

    #[error("Invalid value")]
    InvalidValue,

    #[error("Invalid size")]
    InvalidSize,

    #[error("Invalid UTF-8 string")]
    InvalidString,

    #[error("Invalid hex")]
    InvalidHex,
}

pub struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn read_slice(&mut self, n: usize) -> Result<&'a [u8], ReaderError> {
        if n > self.bytes.len() {
            return Err(ReaderError::NotEnoughBytes {
                requested: n,
                remaining: self.bytes.len(),
            });
        }

        let (head, tail) = self.bytes.split_at(n);
        self.bytes = tail;
        Ok(head)
    }

    pub fn read_u8(&mut self) -> Result<u8, ReaderError> {
        Ok(self.read_slice(1)?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, ReaderError> {
        let bytes: [u8; 4] = self
            .read_slice(4)?
            .try_into()
            .map_err(|_| ReaderError::InvalidSize)?;
        Ok(u32::from_be_bytes(bytes))
    }

    pub fn read_u64(&mut self) -> Result<u64, ReaderError> {
        let bytes: [u8; 8] = self
            .read_slice(8)?
            .try_into()
            .map_err(|_| ReaderError::InvalidSize)?;
        Ok(u64::from_be_bytes(bytes))
    }

    pub fn read_bool(&mut self) -> Result<bool, ReaderError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(ReaderError::InvalidValue),
        }
    }

    pub fn read_hash(&mut self) -> Result<Hash, ReaderError> {
        let bytes: [u8; HASH_SIZE] = self
            .read_slice(HASH_SIZE)?
            .try_into()
            .map_err(|_| ReaderError::InvalidSize)?;
        Ok(Hash::new(bytes))
    }

    pub fn read_bytes(&mut self) -> Result<Vec<u8>, ReaderError> {
        let len = self.read_u32()? as usize;
        Ok(self.read_slice(len)?.to_vec())
    }

    pub fn read_string(&mut self) -> Result<String, ReaderError> {
        let bytes = self.read_bytes()?;
        String::from_utf8(bytes).map_err(|_| ReaderError::InvalidString)
    }

    // Remaining bytes not yet consumed
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
