//! Tuple dictionary encoding and decoding for configuration messages.
//!
//! Dictionary format:
//! - COUNT (1 byte): number of tuples
//! - per tuple:
//!   - KEY (4 bytes, little endian): message id
//!   - TYPE (1 byte): 0 byte array, 1 C string, 2 unsigned int, 3 signed int
//!   - LENGTH (2 bytes, little endian): value length
//!   - VALUE (LENGTH bytes)
//!
//! Integers are 1, 2 or 4 bytes wide. C strings carry their NUL terminator
//! on the wire.

use heapless::Vec;

/// Maximum tuples in one dictionary
pub const MAX_TUPLES: usize = 16;

/// Maximum byte array / string value size
pub const MAX_VALUE_SIZE: usize = 64;

/// Tuple header size (KEY + TYPE + LENGTH)
pub const TUPLE_HEADER_SIZE: usize = 4 + 1 + 2;

/// Errors that can occur during dictionary decoding or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// Input ended in the middle of a tuple
    Truncated,
    /// Unknown tuple type byte
    UnknownType(u8),
    /// Integer tuple with a width other than 1, 2 or 4
    InvalidLength,
    /// More tuples than `MAX_TUPLES`
    TooManyTuples,
    /// Value exceeds `MAX_VALUE_SIZE`
    ValueTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// Wire type of a tuple value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TupleType {
    ByteArray = 0,
    CString = 1,
    UInt = 2,
    Int = 3,
}

impl TupleType {
    /// Parse a type byte
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(TupleType::ByteArray),
            1 => Some(TupleType::CString),
            2 => Some(TupleType::UInt),
            3 => Some(TupleType::Int),
            _ => None,
        }
    }
}

/// A decoded tuple value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TupleValue {
    /// Raw bytes
    Bytes(Vec<u8, MAX_VALUE_SIZE>),
    /// String bytes without the NUL terminator
    CString(Vec<u8, MAX_VALUE_SIZE>),
    /// Unsigned integer (any wire width)
    UInt(u32),
    /// Signed integer (any wire width, sign extended)
    Int(i32),
}

impl TupleValue {
    fn tuple_type(&self) -> TupleType {
        match self {
            TupleValue::Bytes(_) => TupleType::ByteArray,
            TupleValue::CString(_) => TupleType::CString,
            TupleValue::UInt(_) => TupleType::UInt,
            TupleValue::Int(_) => TupleType::Int,
        }
    }

    /// Length of the value on the wire
    fn wire_len(&self) -> usize {
        match self {
            TupleValue::Bytes(bytes) => bytes.len(),
            TupleValue::CString(bytes) => bytes.len() + 1,
            TupleValue::UInt(_) | TupleValue::Int(_) => 4,
        }
    }

    fn decode(tuple_type: TupleType, raw: &[u8]) -> Result<Self, DictError> {
        match tuple_type {
            TupleType::ByteArray => Vec::from_slice(raw)
                .map(TupleValue::Bytes)
                .map_err(|_| DictError::ValueTooLarge),
            TupleType::CString => {
                // Stop at the first NUL; a missing terminator is tolerated
                let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
                Vec::from_slice(&raw[..end])
                    .map(TupleValue::CString)
                    .map_err(|_| DictError::ValueTooLarge)
            }
            TupleType::UInt => match *raw {
                [a] => Ok(TupleValue::UInt(a as u32)),
                [a, b] => Ok(TupleValue::UInt(u16::from_le_bytes([a, b]) as u32)),
                [a, b, c, d] => Ok(TupleValue::UInt(u32::from_le_bytes([a, b, c, d]))),
                _ => Err(DictError::InvalidLength),
            },
            TupleType::Int => match *raw {
                [a] => Ok(TupleValue::Int(a as i8 as i32)),
                [a, b] => Ok(TupleValue::Int(i16::from_le_bytes([a, b]) as i32)),
                [a, b, c, d] => Ok(TupleValue::Int(i32::from_le_bytes([a, b, c, d]))),
                _ => Err(DictError::InvalidLength),
            },
        }
    }

    fn encode_into(&self, out: &mut [u8]) {
        match self {
            TupleValue::Bytes(bytes) => out.copy_from_slice(bytes),
            TupleValue::CString(bytes) => {
                out[..bytes.len()].copy_from_slice(bytes);
                out[bytes.len()] = 0;
            }
            TupleValue::UInt(value) => out.copy_from_slice(&value.to_le_bytes()),
            TupleValue::Int(value) => out.copy_from_slice(&value.to_le_bytes()),
        }
    }
}

/// A single key/value entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    /// Message id
    pub key: u32,
    /// Decoded value
    pub value: TupleValue,
}

impl Tuple {
    /// Create a signed integer tuple
    pub fn int(key: u32, value: i32) -> Self {
        Self {
            key,
            value: TupleValue::Int(value),
        }
    }

    /// Create an unsigned integer tuple
    pub fn uint(key: u32, value: u32) -> Self {
        Self {
            key,
            value: TupleValue::UInt(value),
        }
    }

    /// Create a string tuple
    pub fn cstring(key: u32, text: &str) -> Result<Self, DictError> {
        let bytes = Vec::from_slice(text.as_bytes()).map_err(|_| DictError::ValueTooLarge)?;
        Ok(Self {
            key,
            value: TupleValue::CString(bytes),
        })
    }

    /// Read the value as a 32-bit signed integer
    ///
    /// Unsigned values are reinterpreted bit for bit. Strings and byte
    /// arrays have no integer reading.
    pub fn as_i32(&self) -> Option<i32> {
        match self.value {
            TupleValue::Int(value) => Some(value),
            TupleValue::UInt(value) => Some(value as i32),
            _ => None,
        }
    }

    /// Read the value as text
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            TupleValue::CString(bytes) => core::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }
}

/// An ordered collection of tuples
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self { tuples: Vec::new() }
    }

    /// Append a tuple
    pub fn push(&mut self, tuple: Tuple) -> Result<(), DictError> {
        self.tuples.push(tuple).map_err(|_| DictError::TooManyTuples)
    }

    /// Find the first tuple with the given key
    pub fn find(&self, key: u32) -> Option<&Tuple> {
        self.tuples.iter().find(|t| t.key == key)
    }

    /// Iterate over tuples in wire order
    pub fn iter(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter()
    }

    /// Number of tuples
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Check whether the dictionary holds no tuples
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Decode a dictionary from bytes
    ///
    /// Bytes after the last declared tuple are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, DictError> {
        let (&count, mut rest) = bytes.split_first().ok_or(DictError::Truncated)?;
        if count as usize > MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }

        let mut dict = Self::new();
        for _ in 0..count {
            if rest.len() < TUPLE_HEADER_SIZE {
                return Err(DictError::Truncated);
            }
            let key = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
            let tuple_type = TupleType::from_u8(rest[4]).ok_or(DictError::UnknownType(rest[4]))?;
            let len = u16::from_le_bytes([rest[5], rest[6]]) as usize;
            rest = &rest[TUPLE_HEADER_SIZE..];

            if rest.len() < len {
                return Err(DictError::Truncated);
            }
            let (raw, tail) = rest.split_at(len);
            let value = TupleValue::decode(tuple_type, raw)?;
            dict.push(Tuple { key, value })?;
            rest = tail;
        }

        Ok(dict)
    }

    /// Size of the encoded dictionary in bytes
    pub fn encoded_len(&self) -> usize {
        1 + self
            .tuples
            .iter()
            .map(|t| TUPLE_HEADER_SIZE + t.value.wire_len())
            .sum::<usize>()
    }

    /// Encode this dictionary into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, DictError> {
        let total = self.encoded_len();
        if buffer.len() < total {
            return Err(DictError::BufferTooSmall);
        }

        buffer[0] = self.tuples.len() as u8;
        let mut offset = 1;
        for tuple in &self.tuples {
            let len = tuple.value.wire_len();
            buffer[offset..offset + 4].copy_from_slice(&tuple.key.to_le_bytes());
            buffer[offset + 4] = tuple.value.tuple_type() as u8;
            buffer[offset + 5..offset + 7].copy_from_slice(&(len as u16).to_le_bytes());
            offset += TUPLE_HEADER_SIZE;
            tuple.value.encode_into(&mut buffer[offset..offset + len]);
            offset += len;
        }

        Ok(total)
    }
}
