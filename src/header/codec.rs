// src/header/codec.rs
//! Explicit wire form of [`FragmentHeader`].
//!
//! Fields are packed in declaration order with no padding:
//!
//! | Offset | Width | Field |
//! |---|---|---|
//! | 0 | 4 | marker |
//! | 4 | 4 | version |
//! | 8 | 8 | size |
//! | 16 | 8 | trigger_number |
//! | 24 | 8 | trigger_timestamp |
//! | 32 | 8 | window_offset |
//! | 40 | 8 | window_width |
//! | 48 | 4 | run_number |
//! | 52 | 8 | link_id (apa_number, link_number) |
//! | 60 | 4 | error_bits |
//! | 64 | 4 | fragment_type |
//!
//! Little-endian unless a caller asks otherwise.

use crate::error::{FragmentError, Result};
use crate::header::FragmentHeader;
use crate::types::{Endianness, GeoId};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytes::BufMut;
use log::debug;
use std::io::{Read, Write};

const MARKER_END: usize = 4;
const VERSION_END: usize = 8;

fn encode<B: ByteOrder>(header: &FragmentHeader) -> [u8; FragmentHeader::SIZE] {
    let mut buf = [0u8; FragmentHeader::SIZE];
    B::write_u32(&mut buf[0..4], header.marker);
    B::write_u32(&mut buf[4..8], header.version);
    B::write_u64(&mut buf[8..16], header.size);
    B::write_u64(&mut buf[16..24], header.trigger_number);
    B::write_u64(&mut buf[24..32], header.trigger_timestamp);
    B::write_i64(&mut buf[32..40], header.window_offset);
    B::write_i64(&mut buf[40..48], header.window_width);
    B::write_u32(&mut buf[48..52], header.run_number);
    header.link_id.encode::<B>(&mut buf[52..60]);
    B::write_u32(&mut buf[60..64], header.error_bits);
    B::write_u32(&mut buf[64..68], header.fragment_type);
    buf
}

/// Caller has checked length, marker and version
fn decode_fields<B: ByteOrder>(buf: &[u8]) -> FragmentHeader {
    FragmentHeader {
        marker: B::read_u32(&buf[0..4]),
        version: B::read_u32(&buf[4..8]),
        size: B::read_u64(&buf[8..16]),
        trigger_number: B::read_u64(&buf[16..24]),
        trigger_timestamp: B::read_u64(&buf[24..32]),
        window_offset: B::read_i64(&buf[32..40]),
        window_width: B::read_i64(&buf[40..48]),
        run_number: B::read_u32(&buf[48..52]),
        link_id: GeoId::decode::<B>(&buf[52..60]),
        error_bits: B::read_u32(&buf[60..64]),
        fragment_type: B::read_u32(&buf[64..68]),
    }
}

fn require(buf: &[u8], needed: usize) -> Result<()> {
    if buf.len() < needed {
        return Err(FragmentError::BufferTooShort {
            needed,
            available: buf.len(),
        });
    }
    Ok(())
}

fn check_marker<B: ByteOrder>(buf: &[u8]) -> Result<()> {
    let marker = B::read_u32(&buf[..MARKER_END]);
    FragmentHeader::check_marker(marker).map_err(|e| {
        debug!("rejecting fragment header: marker {:#010x}", marker);
        e
    })
}

fn check_version<B: ByteOrder>(buf: &[u8]) -> Result<()> {
    let version = B::read_u32(&buf[MARKER_END..VERSION_END]);
    FragmentHeader::check_version(version).map_err(|e| {
        debug!("rejecting fragment header: unsupported version {}", version);
        e
    })
}

fn decode<B: ByteOrder>(buf: &[u8]) -> Result<FragmentHeader> {
    require(buf, MARKER_END)?;
    check_marker::<B>(buf)?;
    require(buf, VERSION_END)?;
    check_version::<B>(buf)?;
    require(buf, FragmentHeader::SIZE)?;
    Ok(decode_fields::<B>(&buf[..FragmentHeader::SIZE]))
}

fn read_stream<B: ByteOrder, R: Read>(reader: &mut R) -> Result<FragmentHeader> {
    let mut buf = [0u8; FragmentHeader::SIZE];
    reader.read_exact(&mut buf[..MARKER_END])?;
    check_marker::<B>(&buf)?;
    reader.read_exact(&mut buf[MARKER_END..VERSION_END])?;
    check_version::<B>(&buf)?;
    reader.read_exact(&mut buf[VERSION_END..])?;
    Ok(decode_fields::<B>(&buf))
}

/// Read the marker at the start of `buf` without validating it
pub fn peek_marker(buf: &[u8], endianness: Endianness) -> Option<u32> {
    let bytes = buf.get(..MARKER_END)?;
    Some(match endianness {
        Endianness::Little => LittleEndian::read_u32(bytes),
        Endianness::Big => BigEndian::read_u32(bytes),
    })
}

impl FragmentHeader {
    pub fn to_bytes(&self) -> [u8; FragmentHeader::SIZE] {
        self.to_bytes_with(Endianness::Little)
    }

    pub fn to_bytes_with(&self, endianness: Endianness) -> [u8; FragmentHeader::SIZE] {
        match endianness {
            Endianness::Little => encode::<LittleEndian>(self),
            Endianness::Big => encode::<BigEndian>(self),
        }
    }

    /// Append the encoded header to a `bytes` buffer
    pub fn encode_into<B: BufMut>(&self, buf: &mut B) {
        self.encode_into_with(buf, Endianness::Little)
    }

    pub fn encode_into_with<B: BufMut>(&self, buf: &mut B, endianness: Endianness) {
        buf.put_slice(&self.to_bytes_with(endianness));
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.write_to_with(writer, Endianness::Little)
    }

    pub fn write_to_with<W: Write>(&self, writer: &mut W, endianness: Endianness) -> Result<()> {
        writer.write_all(&self.to_bytes_with(endianness))?;
        Ok(())
    }

    /// Decode a header from the start of `buf`.
    ///
    /// Bytes past [`FragmentHeader::SIZE`] are ignored (they are payload).
    ///
    /// # Errors
    ///
    /// - [`FragmentError::InvalidMarker`] if the first 4 bytes are not the magic
    /// - [`FragmentError::UnsupportedVersion`] if the version is unknown
    /// - [`FragmentError::BufferTooShort`] if `buf` is truncated
    ///
    /// # Example
    ///
    /// ```
    /// use fragment_header::FragmentHeader;
    ///
    /// let mut header = FragmentHeader::new();
    /// header.run_number = 42;
    ///
    /// let bytes = header.to_bytes();
    /// assert_eq!(&bytes[..4], &[0x22, 0x22, 0x11, 0x11]);
    ///
    /// let decoded = FragmentHeader::from_bytes(&bytes).unwrap();
    /// assert_eq!(decoded, header);
    /// ```
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        Self::from_bytes_with(buf, Endianness::Little)
    }

    pub fn from_bytes_with(buf: &[u8], endianness: Endianness) -> Result<Self> {
        match endianness {
            Endianness::Little => decode::<LittleEndian>(buf),
            Endianness::Big => decode::<BigEndian>(buf),
        }
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        Self::read_from_with(reader, Endianness::Little)
    }

    /// Read exactly one header from a stream.
    ///
    /// Marker and version are checked before the rest of the header is read,
    /// so a rejected stream has only consumed the first 4 or 8 bytes.
    pub fn read_from_with<R: Read>(reader: &mut R, endianness: Endianness) -> Result<Self> {
        match endianness {
            Endianness::Little => read_stream::<LittleEndian, R>(reader),
            Endianness::Big => read_stream::<BigEndian, R>(reader),
        }
    }
}
