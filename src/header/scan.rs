// src/header/scan.rs
use crate::header::FragmentHeader;
use crate::types::Endianness;

/// Iterator over every offset in a byte stream where the header magic appears.
///
/// Used to resynchronise on a corrupted or misaligned stream. A hit only means
/// the 4 marker bytes matched; decode at the offset to check the rest.
///
/// ```
/// use fragment_header::{FragmentHeader, HeaderScanner};
///
/// let mut stream = vec![0xFFu8; 3];
/// stream.extend_from_slice(&FragmentHeader::new().to_bytes());
///
/// let offsets: Vec<usize> = HeaderScanner::new(&stream).collect();
/// assert_eq!(offsets, vec![3]);
/// ```
#[derive(Debug, Clone)]
pub struct HeaderScanner<'a> {
    buf: &'a [u8],
    pos: usize,
    pattern: [u8; 4],
}

impl<'a> HeaderScanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_endianness(buf, Endianness::Little)
    }

    pub fn with_endianness(buf: &'a [u8], endianness: Endianness) -> Self {
        let pattern = match endianness {
            Endianness::Little => FragmentHeader::MAGIC.to_le_bytes(),
            Endianness::Big => FragmentHeader::MAGIC.to_be_bytes(),
        };
        HeaderScanner { buf, pos: 0, pattern }
    }
}

impl<'a> Iterator for HeaderScanner<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let rest = self.buf.get(self.pos..)?;
        let hit = rest.windows(self.pattern.len()).position(|w| w == self.pattern)?;
        let offset = self.pos + hit;
        self.pos = offset + 1;
        Some(offset)
    }
}

/// Offset of the first header marker in `buf`
pub fn find_header(buf: &[u8], endianness: Endianness) -> Option<usize> {
    HeaderScanner::with_endianness(buf, endianness).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_at_offsets() {
        let header = FragmentHeader::new().to_bytes();

        assert_eq!(find_header(&header, Endianness::Little), Some(0));

        let mut stream = vec![0u8; 13];
        stream.extend_from_slice(&header);
        assert_eq!(find_header(&stream, Endianness::Little), Some(13));
        assert_eq!(find_header(&stream, Endianness::Big), None);
    }

    #[test]
    fn test_scan_multiple_headers() {
        let header = FragmentHeader::new();
        let mut stream = Vec::new();
        stream.extend_from_slice(&header.to_bytes());
        stream.extend_from_slice(&[1, 2, 3]);
        stream.extend_from_slice(&header.to_bytes());

        let offsets: Vec<usize> = HeaderScanner::new(&stream).collect();
        assert_eq!(offsets, vec![0, FragmentHeader::SIZE + 3]);

        for offset in offsets {
            assert!(FragmentHeader::from_bytes(&stream[offset..]).is_ok());
        }
    }

    #[test]
    fn test_big_endian_scan() {
        let bytes = FragmentHeader::new().to_bytes_with(Endianness::Big);
        let mut stream = vec![0xEE; 2];
        stream.extend_from_slice(&bytes);
        let offsets: Vec<usize> = HeaderScanner::with_endianness(&stream, Endianness::Big).collect();
        assert_eq!(offsets, vec![2]);
    }

    #[test]
    fn test_short_and_empty_input() {
        assert_eq!(find_header(&[], Endianness::Little), None);
        assert_eq!(find_header(&[0x22, 0x22, 0x11], Endianness::Little), None);
    }
}
