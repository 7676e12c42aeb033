//! SSH wire-format primitives
//!
//! The SSH key formats are built from length-prefixed fields: a big-endian
//! `u32` length followed by that many bytes. The reader here borrows from
//! the input and validates every length against the bytes actually present
//! before slicing, so adversarial length fields cannot trigger allocation
//! or out-of-bounds reads.

use sshring_api::{Error, Result};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Cursor over an SSH wire-format buffer.
pub struct SshReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SshReader<'a> {
    /// Wrap a buffer for reading
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether the whole buffer has been consumed
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read a big-endian u32
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_exact(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read exactly `len` raw bytes
    pub fn read_exact(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::MalformedKey {
                context: "SshReader::read_exact",
                #[cfg(feature = "std")]
                message: format!("field of {} bytes exceeds {} remaining", len, self.remaining()),
            });
        }
        let out = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Read a length-prefixed byte string
    pub fn read_string(&mut self) -> Result<&'a [u8]> {
        let len = self.read_u32()? as usize;
        self.read_exact(len)
    }

    /// Read a length-prefixed UTF-8 string
    pub fn read_str(&mut self) -> Result<&'a str> {
        let bytes = self.read_string()?;
        core::str::from_utf8(bytes).map_err(|_| Error::MalformedKey {
            context: "SshReader::read_str",
            #[cfg(feature = "std")]
            message: "field is not valid UTF-8".into(),
        })
    }

    /// Read a length-prefixed multiple-precision integer, enforcing the
    /// canonical encoding: positive, no superfluous leading zero octet.
    pub fn read_mpint(&mut self) -> Result<&'a [u8]> {
        let bytes = self.read_string()?;
        if bytes.is_empty() {
            return Err(Error::MalformedKey {
                context: "SshReader::read_mpint",
                #[cfg(feature = "std")]
                message: "empty mpint".into(),
            });
        }
        if bytes[0] & 0x80 != 0 {
            // Would decode as negative; RSA parameters are positive
            return Err(Error::MalformedKey {
                context: "SshReader::read_mpint",
                #[cfg(feature = "std")]
                message: "negative mpint".into(),
            });
        }
        if bytes[0] == 0 && (bytes.len() == 1 || bytes[1] & 0x80 == 0) {
            return Err(Error::MalformedKey {
                context: "SshReader::read_mpint",
                #[cfg(feature = "std")]
                message: "non-minimal mpint encoding".into(),
            });
        }
        Ok(bytes)
    }

    /// Fail unless every byte has been consumed
    pub fn finish(&self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::MalformedKey {
                context: "SshReader::finish",
                #[cfg(feature = "std")]
                message: format!("{} trailing bytes", self.remaining()),
            })
        }
    }
}

/// Builder for SSH wire-format buffers.
#[derive(Default)]
pub struct SshWriter {
    buf: Vec<u8>,
}

impl SshWriter {
    /// Start an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a big-endian u32
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Append a length-prefixed byte string
    pub fn write_string(&mut self, bytes: &[u8]) {
        self.write_u32(bytes.len() as u32);
        self.buf.extend_from_slice(bytes);
    }

    /// Append a length-prefixed UTF-8 string
    pub fn write_str(&mut self, s: &str) {
        self.write_string(s.as_bytes());
    }

    /// Finish and take the buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_round_trip() {
        let mut w = SshWriter::new();
        w.write_str("ssh-ed25519");
        w.write_string(&[0xAB; 32]);
        let buf = w.into_bytes();

        let mut r = SshReader::new(&buf);
        assert_eq!(r.read_str().unwrap(), "ssh-ed25519");
        assert_eq!(r.read_string().unwrap(), &[0xAB; 32]);
        r.finish().unwrap();
    }

    #[test]
    fn oversized_length_field_is_rejected() {
        // Length claims 1 GiB but only 2 bytes follow
        let buf = [0x40, 0x00, 0x00, 0x00, 0x01, 0x02];
        let mut r = SshReader::new(&buf);
        assert!(matches!(r.read_string(), Err(Error::MalformedKey { .. })));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut w = SshWriter::new();
        w.write_str("x");
        let mut buf = w.into_bytes();
        buf.push(0);
        let mut r = SshReader::new(&buf);
        r.read_str().unwrap();
        assert!(r.finish().is_err());
    }

    #[test]
    fn mpint_rejects_non_minimal_and_negative() {
        for body in [&[0x00u8, 0x7F][..], &[0x80][..], &[][..]] {
            let mut w = SshWriter::new();
            w.write_string(body);
            let buf = w.into_bytes();
            let mut r = SshReader::new(&buf);
            assert!(r.read_mpint().is_err(), "accepted {:02x?}", body);
        }

        // 0x00 prefix is required when the high bit is set
        let mut w = SshWriter::new();
        w.write_string(&[0x00, 0x80, 0x01]);
        let buf = w.into_bytes();
        let mut r = SshReader::new(&buf);
        assert_eq!(r.read_mpint().unwrap(), &[0x00, 0x80, 0x01]);
    }
}
