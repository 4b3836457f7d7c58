use bytes::Bytes;

/// A byte sequence whose textual form is the canonical `0x`-prefixed, even-length, lowercase hex
/// string.
///
/// A `HexBytes` is valid by construction: text only becomes a `HexBytes` through the validation
/// gate ([`HexBytes::parse`], [`FromStr`](std::str::FromStr) or serde), and raw bytes are always
/// representable. Values are immutable; every operation returns a fresh value.
///
/// ## Examples
///
/// | Text       | Bytes          |
/// | ---------- | -------------- |
/// | "0x"       | `[]`           |
/// | "0x00ff"   | `[0x00, 0xff]` |
/// | "0xABcd"   | `[0xab, 0xcd]` |
/// | "0x123"    | Invalid, odd digit count |
/// | "1234"     | Invalid, `0x` is required |
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexBytes(Bytes);

impl HexBytes {
    /// Wraps a raw byte buffer without copying it.
    pub fn from_bytes(bytes: Bytes) -> Self {
        HexBytes(bytes)
    }

    /// Wraps an owned byte vector.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        HexBytes(Bytes::from(bytes))
    }

    /// Unwraps the underlying buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Copies the bytes out into a vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Borrows the bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Renders the canonical `0x`-prefixed lowercase form.
    pub fn hex_string(&self) -> String {
        format!("{:#x}", self)
    }

    pub(crate) fn inner(&self) -> &Bytes {
        &self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        HexBytes::from_vec(bytes)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        HexBytes(Bytes::copy_from_slice(bytes))
    }
}

impl From<Bytes> for HexBytes {
    fn from(bytes: Bytes) -> Self {
        HexBytes::from_bytes(bytes)
    }
}

impl From<HexBytes> for Bytes {
    fn from(value: HexBytes) -> Self {
        value.into_bytes()
    }
}

impl AsRef<[u8]> for HexBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
