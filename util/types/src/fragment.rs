use crate::HexBytes;
use bytes::{BufMut, BytesMut};
use serde::{Deserialize, Serialize};

/// A possibly nested ordered structure of hex values.
///
/// In JSON a fragment is either a hex string or an array of fragments, e.g.
/// `["0x01", ["0x0203", []], "0x"]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fragment {
    /// A single hex value.
    Hex(HexBytes),
    /// An ordered list of fragments.
    List(Vec<Fragment>),
}

impl Fragment {
    /// Concatenates every hex value depth-first, left to right.
    pub fn flatten(&self) -> HexBytes {
        let mut buf = BytesMut::new();
        self.write_into(&mut buf);
        HexBytes::from_bytes(buf.freeze())
    }

    fn write_into(&self, buf: &mut BytesMut) {
        match self {
            Fragment::Hex(value) => buf.put_slice(value.as_bytes()),
            Fragment::List(fragments) => {
                for fragment in fragments {
                    fragment.write_into(buf);
                }
            }
        }
    }
}

impl From<HexBytes> for Fragment {
    fn from(value: HexBytes) -> Self {
        Fragment::Hex(value)
    }
}

impl From<Vec<Fragment>> for Fragment {
    fn from(fragments: Vec<Fragment>) -> Self {
        Fragment::List(fragments)
    }
}

/// Flattens a sequence of fragments into one hex value; an empty sequence yields `0x`.
pub fn flatten(fragments: &[Fragment]) -> HexBytes {
    let mut buf = BytesMut::new();
    for fragment in fragments {
        fragment.write_into(&mut buf);
    }
    HexBytes::from_bytes(buf.freeze())
}
