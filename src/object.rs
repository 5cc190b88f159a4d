use rand::{CryptoRng, RngCore};

/// A 128 bit universally unique identifier, stored as 16 opaque bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero UUID.
    pub const NIL: Uuid = Uuid([0; 16]);

    /// Generates a random version 4 UUID from the thread-local secure
    /// generator.
    ///
    /// # Panics
    ///
    /// Panics if the operating system random source cannot be reached.
    /// There is no recoverable error path here; callers that need one
    /// should bring their own source via [`Uuid::new_v4_from`].
    pub fn new_v4() -> Uuid {
        Uuid::new_v4_from(&mut rand::thread_rng())
    }

    /// Generates a version 4 UUID from the given random source.
    ///
    /// Byte 6 gets its high nibble stamped to `4` and byte 8 its two high
    /// bits stamped to `10`, whatever the source produced there.
    pub fn new_v4_from<R: RngCore + CryptoRng>(rng: &mut R) -> Uuid {
        let mut bytes = [0; 16];
        rng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Uuid(bytes)
    }

    pub const fn from_bytes(bytes: [u8; 16]) -> Uuid {
        Uuid(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Mutable view of the underlying bytes.
    ///
    /// This is a privileged escape hatch, not an ordinary accessor: writes
    /// go straight into the value and may leave it claiming a version or
    /// variant it was never given.
    pub fn bytes_mut(&mut self) -> &mut [u8; 16] {
        &mut self.0
    }

    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0 == [0; 16]
    }

    /// The version number claimed by the high nibble of byte 6. Parsing
    /// never checks this field, so it reports whatever the input carried.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Uuid {
        Uuid(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(uuid: Uuid) -> [u8; 16] {
        uuid.0
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(feature = "serialize")]
mod serialize {
    use std::fmt;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Uuid;

    impl Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
            struct HyphenatedVisitor;

            impl de::Visitor<'_> for HyphenatedVisitor {
                type Value = Uuid;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("a hyphenated UUID string")
                }

                fn visit_str<E: de::Error>(self, value: &str) -> Result<Uuid, E> {
                    value.parse().map_err(E::custom)
                }
            }

            deserializer.deserialize_str(HyphenatedVisitor)
        }
    }
}
