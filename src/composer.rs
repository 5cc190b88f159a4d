use std::fmt;

use crate::object::Uuid;

impl Uuid {
    /// Renders the canonical lowercase hyphenated form, always exactly 36
    /// characters in 8-4-4-4-12 groups.
    pub fn hyphenated(&self) -> String {
        let hexed = hex::encode(self.as_bytes());
        [
            &hexed[..8],
            "-",
            &hexed[8..12],
            "-",
            &hexed[12..16],
            "-",
            &hexed[16..20],
            "-",
            &hexed[20..],
        ]
        .concat()
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hyphenated())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
