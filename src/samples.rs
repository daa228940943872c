use strum_macros::{Display, EnumIter, EnumString};

/// Bundled ciphertexts, addressable by snake_case name (`--sample caesar`).
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownCipher {
    /// The classic throughput benchmark text.
    Benchmark,
    /// Dickens, shifted by three.
    Caesar,
    /// Lincoln, under the keyword alphabet ZEBRAS.
    Keyword,
}

impl KnownCipher {
    pub fn ciphertext(&self) -> &'static str {
        match self {
            Self::Benchmark => concat!(
                "SOWFBRKAWFCZFSBSCSBQITBKOWLBFXTBKOWLSOXSOXFZWWIBICFWUQLRXINOCIJLWJFQUNWXLF",
                "BSZXFBTXAANTQIFBFSFQUFCZFSBSCSBIMWHWLNKAXBISWGSTOXLXTSWLUQLXJBUUWLWISTBKOW",
                "LSWGSTOXLXTSWLBSJBUUWLFULQRTXWFXLTBKOWLBISOXSSOWTBKOWLXAKOXZWSBFIQSFBRKANS",
                "OWXAKOXZWSFOBUSWJBSBFTQRKAWSWANECRZAWJ"
            ),
            Self::Caesar => concat!(
                "LWZDVWKHEHVWRIWLPHVLWZDVWKHZRUVWRIWLPHVLWZDVWKHDJHRIZLVGRPLWZDVWKHDJHRIIRROL",
                "VKQHVVLWZDVWKHHSRFKRIEHOLHILWZDVWKHHSRFKRILQFUHGXOLWBLWZDVWKHVHDVRQRIOLJKWL",
                "WZDVWKHVHDVRQRIGDUNQHVV"
            ),
            Self::Keyword => concat!(
                "SLTOPBLOAZKRPAUAKXAZOPZCLLTOSZQDAOPEOLTCDQSLOQDLKQDFPBLKQFKAKQZKAVKZQFLKBL",
                "KBAFUARFKIFEAOQXZKRRARFBZQARQLQDAMOLMLPFQFLKQDZQZIIJAKZOABOAZQARANTZI"
            ),
        }
    }

    /// Encryption key in alphabet form, when known.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Benchmark => None,
            Self::Caesar => Some("DEFGHIJKLMNOPQRSTUVWXYZABC"),
            Self::Keyword => Some("ZEBRASCDFGHIJKLMNOPQTUVWXY"),
        }
    }

    /// A fragment of the plaintext, usable as a crib.
    pub fn crib(&self) -> Option<&'static str> {
        match self {
            Self::Benchmark => None,
            Self::Caesar => Some("BESTOFTIMES"),
            Self::Keyword => Some("FOURSCORE"),
        }
    }
}
