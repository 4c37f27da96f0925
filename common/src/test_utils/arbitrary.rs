use proptest::{
    arbitrary::any,
    collection::vec,
    sample,
    strategy::{BoxedStrategy, Strategy},
};

/// The Base58 alphabet used by PRiVCY addresses. Note the missing `0`, `O`,
/// `I`, and `l`.
pub const BASE58_ALPHABET: &[u8] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// An `Arbitrary`-like [`Strategy`] for address-shaped strings: 26-35 Base58
/// chars of mixed case. These are not checksummed, which is fine wherever
/// address validation is someone else's job.
pub fn any_base58_address() -> BoxedStrategy<String> {
    vec(sample::select(BASE58_ALPHABET), 26..=35)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
        .boxed()
}

/// An `Arbitrary`-like [`Strategy`] for short, human-entered text, e.g. a
/// payment label. Includes whitespace, punctuation, and non-ASCII chars.
pub fn any_label() -> BoxedStrategy<String> {
    any::<String>()
        .prop_map(|s| s.chars().take(64).collect())
        .boxed()
}
