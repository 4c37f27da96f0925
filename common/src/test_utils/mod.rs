/// `Arbitrary`-like proptest strategies for values without a dedicated type.
pub mod arbitrary;
/// Quickly create roundtrip proptest for various serialization schemes.
pub mod roundtrip;
