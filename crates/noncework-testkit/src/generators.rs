//! Proptest generators for property-based testing.

use proptest::prelude::*;

use noncework_core::{Nonce, MAX_LENGTH};
use noncework_effort::Effort;

/// Generate a valid nonce length.
pub fn nonce_len() -> impl Strategy<Value = usize> {
    1usize..=MAX_LENGTH
}

/// Generate a nonce of any valid length.
pub fn nonce() -> impl Strategy<Value = Nonce> {
    prop::collection::vec(any::<u8>(), 1..=MAX_LENGTH)
        .prop_map(|bytes| Nonce::from_bytes(&bytes).expect("length in range"))
}

/// Generate a nonce of exactly `len` bytes.
pub fn nonce_of_len(len: usize) -> impl Strategy<Value = Nonce> {
    prop::collection::vec(any::<u8>(), len)
        .prop_map(|bytes| Nonce::from_bytes(&bytes).expect("length in range"))
}

/// Generate a pair of equal-length nonces.
pub fn same_len_pair() -> impl Strategy<Value = (Nonce, Nonce)> {
    (1usize..=32).prop_flat_map(|len| (nonce_of_len(len), nonce_of_len(len)))
}

/// Generate up to `max` short salts.
pub fn salts(max: usize) -> impl Strategy<Value = Vec<Nonce>> {
    prop::collection::vec((1usize..=16).prop_flat_map(nonce_of_len), 0..=max)
}

/// Parameters for generating a cheap effort.
#[derive(Debug, Clone)]
pub struct EffortParams {
    pub bits: u32,
    pub base: Nonce,
    pub salts: Vec<Nonce>,
}

impl Arbitrary for EffortParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            0u32..=8,           // bits, kept cheap
            nonce_of_len(18),   // base
            salts(3),
        )
            .prop_map(|(bits, base, salts)| EffortParams { bits, base, salts })
            .boxed()
    }
}

/// Build an effort from parameters.
pub fn effort_from_params(params: &EffortParams) -> Effort {
    Effort::new(params.bits, &params.base, &params.salts).expect("bits within bounds")
}

#[cfg(test)]
mod tests {
    use super::*;
    use noncework_effort::leading_zero_bits;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn test_effort_prefix_is_concatenation(params: EffortParams) {
            let effort = effort_from_params(&params);
            let mut expected = params.base.as_bytes().to_vec();
            for salt in &params.salts {
                expected.extend_from_slice(salt.as_bytes());
            }
            prop_assert_eq!(effort.input_prefix(), &expected[..]);
        }

        #[test]
        fn test_found_proof_meets_bits(params: EffortParams) {
            let effort = effort_from_params(&params);
            let proof = effort.get_proof(0).unwrap().unwrap();
            let digest = effort.digest_with(proof.as_bytes());
            prop_assert!(leading_zero_bits(digest.as_bytes()) >= params.bits);
        }

        #[test]
        fn test_same_len_pair_lengths((a, b) in same_len_pair()) {
            prop_assert_eq!(a.len(), b.len());
        }
    }
}
