use ascii_player::{decode_line, DecodeBuffer, MAX_OUTPUT};
use proptest::prelude::*;

/// Units that never read as digits, so every pair round-trips unambiguously.
fn unit_strategy() -> impl Strategy<Value = u8> {
    prop_oneof![b'a'..=b'z', Just(b' '), Just(b'#'), Just(b'.'), Just(b'@')]
}

fn encode(pairs: &[(u8, u16)]) -> Vec<u8> {
    let mut line = Vec::new();
    for &(unit, count) in pairs {
        line.push(unit);
        line.extend_from_slice(count.to_string().as_bytes());
    }
    line
}

proptest! {
    #[test]
    fn prop_explicit_counts_expand_in_order(
        pairs in prop::collection::vec((unit_strategy(), 0u16..=40), 0..64)
    ) {
        let mut buf = DecodeBuffer::try_new().unwrap();
        let len = decode_line(&encode(&pairs), &mut buf);

        let expected: Vec<u8> = pairs
            .iter()
            .flat_map(|&(unit, count)| std::iter::repeat(unit).take(count as usize))
            .collect();

        prop_assert_eq!(len, expected.len());
        prop_assert_eq!(buf.as_bytes(), &expected[..]);
        prop_assert!(!buf.is_truncated());
    }

    #[test]
    fn prop_output_never_exceeds_capacity(
        pairs in prop::collection::vec((unit_strategy(), 0u16..=9999), 0..16)
    ) {
        let mut buf = DecodeBuffer::try_new().unwrap();
        let len = decode_line(&encode(&pairs), &mut buf);

        let total: usize = pairs.iter().map(|&(_, count)| count as usize).sum();
        prop_assert_eq!(len, total.min(MAX_OUTPUT - 1));
        prop_assert_eq!(buf.is_truncated(), total > MAX_OUTPUT - 1);
    }

    #[test]
    fn prop_decoding_is_deterministic(line in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut first = DecodeBuffer::try_new().unwrap();
        let mut second = DecodeBuffer::try_new().unwrap();

        // Dirty the second buffer so reuse is covered too.
        decode_line(b"z9999", &mut second);

        let a = decode_line(&line, &mut first);
        let b = decode_line(&line, &mut second);
        prop_assert_eq!(a, b);
        prop_assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
