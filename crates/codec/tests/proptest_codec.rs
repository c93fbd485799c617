#![expect(unused_crate_dependencies, reason = "suppress warnings")]

use proptest::prelude::*;

use runes_codec::{leb128, pack};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn leb128_roundtrip(n in any::<u128>()) {
        let buf = leb128::encode(n);
        prop_assert_eq!(leb128::decode(&buf).unwrap(), (n, buf.len()));
    }

    #[test]
    fn leb128_roundtrip_under_script_limit(n in any::<u128>()) {
        let buf = leb128::encode(n);
        prop_assert_eq!(leb128::decode_limited(&buf, 18).unwrap(), (n, buf.len()));
    }

    #[test]
    fn leb128_concatenated_stream_roundtrip(values in prop::collection::vec(any::<u128>(), 0..40)) {
        let mut buf = Vec::new();
        for &n in &values {
            leb128::encode_to_vec(n, &mut buf);
        }

        let mut decoded = Vec::new();
        let mut i = 0;
        while i < buf.len() {
            let (n, consumed) = leb128::decode_limited(&buf[i..], 18).unwrap();
            decoded.push(n);
            i += consumed;
        }

        prop_assert_eq!(decoded, values);
    }

    #[test]
    fn pack_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        prop_assert_eq!(pack::unpack_bytes(&pack::pack_bytes(&bytes)).unwrap(), bytes);
    }
}
