//! Fixed wire vectors and end-to-end script checks.

#![expect(unused_crate_dependencies, reason = "suppress warnings")]

use bitcoin::script::Instruction;

use runes_fmt::{
    Edict, Etching, Rune, RuneId, Runestone, ScriptBuildError, script,
};

#[test]
fn empty_runestone_script_bytes() {
    // OP_RETURN OP_13, then a two-byte push of `Flags = 0`.
    let script = Runestone::default().encode_script().unwrap();
    assert_eq!(hex::encode(script.as_bytes()), "6a5d020200");
    assert!(script::is_payload_script(&script));
}

#[test]
fn single_edict_script_bytes() {
    let runestone = Runestone {
        edicts: vec![Edict {
            id: RuneId { block: 1, tx: 1 },
            amount: 2,
            output: 0,
        }],
        ..Default::default()
    };

    let script = runestone.encode_script().unwrap();
    assert_eq!(hex::encode(script.as_bytes()), "6a5d0702000001010200");
    assert_eq!(Runestone::decode_script(&script), Some(Ok(runestone)));
}

#[test]
fn mint_script_bytes() {
    let runestone = Runestone {
        mint: Some(RuneId { block: 17, tx: 18 }),
        ..Default::default()
    };

    let script = runestone.encode_script().unwrap();
    assert_eq!(hex::encode(script.as_bytes()), "6a5d06020014111412");
    assert_eq!(Runestone::decode_script(&script), Some(Ok(runestone)));
}

#[test]
fn multibyte_varint_fixture_decodes() {
    // Flags = etching, Rune = 1000 (varint e8 07).
    let bytes = hex::decode("6a5d05020104e807").unwrap();
    let script = bitcoin::ScriptBuf::from_bytes(bytes);

    assert_eq!(
        Runestone::decode_script(&script),
        Some(Ok(Runestone {
            etching: Some(Etching {
                rune: Some(Rune(1000)),
                ..Default::default()
            }),
            ..Default::default()
        })),
    );
}

#[test]
fn payload_chunking_instruction_counts() {
    fn instruction_count(edicts: usize) -> usize {
        let runestone = Runestone {
            edicts: vec![
                Edict {
                    id: RuneId::default(),
                    amount: 0,
                    output: 0,
                };
                edicts
            ],
            ..Default::default()
        };

        runestone
            .encode_script()
            .unwrap()
            .instructions()
            .count()
    }

    // 129 zero edicts still fit one 520-byte push behind the preamble;
    // the 130th spills into a second push.
    assert_eq!(instruction_count(129), 3);
    assert_eq!(instruction_count(130), 4);
}

#[test]
fn no_push_exceeds_the_element_limit() {
    let runestone = Runestone {
        edicts: vec![
            Edict {
                id: RuneId { block: 1, tx: 1 },
                amount: u128::MAX,
                output: 0,
            };
            120
        ],
        ..Default::default()
    };

    let script = runestone.encode_script().unwrap();

    for instruction in script.instructions().skip(2) {
        match instruction.unwrap() {
            Instruction::PushBytes(push) => assert!(push.len() <= 520),
            other => panic!("unexpected instruction {other:?}"),
        }
    }
}

#[test]
fn oversized_runestone_is_rejected() {
    let runestone = Runestone {
        edicts: vec![
            Edict {
                id: RuneId { block: 1, tx: 1 },
                amount: u128::MAX,
                output: 0,
            };
            600
        ],
        ..Default::default()
    };

    assert!(matches!(
        runestone.encode_script(),
        Err(ScriptBuildError::OversizedScript { .. })
    ));
}
