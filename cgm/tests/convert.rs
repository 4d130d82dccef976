// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end binary-to-clear-text conversion scenarios.

use cgm::core::commands::Command;
use cgm::core::options::CodecOptions;

/// Builds a short-form command.
fn short(class: u8, id: u16, args: &[u8]) -> Vec<u8> {
    assert!(args.len() < 31);
    let header = (u16::from(class) << 12) | (id << 5) | args.len() as u16;
    let mut out = header.to_be_bytes().to_vec();
    out.extend_from_slice(args);
    if args.len() & 0x1 == 1 {
        out.push(0);
    }
    out
}

/// Builds a long-form command with a single partition.
fn long(class: u8, id: u16, args: &[u8]) -> Vec<u8> {
    let mut out = ((u16::from(class) << 12) | (id << 5) | 31).to_be_bytes().to_vec();
    out.extend_from_slice(&(args.len() as u16).to_be_bytes());
    out.extend_from_slice(args);
    if args.len() & 0x1 == 1 {
        out.push(0);
    }
    out
}

/// Encodes a string argument in the form its length requires.
fn string_arg(text: &[u8]) -> Vec<u8> {
    if text.len() < 255 {
        let mut out = vec![text.len() as u8];
        out.extend_from_slice(text);
        out
    }
    else {
        let mut out = vec![255];
        out.extend_from_slice(&(text.len() as u16).to_be_bytes());
        out.extend_from_slice(text);
        out
    }
}

fn convert(buf: &[u8]) -> String {
    let mut out = Vec::new();
    cgm::convert(buf, &mut out, &CodecOptions::default()).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn header_round_trip() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"myfile")));
    buf.extend_from_slice(&short(0, 2, &[]));

    assert_eq!(convert(&buf), "BEGMF 'myfile';\nENDMF;\n");
}

#[test]
fn integer_points_emit_as_reals_under_the_override() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
    buf.extend_from_slice(&short(1, 4, &16i16.to_be_bytes()));
    buf.extend_from_slice(&short(1, 3, &0i16.to_be_bytes()));
    buf.extend_from_slice(&short(3, 1, &16i16.to_be_bytes()));
    buf.extend_from_slice(&short(4, 1, &[0x00, 0x10, 0x00, 0x20, 0x00, 0x30, 0x00, 0x40]));
    buf.extend_from_slice(&short(0, 2, &[]));

    let text = convert(&buf);

    assert!(text.contains(" vdctype real;\n"));
    assert!(text.contains("  line (16.0000,32.0000) (48.0000,64.0000);\n"));
}

#[test]
fn colour_value_extent_prints_verbatim() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
    buf.extend_from_slice(&short(1, 7, &8i16.to_be_bytes()));
    buf.extend_from_slice(&short(1, 10, &[0, 0, 0, 255, 255, 255]));
    buf.extend_from_slice(&short(0, 2, &[]));

    let text = convert(&buf);

    assert!(text.contains(" colrprec 255;\n"));
    assert!(text.contains(" colrvalueext 0 0 0, 255 255 255;\n"));
}

#[test]
fn direct_colours_emit_scaled_by_the_value_extent() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
    buf.extend_from_slice(&short(1, 7, &16i16.to_be_bytes()));
    // Extent 0..1020 on every channel.
    buf.extend_from_slice(&short(
        1,
        10,
        &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFC, 0x03, 0xFC, 0x03, 0xFC],
    ));
    buf.extend_from_slice(&short(2, 2, &1i16.to_be_bytes()));
    // BACKGROUND COLOUR is direct whatever the selection mode.
    buf.extend_from_slice(&short(2, 7, &[0x01, 0xFE, 0x00, 0x00, 0x03, 0xFC]));
    buf.extend_from_slice(&short(5, 4, &[0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF]));
    buf.extend_from_slice(&short(0, 2, &[]));

    let text = convert(&buf);

    // The declared extent prints verbatim; the colours drawn under it print
    // mapped onto 0..255.
    assert!(text.contains(" colrvalueext 0 0 0, 1020 1020 1020;\n"));
    assert!(text.contains("  backcolr 128 0 255;\n"));
    assert!(text.contains("  linecolr 64 64 64;\n"));
}

#[test]
fn colour_index_precision_prints_the_signed_maximum() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
    buf.extend_from_slice(&short(1, 8, &8i16.to_be_bytes()));
    buf.extend_from_slice(&short(0, 2, &[]));

    assert!(convert(&buf).contains(" colrindexprec 127;\n"));
}

#[test]
fn unknown_commands_round_trip_as_comments() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
    buf.extend_from_slice(&short(9, 42, &[0xAB, 0xCD]));
    buf.extend_from_slice(&short(0, 2, &[]));

    let (commands, _) = cgm::decode(&buf, &CodecOptions::default());
    assert_eq!(
        commands[1],
        Command::Unknown { class: 9, id: 42, args: vec![0xAB, 0xCD] }
    );

    assert!(convert(&buf).contains("% Unknown command: Class=9, ID=42 %;\n"));
}

#[test]
fn long_form_string_survives_the_trip() {
    let description = vec![b'A'; 260];

    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
    buf.extend_from_slice(&long(1, 2, &string_arg(&description)));
    buf.extend_from_slice(&short(0, 2, &[]));

    let text = convert(&buf);
    let expected = format!(" mfdesc '{}';\n", "A".repeat(260));
    assert!(text.contains(&expected));
}

#[test]
fn a_string_of_exactly_255_bytes_uses_the_long_form() {
    let description = vec![b'B'; 255];
    let arg = string_arg(&description);
    assert_eq!(arg[0], 255);

    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
    buf.extend_from_slice(&long(1, 2, &arg));
    buf.extend_from_slice(&short(0, 2, &[]));

    let text = convert(&buf);
    assert!(text.contains(&format!(" mfdesc '{}';\n", "B".repeat(255))));
}

#[test]
fn integer_precision_boundaries_print_their_extents() {
    for (bits, expected) in [
        (8i16, " integerprec -128, 127 % 8 binary bits %;\n"),
        (32i16, " integerprec -2147483648, 2147483647 % 32 binary bits %;\n"),
    ] {
        let mut buf = Vec::new();
        buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
        buf.extend_from_slice(&short(1, 4, &bits.to_be_bytes()));
        buf.extend_from_slice(&short(0, 2, &[]));

        assert!(convert(&buf).contains(expected), "bits = {}", bits);
    }
}

#[test]
fn a_partitioned_command_reassembles() {
    // One polyline whose 20000 argument bytes span two 15-bit partitions.
    let mut args = Vec::with_capacity(20000);
    for i in 0..10000u32 {
        args.extend_from_slice(&(i as u16 % 100).to_be_bytes());
    }
    assert_eq!(args.len(), 20000);

    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
    buf.extend_from_slice(&((4u16 << 12) | (1 << 5) | 31).to_be_bytes());
    buf.extend_from_slice(&(0x8000u16 | 16384).to_be_bytes());
    buf.extend_from_slice(&args[..16384]);
    buf.extend_from_slice(&((args.len() - 16384) as u16).to_be_bytes());
    buf.extend_from_slice(&args[16384..]);
    buf.extend_from_slice(&short(0, 2, &[]));

    let (commands, diags) = cgm::decode(&buf, &CodecOptions::default());

    match &commands[1] {
        Command::Polyline { points } => assert_eq!(points.len(), 5000),
        other => panic!("expected a polyline, got {:?}", other),
    }
    assert!(!diags.has_fatal());
}

#[test]
fn statements_map_commands_in_order() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
    buf.extend_from_slice(&short(1, 1, &3i16.to_be_bytes()));
    buf.extend_from_slice(&short(0, 3, &string_arg(b"p")));
    buf.extend_from_slice(&short(0, 4, &[]));
    buf.extend_from_slice(&short(5, 2, &1i16.to_be_bytes()));
    buf.extend_from_slice(&short(0, 5, &[]));
    buf.extend_from_slice(&short(0, 2, &[]));

    let text = convert(&buf);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "BEGMF 'f';",
            " mfversion 3;",
            "BEGPIC 'p';",
            "BEGPICBODY;",
            "  linetype 1;",
            "ENDPIC;",
            "ENDMF;",
        ]
    );
}

#[test]
fn every_real_token_has_four_fraction_digits() {
    let mut buf = Vec::new();
    buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
    buf.extend_from_slice(&short(1, 3, &0i16.to_be_bytes()));
    buf.extend_from_slice(&short(3, 1, &16i16.to_be_bytes()));
    buf.extend_from_slice(&short(2, 6, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x64, 0x00, 0x64]));
    buf.extend_from_slice(&short(4, 12, &[0x00, 0x32, 0x00, 0x32, 0x00, 0x0A]));
    buf.extend_from_slice(&short(0, 2, &[]));

    let text = convert(&buf);

    for token in text.split(|c: char| " ;(),\n".contains(c)) {
        if let Some(dot) = token.find('.') {
            let (whole, fraction) = token.split_at(dot);
            let whole = whole.strip_prefix('-').unwrap_or(whole);
            assert!(!whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit()), "{}", token);
            let fraction = &fraction[1..];
            assert_eq!(fraction.len(), 4, "token {:?}", token);
            assert!(fraction.bytes().all(|b| b.is_ascii_digit()), "{}", token);
        }
    }

    assert!(text.contains("  vdcext (0.0000,0.0000) (100.0000,100.0000);\n"));
    assert!(text.contains("  circle 50.0000 50.0000 10.0000;\n"));
}
