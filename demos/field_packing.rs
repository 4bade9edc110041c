//! Packing unaligned protocol fields with copy_bits.
//!
//! Run with: cargo run --example field_packing

use bitcraft::copy_bits;

fn main() {
    println!("Packing a 3-field header into 3 bytes\n");

    // Field layout, in bits: version (4) | channel (11) | flags (9)
    let fields: [(&str, &[u8], u64); 3] = [
        ("version", &[0x07], 4),
        ("channel", &[0x2A, 0x05], 11),
        ("flags", &[0x91, 0x01], 9),
    ];

    let mut frame = [0u8; 3];
    let mut cursor = 0u64;

    for (name, value, width) in fields {
        copy_bits(&mut frame, cursor, value, 0, width).expect("field fits the frame");
        println!("{:>8}: {:2} bits at bit {:2}", name, width, cursor);
        cursor += width;
    }

    println!("\nPacked frame: {:02X?} ({} bits used)", frame, cursor);

    // Unpack the middle field again.
    let mut channel = [0u8; 2];
    copy_bits(&mut channel, 0, &frame, 4, 11).expect("field lies inside the frame");
    println!("Recovered channel field: {:02X?}", channel);
}
