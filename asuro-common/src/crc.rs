// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bit-by-bit CRC-16 as checked by the bootloader.
//!
//! Parameters: width 16, poly 0x8005, init 0x0000, reflected input and
//! output, no final xor. This is the CRC-16/ARC model, computed the slow
//! way so every step matches the bootloader's reference routine.

const POLY: u16 = 0x8005;

/// Reverse the lowest `width` bits of `data`.
fn reflect(data: u16, width: u32) -> u16 {
    data.reverse_bits() >> (16 - width)
}

/// Shift one bit into the register, folding in the polynomial on carry.
fn shift_in(crc: u16, bit: bool) -> u16 {
    let carry = crc & 0x8000 != 0;
    let crc = (crc << 1) | u16::from(bit);
    if carry {
        crc ^ POLY
    } else {
        crc
    }
}

/// Compute the CRC-16 of `data`.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = 0u16;

    for &byte in data {
        let c = reflect(u16::from(byte), 8);
        for i in 0..8 {
            crc = shift_in(crc, (c >> (7 - i)) & 0x01 != 0);
        }
    }

    // Augment with 16 zero bits to flush the register
    for _ in 0..16 {
        crc = shift_in(crc, false);
    }

    reflect(crc, 16)
}
