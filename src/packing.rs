use bitvec::prelude::{BitSlice, BitVec, Lsb0};

pub fn pack_bits(bits: &[bool]) -> BitVec<u8, Lsb0> {
    bits.iter().copied().collect()
}

pub fn bits_to_string(bits: &BitSlice<u8, Lsb0>) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}

pub fn bits_to_hex(bits: &BitSlice<u8, Lsb0>) -> String {
    bits.to_bitvec()
        .as_raw_slice()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
