//! The base58 alphabet
//!
//! `0`, `O`, `I` and `l` are left out so tokens can be read back by eye.

use crate::error::{CodecError, Result};

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The digit representing zero, used for leading zero bytes
pub const ZERO_DIGIT: char = '1';

const INVALID: u8 = 0xff;

// ASCII -> digit value, INVALID for anything outside the alphabet
const DIGIT_INDEX: [u8; 128] = build_index();

const fn build_index() -> [u8; 128] {
    let mut index = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        index[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    index
}

/// Character for a digit value in `0..58`
pub fn digit_to_char(digit: u8) -> char {
    ALPHABET[digit as usize] as char
}

/// Digit value of `character`, `position` is only used for the error
pub fn char_to_digit(character: char, position: usize) -> Result<u8> {
    let invalid = CodecError::InvalidCharacter {
        character,
        position,
    };
    if !character.is_ascii() {
        return Err(invalid);
    }
    match DIGIT_INDEX[character as usize] {
        INVALID => Err(invalid),
        digit => Ok(digit),
    }
}

pub fn is_alphabet_char(character: char) -> bool {
    char_to_digit(character, 0).is_ok()
}
