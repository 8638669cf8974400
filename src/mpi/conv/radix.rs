//! ASCII import and export, radix 2 to 16
//!
//! Hexadecimal gets a direct path: digits map straight onto nibbles, so
//! import fills limbs from the least significant end and export walks the
//! limbs from the top, two nibbles per byte. Every other radix goes
//! through the arithmetic: multiply-and-add on import, divide-and-collect
//! on export.

use crate::error::{Error, Result};
use crate::mpi::Mpi;
use crate::mpi::core::bits_to_limbs;
use crate::mpi::limb::{LIMB_BYTES, Limb};

use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Value of one ASCII digit, accepting both hex cases.
fn digit_value(radix: u32, c: u8) -> Result<Limb> {
    let d = match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        b'a'..=b'f' => c - b'a' + 10,
        _ => return Err(Error::InvalidCharacter),
    };

    if (d as u32) >= radix {
        return Err(Error::InvalidCharacter);
    }

    Ok(d as Limb)
}

impl Mpi {
    /// Parses an ASCII representation in the given radix.
    ///
    /// A leading `-` makes the value negative; the empty string is zero.
    ///
    /// # Errors
    /// `BadInput` for a radix outside 2..=16, `InvalidCharacter` for a
    /// character that is not a digit of the radix.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Mpi> {
        if !(2..=16).contains(&radix) {
            return Err(Error::BadInput);
        }

        let bytes = s.as_bytes();
        let (negative, digits) = match bytes.first() {
            Some(b'-') => (true, &bytes[1..]),
            _ => (false, bytes),
        };

        let mut x = Mpi::new();

        if radix == 16 {
            x.grow(bits_to_limbs(digits.len() * 4))?;

            for (j, &c) in digits.iter().rev().enumerate() {
                let d = digit_value(radix, c)?;
                x.limbs[j / (2 * LIMB_BYTES)] |= d << ((j % (2 * LIMB_BYTES)) * 4);
            }
        } else {
            for &c in digits {
                let d = digit_value(radix, c)?;
                x = x.mul_int(radix as u64)?;
                x = x.add_int(d as i64)?;
            }
        }

        if negative && !x.is_zero() {
            x.sign = -1;
        }

        Ok(x)
    }

    /// Renders the value in the given radix, `-`-prefixed when negative.
    ///
    /// Radix 16 emits byte pairs with leading zero bytes suppressed, so
    /// zero renders as `00` and the digit count is always even. Other
    /// radices emit the usual minimal digit string, `0` for zero.
    ///
    /// # Errors
    /// `BadInput` for a radix outside 2..=16.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        if !(2..=16).contains(&radix) {
            return Err(Error::BadInput);
        }

        let mut out = String::new();
        if self.sign() < 0 {
            out.push('-');
        }

        if radix == 16 {
            let n = self.used();
            if n == 0 {
                out.push_str("00");
                return Ok(out);
            }

            let mut started = false;
            for i in (0..n).rev() {
                for j in (0..LIMB_BYTES).rev() {
                    let c = ((self.limbs[i] >> (j * 8)) & 0xFF) as u8;

                    if c == 0 && !started && (i, j) != (0, 0) {
                        continue;
                    }

                    out.push(DIGITS[(c >> 4) as usize] as char);
                    out.push(DIGITS[(c & 0x0F) as usize] as char);
                    started = true;
                }
            }

            return Ok(out);
        }

        if self.is_zero() {
            out.push('0');
            return Ok(out);
        }

        let mut t = self.clone();
        t.sign = 1;

        let mut collected = Vec::new();
        while !t.is_zero() {
            let r = t.modulo_int(radix as u64)?;
            let (q, _) = t.div_rem_int(radix as i64)?;

            collected.push(DIGITS[r as usize]);
            t = q;
        }

        out.extend(collected.iter().rev().map(|&d| d as char));

        Ok(out)
    }
}

impl Display for Mpi {
    /// Hexadecimal rendering, `-`-prefixed when negative.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = self.to_string_radix(16).map_err(|_| std::fmt::Error)?;

        f.write_str(&s)
    }
}

impl FromStr for Mpi {
    type Err = Error;

    /// Parses a decimal string.
    fn from_str(s: &str) -> Result<Mpi> {
        Mpi::from_str_radix(s, 10)
    }
}
