/*
 * Copyright (c) the waft developers. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::{try_vec, WaftError};
use crate::traits::FftTrigonometry;
use crate::util::compute_twiddle;
use crate::FftDirection;
use num_complex::Complex;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// Byte-wise bit reversal table, built at compile time.
const BIT_REVERSE_U8: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0usize;
    while i < 256 {
        let mut v = i as u8;
        let mut rev = 0u8;
        let mut bit = 0;
        while bit < 8 {
            rev = (rev << 1) | (v & 1);
            v >>= 1;
            bit += 1;
        }
        table[i] = rev;
        i += 1;
    }
    table
};

/// Reverses the low `bits` bits of `value`. Bits above `bits` must be zero.
#[inline]
pub(crate) fn bit_reverse(value: usize, bits: u32) -> usize {
    debug_assert!(bits as usize <= usize::BITS as usize);
    debug_assert!(bits == usize::BITS || value >> bits == 0);
    let mut rev = 0usize;
    let mut v = value;
    let mut produced = 0u32;
    // Low eight bits at a time through the table, the remainder by shifting.
    while produced + 8 <= bits {
        rev = (rev << 8) | BIT_REVERSE_U8[v & 0xff] as usize;
        v >>= 8;
        produced += 8;
    }
    let tail = bits - produced;
    if tail > 0 {
        let reversed_tail = (BIT_REVERSE_U8[v & 0xff] as usize) >> (8 - tail);
        rev = (rev << tail) | reversed_tail;
    }
    rev
}

/// Reverses the base-`radix` digits of `value`, `digits` of them.
#[inline]
pub(crate) fn digit_reverse(value: usize, radix: usize, digits: u32) -> usize {
    debug_assert!(radix >= 2);
    let mut result = 0usize;
    let mut v = value;
    for _ in 0..digits {
        result = result * radix + (v % radix);
        v /= radix;
    }
    result
}

/// Largest power-of-two size class kept as a table; everything larger is analytic.
pub(crate) const MAX_TRIG_CLASS: u32 = 12;

fn trig_tables() -> &'static [Vec<(f64, f64)>] {
    static TABLES: OnceLock<Vec<Vec<(f64, f64)>>> = OnceLock::new();
    TABLES.get_or_init(|| {
        (0..=MAX_TRIG_CLASS)
            .map(|class| {
                let len = 1usize << class;
                (0..len)
                    .map(|i| (-2. * i as f64 / len as f64).sincos_pi())
                    .collect()
            })
            .collect()
    })
}

/// `sin(-2*pi*index / 2^size_class)`, table-backed for classes within bounds.
#[inline]
pub(crate) fn sin_table(size_class: u32, index: usize) -> f64 {
    debug_assert!(size_class <= MAX_TRIG_CLASS);
    let len = 1usize << size_class;
    trig_tables()[size_class as usize][index & (len - 1)].0
}

/// `cos(-2*pi*index / 2^size_class)`, table-backed for classes within bounds.
#[inline]
pub(crate) fn cos_table(size_class: u32, index: usize) -> f64 {
    debug_assert!(size_class <= MAX_TRIG_CLASS);
    let len = 1usize << size_class;
    trig_tables()[size_class as usize][index & (len - 1)].1
}

/// `(sin, cos)` of `-2*pi*index/fft_len` for the forward transform.
///
/// Table lookup for power-of-two lengths within [`MAX_TRIG_CLASS`], analytic
/// otherwise. Both paths run through the same `sincos_pi`, so the values are
/// bit-identical regardless of which one answered.
#[inline]
pub(crate) fn forward_twiddle_parts(index: usize, fft_len: usize) -> (f64, f64) {
    if fft_len.is_power_of_two() && fft_len.trailing_zeros() <= MAX_TRIG_CLASS {
        let class = fft_len.trailing_zeros();
        return (sin_table(class, index), cos_table(class, index));
    }
    (-2. * (index % fft_len) as f64 / fft_len as f64).sincos_pi()
}

/// Process-wide cache of unit-root tables, shared by reference across plans.
pub(crate) trait SharedUnitRoots: Sized {
    fn unit_roots(
        len: usize,
        direction: FftDirection,
    ) -> Result<Arc<[Complex<Self>]>, WaftError>;
}

macro_rules! impl_shared_unit_roots {
    ($ty: ty) => {
        impl SharedUnitRoots for $ty {
            fn unit_roots(
                len: usize,
                direction: FftDirection,
            ) -> Result<Arc<[Complex<$ty>]>, WaftError> {
                type Store = Mutex<HashMap<(usize, FftDirection), Arc<[Complex<$ty>]>>>;
                static CACHE: OnceLock<Store> = OnceLock::new();
                let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
                if let Ok(map) = cache.lock() {
                    if let Some(existing) = map.get(&(len, direction)) {
                        return Ok(existing.clone());
                    }
                }
                let mut roots = try_vec![Complex::<$ty>::default(); len];
                for (k, dst) in roots.iter_mut().enumerate() {
                    *dst = compute_twiddle(k, len, direction);
                }
                let roots: Arc<[Complex<$ty>]> = roots.into();
                if let Ok(mut map) = cache.lock() {
                    // Racing builders settle on whichever entry landed first.
                    return Ok(map.entry((len, direction)).or_insert(roots).clone());
                }
                Ok(roots)
            }
        }
    };
}

impl_shared_unit_roots!(f32);
impl_shared_unit_roots!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_reverse_involution() {
        for bits in 1..=20u32 {
            let len = 1usize << bits;
            let step = (len / 256).max(1);
            for v in (0..len).step_by(step) {
                assert_eq!(bit_reverse(bit_reverse(v, bits), bits), v);
            }
        }
    }

    #[test]
    fn test_bit_reverse_small_values() {
        assert_eq!(bit_reverse(0b001, 3), 0b100);
        assert_eq!(bit_reverse(0b011, 3), 0b110);
        assert_eq!(bit_reverse(0b0001, 4), 0b1000);
        assert_eq!(bit_reverse(1, 10), 512);
    }

    #[test]
    fn test_bit_reverse_is_a_bijection() {
        let bits = 9u32;
        let mut seen = vec![false; 1 << bits];
        for v in 0..1usize << bits {
            let r = bit_reverse(v, bits);
            assert!(!seen[r]);
            seen[r] = true;
        }
        assert!(seen.iter().all(|&x| x));
    }

    #[test]
    fn test_digit_reverse_involution() {
        for &radix in &[2usize, 3, 5, 7] {
            for digits in 1..=5u32 {
                let len = radix.pow(digits);
                for v in 0..len {
                    assert_eq!(
                        digit_reverse(digit_reverse(v, radix, digits), radix, digits),
                        v
                    );
                }
            }
        }
    }

    #[test]
    fn test_digit_reverse_matches_bit_reverse_for_base_two() {
        for v in 0..256usize {
            assert_eq!(digit_reverse(v, 2, 8), bit_reverse(v, 8));
        }
    }

    #[test]
    fn test_trig_table_agrees_with_analytic() {
        for class in 0..=MAX_TRIG_CLASS {
            let len = 1usize << class;
            for i in (0..len).step_by((len / 16).max(1)) {
                let (s, c) = (-2. * i as f64 / len as f64).sincos_pi();
                assert_eq!(sin_table(class, i), s);
                assert_eq!(cos_table(class, i), c);
            }
        }
    }

    #[test]
    fn test_shared_unit_roots_are_shared() {
        let a = f64::unit_roots(240, FftDirection::Forward).unwrap();
        let b = f64::unit_roots(240, FftDirection::Forward).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let c = f64::unit_roots(240, FftDirection::Inverse).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        for (f, i) in a.iter().zip(c.iter()) {
            assert_eq!(f.re, i.re);
            assert_eq!(f.im, -i.im);
        }
    }
}
