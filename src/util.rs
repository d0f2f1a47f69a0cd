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
use crate::err::WaftError;
use crate::tables;
use crate::FftDirection;
use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

pub(crate) fn is_power_of_three(n: u64) -> bool {
    if n == 0 {
        return false;
    }
    let mut i = n;
    while i > 1 {
        if i % 3 != 0 {
            return false;
        }
        i /= 3;
    }
    true
}

pub(crate) fn is_power_of_five(n: u64) -> bool {
    let mut n = n;
    if n == 0 {
        return false;
    }
    while n % 5 == 0 {
        n /= 5;
    }
    n == 1
}

/// `exp(-2*pi*i*index/fft_len)` for the forward direction, conjugated for the
/// inverse. Power-of-two lengths resolve through the shared trig tables.
pub(crate) fn compute_twiddle<T: Float + 'static>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let (v_sin, v_cos) = tables::forward_twiddle_parts(index, fft_len);

    let result = Complex {
        re: v_cos.as_(),
        im: v_sin.as_(),
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

/// Inter-stage twiddles for a radix-`N` pass engine growing from `base_len`
/// up to `size`: for every stage, `N-1` twiddles per column.
pub(crate) fn radixn_floating_twiddles_from_base<T: Float + 'static, const N: usize>(
    base_len: usize,
    size: usize,
    fft_direction: FftDirection,
) -> Result<Vec<Complex<T>>, WaftError>
where
    f64: AsPrimitive<T>,
{
    let mut twiddles = Vec::new();
    twiddles
        .try_reserve_exact(size - 1)
        .map_err(|_| WaftError::OutOfMemory(size - 1))?;

    let mut cross_fft_len = base_len;
    while cross_fft_len < size {
        let num_columns = cross_fft_len;
        cross_fft_len *= N;

        for i in 0..num_columns {
            for k in 1..N {
                let twiddle = compute_twiddle(i * k, cross_fft_len, fft_direction);
                twiddles.push(twiddle);
            }
        }
    }

    Ok(twiddles)
}

/// Reorders `input` into `output` so that rows land at their base-`D`
/// digit-reversed positions, transposing width against `height` on the way:
/// `output[y + rev(x)*height] = input[x + y*width]`.
///
/// This is the bijection a decimation-in-time pass engine applies once before
/// its butterfly stages. Reading the index map backwards recovers the natural
/// order; the fused reverse-and-transpose is not its own inverse.
pub(crate) fn bitreversed_transpose<T: Copy, const D: usize>(
    height: usize,
    input: &[T],
    output: &mut [T],
) {
    let width = input.len() / height;

    if width <= 1 {
        output.copy_from_slice(input);
        return;
    }

    assert!(D > 1 && input.len() % height == 0 && input.len() == output.len());

    let strided_width = width / D;
    let rev_digits = if D.is_power_of_two() {
        let width_bits = width.trailing_zeros();
        let d_bits = D.trailing_zeros();

        // width must be a power of D
        assert!(width_bits % d_bits == 0);
        width_bits / d_bits
    } else {
        compute_logarithm::<D>(width).unwrap()
    };

    if strided_width == 0 {
        output.copy_from_slice(input);
        return;
    }

    for x in 0..strided_width {
        let mut i = 0;
        let x_fwd = [(); D].map(|_| {
            let value = D * x + i;
            i += 1;
            value
        });
        let x_rev = x_fwd.map(|x| reverse_digits::<D>(x, rev_digits));

        // The highest index the inner loop reaches is (x_rev[n] + 1)*height - 1
        // and the data ends at width*height - 1, so x_rev[n] < width suffices.
        for r in x_rev {
            assert!(r < width);
        }
        for y in 0..height {
            for (fwd, rev) in x_fwd.iter().zip(x_rev.iter()) {
                let input_index = *fwd + y * width;
                let output_index = y + *rev * height;

                unsafe {
                    let temp = *input.get_unchecked(input_index);
                    *output.get_unchecked_mut(output_index) = temp;
                }
            }
        }
    }
}

/// Base-`D` digit reversal over `rev_digits` digits. For power-of-two `D`
/// this is plain bit reversal in groups of `log2(D)` bits.
#[inline]
fn reverse_digits<const D: usize>(value: usize, rev_digits: u32) -> usize {
    assert!(D > 1);
    if D == 2 {
        return tables::bit_reverse(value, rev_digits);
    }
    tables::digit_reverse(value, D, rev_digits)
}

/// `n` such that `D^n == value`, or `None` when `value` is not a perfect power of `D`.
pub(crate) fn compute_logarithm<const D: usize>(value: usize) -> Option<u32> {
    if value == 0 || D < 2 {
        return None;
    }

    let mut current_exponent = 0;
    let mut current_value = value;

    while current_value % D == 0 {
        current_exponent += 1;
        current_value /= D;
    }

    if current_value == 1 {
        Some(current_exponent)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_predicates() {
        assert!(is_power_of_three(1));
        assert!(is_power_of_three(27));
        assert!(!is_power_of_three(12));
        assert!(is_power_of_five(125));
        assert!(!is_power_of_five(50));
        assert!(!is_power_of_three(0));
        assert!(!is_power_of_five(0));
    }

    #[test]
    fn test_compute_twiddle_quarters() {
        let w: Complex<f64> = compute_twiddle(0, 8, FftDirection::Forward);
        assert_eq!(w, Complex::new(1., 0.));
        let w: Complex<f64> = compute_twiddle(2, 8, FftDirection::Forward);
        assert_eq!(w, Complex::new(0., -1.));
        let w: Complex<f64> = compute_twiddle(2, 8, FftDirection::Inverse);
        assert_eq!(w, Complex::new(0., 1.));
        let w: Complex<f64> = compute_twiddle(4, 8, FftDirection::Forward);
        assert_eq!(w, Complex::new(-1., 0.));
    }

    #[test]
    fn test_compute_twiddle_matches_analytic_for_non_pow2() {
        for len in [3usize, 5, 7, 12, 60] {
            for k in 0..len {
                let w: Complex<f64> = compute_twiddle(k, len, FftDirection::Forward);
                let angle = -2. * std::f64::consts::PI * k as f64 / len as f64;
                assert!((w.re - angle.cos()).abs() < 1e-12);
                assert!((w.im - angle.sin()).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_bitreversed_transpose_against_model() {
        for &(height, width) in &[(4usize, 16usize), (4, 64), (8, 64), (16, 256)] {
            let len = height * width;
            let input: Vec<usize> = (0..len).collect();
            let mut output = vec![0usize; len];
            bitreversed_transpose::<usize, 4>(height, &input, &mut output);

            let digits = compute_logarithm::<4>(width).unwrap();
            let mut expected = vec![0usize; len];
            for y in 0..height {
                for x in 0..width {
                    let rev = crate::tables::digit_reverse(x, 4, digits);
                    expected[y + rev * height] = input[x + y * width];
                }
            }
            assert_eq!(output, expected);

            let mut seen = vec![false; len];
            for &v in output.iter() {
                assert!(!seen[v]);
                seen[v] = true;
            }
        }
    }

    #[test]
    fn test_bitreversed_transpose_inverse_recovers_input() {
        // Applying the reorder twice does not restore the original order;
        // undoing it means reading the index map backwards.
        for &(height, width) in &[(4usize, 16usize), (8, 64), (3, 81)] {
            let len = height * width;
            let input: Vec<usize> = (0..len).map(|i| i * 7 + 1).collect();
            let mut output = vec![0usize; len];
            match width.trailing_zeros() {
                0 => bitreversed_transpose::<usize, 3>(height, &input, &mut output),
                _ => bitreversed_transpose::<usize, 4>(height, &input, &mut output),
            }

            let radix = if width.is_power_of_two() { 4 } else { 3 };
            let digits = match radix {
                3 => compute_logarithm::<3>(width).unwrap(),
                _ => compute_logarithm::<4>(width).unwrap(),
            };
            let mut recovered = vec![0usize; len];
            for y in 0..height {
                for x in 0..width {
                    let rev = crate::tables::digit_reverse(x, radix, digits);
                    recovered[x + y * width] = output[y + rev * height];
                }
            }
            assert_eq!(recovered, input);
        }
    }

    #[test]
    fn test_compute_logarithm() {
        assert_eq!(compute_logarithm::<4>(64), Some(3));
        assert_eq!(compute_logarithm::<4>(32), None);
        assert_eq!(compute_logarithm::<3>(81), Some(4));
        assert_eq!(compute_logarithm::<3>(12), None);
    }
}
