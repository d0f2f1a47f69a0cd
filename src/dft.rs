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
use crate::err::try_vec;
use crate::mla::fmla;
use crate::tables::SharedUnitRoots;
use crate::traits::FftSample;
use crate::{FftDirection, FftExecutor, WaftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::sync::Arc;

/// Direct-summation transform for radices outside the fixed kernel catalogue.
///
/// O(n^2), but outputs are produced in conjugate pairs: bins `k` and `n-k`
/// share their per-term products, which roughly halves the multiply count
/// against the textbook loop. The unit-root table is shared by reference with
/// every other plan of the same length and direction.
pub(crate) struct Dft<T> {
    execution_length: usize,
    twiddles: Arc<[Complex<T>]>,
    direction: FftDirection,
}

impl<T: FftSample + SharedUnitRoots> Dft<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(size: usize, fft_direction: FftDirection) -> Result<Dft<T>, WaftError> {
        Ok(Dft {
            execution_length: size,
            twiddles: T::unit_roots(size, fft_direction)?,
            direction: fft_direction,
        })
    }
}

impl<T: FftSample> Dft<T> {
    fn run(&self, chunk: &mut [Complex<T>], output: &mut [Complex<T>]) {
        let n = self.execution_length;

        let mut dc = Complex::<T>::zero();
        for src in chunk.iter() {
            dc = dc + *src;
        }
        output[0] = dc;

        let half = (n - 1) / 2;
        for k in 1..=half {
            let mut sum_lo = Complex::<T>::zero();
            let mut sum_hi = Complex::<T>::zero();
            let mut twiddle_idx = 0usize;
            for src in chunk.iter() {
                let w = unsafe { *self.twiddles.get_unchecked(twiddle_idx) };
                // Four shared products serve both bins of the conjugate pair.
                let ac = src.re * w.re;
                let bd = src.im * w.im;
                let ad = src.re * w.im;
                let bc = src.im * w.re;
                sum_lo = Complex {
                    re: sum_lo.re + (ac - bd),
                    im: sum_lo.im + (ad + bc),
                };
                sum_hi = Complex {
                    re: sum_hi.re + (ac + bd),
                    im: sum_hi.im + (bc - ad),
                };
                twiddle_idx += k;
                if twiddle_idx >= n {
                    twiddle_idx -= n;
                }
            }
            output[k] = sum_lo;
            output[n - k] = sum_hi;
        }

        if n % 2 == 0 {
            // Nyquist bin is the alternating sum.
            let mut sum = Complex::<T>::zero();
            let mut sign = T::one();
            for src in chunk.iter() {
                sum = Complex {
                    re: fmla(sign, src.re, sum.re),
                    im: fmla(sign, src.im, sum.im),
                };
                sign = -sign;
            }
            output[n / 2] = sum;
        }

        chunk.copy_from_slice(output);
    }
}

impl<T: FftSample> FftExecutor<T> for Dft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        let mut scratch = try_vec![Complex::<T>::zero(); self.execution_length];
        self.execute_with_scratch(in_place, &mut scratch)
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        if in_place.len() % self.execution_length != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.execution_length,
            ));
        }
        if scratch.len() < self.scratch_length() {
            return Err(WaftError::ScratchBufferIsTooSmall(
                scratch.len(),
                self.scratch_length(),
            ));
        }

        let output = &mut scratch[..self.execution_length];
        for chunk in in_place.chunks_exact_mut(self.execution_length) {
            self.run(chunk, output);
        }
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }

    fn scratch_length(&self) -> usize {
        self.execution_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_dft(input: &[Complex<f64>], direction: FftDirection) -> Vec<Complex<f64>> {
        let n = input.len();
        let sign = match direction {
            FftDirection::Forward => -1.0,
            FftDirection::Inverse => 1.0,
        };
        (0..n)
            .map(|k| {
                let mut sum = Complex::new(0., 0.);
                for (j, x) in input.iter().enumerate() {
                    let angle = sign * 2.0 * std::f64::consts::PI * (j * k % n) as f64 / n as f64;
                    sum += x * Complex::new(angle.cos(), angle.sin());
                }
                sum
            })
            .collect()
    }

    #[test]
    fn test_dft_matches_naive() {
        for &n in &[2usize, 5, 13, 17, 22, 101] {
            let input: Vec<Complex<f64>> = (0..n)
                .map(|i| Complex::new((i as f64 * 0.37).sin(), (i as f64 * 0.19).cos()))
                .collect();
            let expected = naive_dft(&input, FftDirection::Forward);

            let dft = Dft::new(n, FftDirection::Forward).unwrap();
            let mut actual = input.clone();
            dft.execute(&mut actual).unwrap();

            for (idx, (a, b)) in expected.iter().zip(actual.iter()).enumerate() {
                assert!(
                    (a.re - b.re).abs() < 1e-9,
                    "a_re {} != b_re {} for size {n} at {idx}",
                    a.re,
                    b.re,
                );
                assert!(
                    (a.im - b.im).abs() < 1e-9,
                    "a_im {} != b_im {} for size {n} at {idx}",
                    a.im,
                    b.im,
                );
            }
        }
    }

    #[test]
    fn test_dft_roundtrip() {
        for &n in &[13usize, 19, 23] {
            let input: Vec<Complex<f64>> = (0..n)
                .map(|i| Complex::new(i as f64 * 0.1 - 1.0, 0.5 - i as f64 * 0.05))
                .collect();
            let forward = Dft::new(n, FftDirection::Forward).unwrap();
            let inverse = Dft::new(n, FftDirection::Inverse).unwrap();

            let mut data = input.clone();
            forward.execute(&mut data).unwrap();
            inverse.execute(&mut data).unwrap();

            let scale = 1.0 / n as f64;
            for (idx, (a, b)) in input.iter().zip(data.iter()).enumerate() {
                assert!(
                    (a.re - b.re * scale).abs() < 1e-9,
                    "a_re {} != b_re {} for size {n} at {idx}",
                    a.re,
                    b.re * scale,
                );
                assert!(
                    (a.im - b.im * scale).abs() < 1e-9,
                    "a_im {} != b_im {} for size {n} at {idx}",
                    a.im,
                    b.im * scale,
                );
            }
        }
    }

    #[test]
    fn test_dft_rejects_short_scratch() {
        let dft = Dft::<f64>::new(13, FftDirection::Forward).unwrap();
        let mut data = vec![Complex::new(0., 0.); 13];
        let mut scratch = vec![Complex::new(0., 0.); 4];
        assert!(dft.execute_with_scratch(&mut data, &mut scratch).is_err());
    }
}
