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
use crate::butterflies::{Butterfly1, Butterfly3, Butterfly9};
use crate::complex_fma::c_mul_fast;
use crate::err::try_vec;
use crate::mla::fmla;
use crate::traits::FftSample;
use crate::util::{
    bitreversed_transpose, compute_logarithm, compute_twiddle, is_power_of_three,
    radixn_floating_twiddles_from_base,
};
use crate::{FftDirection, FftExecutor, WaftError};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::marker::PhantomData;

/// Power-of-three pass engine with a 3- or 9-point butterfly base.
pub(crate) struct Radix3<T> {
    twiddles: Vec<Complex<T>>,
    execution_length: usize,
    twiddle: Complex<T>,
    direction: FftDirection,
    base_fft: Box<dyn FftExecutor<T> + Send + Sync>,
    base_len: usize,
}

impl<T: FftSample> Radix3<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(size: usize, fft_direction: FftDirection) -> Result<Radix3<T>, WaftError> {
        assert!(
            is_power_of_three(size as u64),
            "Input length must be power of 3"
        );

        let exponent = compute_logarithm::<3>(size)
            .unwrap_or_else(|| panic!("Radix3 length must be power of 3, but got {size}"));

        let base_fft: Box<dyn FftExecutor<T> + Send + Sync> = match exponent {
            0 => Box::new(Butterfly1 {
                phantom_data: PhantomData,
                direction: fft_direction,
            }),
            1 => Box::new(Butterfly3::new(fft_direction)),
            _ => Box::new(Butterfly9::new(fft_direction)),
        };

        let base_len = base_fft.length();

        let twiddles = radixn_floating_twiddles_from_base::<T, 3>(base_len, size, fft_direction)?;

        Ok(Radix3 {
            execution_length: size,
            twiddles,
            twiddle: compute_twiddle::<T>(1, 3, fft_direction),
            direction: fft_direction,
            base_fft,
            base_len,
        })
    }

    pub(crate) fn base_length(&self) -> usize {
        self.base_len
    }
}

impl<T: FftSample> FftExecutor<T> for Radix3<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        let mut scratch = try_vec![Complex::<T>::default(); self.execution_length];
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

        let scratch = &mut scratch[..self.execution_length];

        for chunk in in_place.chunks_exact_mut(self.execution_length) {
            // Digit-reversal permutation
            bitreversed_transpose::<Complex<T>, 3>(self.base_len, chunk, scratch);

            self.base_fft.execute(scratch)?;

            let mut len = self.base_len;

            unsafe {
                let mut m_twiddles = self.twiddles.as_slice();

                while len < self.execution_length {
                    let columns = len;
                    len *= 3;
                    let third = len / 3;

                    for data in scratch.chunks_exact_mut(len) {
                        for j in 0..third {
                            let u0 = *data.get_unchecked(j);
                            let u1 = c_mul_fast(
                                *data.get_unchecked(j + third),
                                *m_twiddles.get_unchecked(2 * j),
                            );
                            let u2 = c_mul_fast(
                                *data.get_unchecked(j + 2 * third),
                                *m_twiddles.get_unchecked(2 * j + 1),
                            );

                            let xp = u1 + u2;
                            let xn = u1 - u2;
                            let sum = u0 + xp;

                            let w_1 = Complex {
                                re: fmla(self.twiddle.re, xp.re, u0.re),
                                im: fmla(self.twiddle.re, xp.im, u0.im),
                            };

                            *data.get_unchecked_mut(j) = sum;
                            *data.get_unchecked_mut(j + third) = Complex {
                                re: fmla(-self.twiddle.im, xn.im, w_1.re),
                                im: fmla(self.twiddle.im, xn.re, w_1.im),
                            };
                            *data.get_unchecked_mut(j + 2 * third) = Complex {
                                re: fmla(self.twiddle.im, xn.im, w_1.re),
                                im: fmla(-self.twiddle.im, xn.re, w_1.im),
                            };
                        }
                    }

                    m_twiddles = &m_twiddles[columns * 2..];
                }
            }

            chunk.copy_from_slice(scratch);
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
    use rand::Rng;

    #[test]
    fn test_radix3() {
        for i in 1..8 {
            let size = 3usize.pow(i);
            let mut input = vec![Complex::<f64>::default(); size];
            for z in input.iter_mut() {
                *z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
            }
            let src = input.to_vec();
            let radix_forward = Radix3::new(size, FftDirection::Forward).unwrap();
            let radix_inverse = Radix3::new(size, FftDirection::Inverse).unwrap();
            radix_forward.execute(&mut input).unwrap();
            radix_inverse.execute(&mut input).unwrap();

            let scale = 1.0 / size as f64;
            input.iter().zip(src.iter()).for_each(|(a, b)| {
                assert!(
                    (a.re * scale - b.re).abs() < 1e-9,
                    "a_re {} != b_re {} for size {}",
                    a.re * scale,
                    b.re,
                    size
                );
                assert!(
                    (a.im * scale - b.im).abs() < 1e-9,
                    "a_im {} != b_im {} for size {}",
                    a.im * scale,
                    b.im,
                    size
                );
            });
        }
    }
}
