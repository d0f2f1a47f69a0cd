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
use crate::butterflies::{Butterfly1, Butterfly5};
use crate::complex_fma::c_mul_fast;
use crate::err::try_vec;
use crate::short_butterflies::FastButterfly5;
use crate::traits::FftSample;
use crate::util::{bitreversed_transpose, is_power_of_five, radixn_floating_twiddles_from_base};
use crate::{FftDirection, FftExecutor, WaftError};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::marker::PhantomData;

/// Power-of-five pass engine with a 5-point butterfly base.
pub(crate) struct Radix5<T> {
    twiddles: Vec<Complex<T>>,
    execution_length: usize,
    direction: FftDirection,
    base_fft: Box<dyn FftExecutor<T> + Send + Sync>,
    base_len: usize,
    butterfly5: FastButterfly5<T>,
}

impl<T: FftSample> Radix5<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(size: usize, fft_direction: FftDirection) -> Result<Radix5<T>, WaftError> {
        assert!(
            is_power_of_five(size as u64),
            "Input length must be power of 5"
        );

        let base_fft: Box<dyn FftExecutor<T> + Send + Sync> = if size == 1 {
            Box::new(Butterfly1 {
                phantom_data: PhantomData,
                direction: fft_direction,
            })
        } else {
            Box::new(Butterfly5::new(fft_direction))
        };

        let base_len = base_fft.length();

        let twiddles = radixn_floating_twiddles_from_base::<T, 5>(base_len, size, fft_direction)?;

        Ok(Radix5 {
            execution_length: size,
            twiddles,
            direction: fft_direction,
            base_fft,
            base_len,
            butterfly5: FastButterfly5::new(fft_direction),
        })
    }

    pub(crate) fn base_length(&self) -> usize {
        self.base_len
    }
}

impl<T: FftSample> FftExecutor<T> for Radix5<T>
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
            bitreversed_transpose::<Complex<T>, 5>(self.base_len, chunk, scratch);

            self.base_fft.execute(scratch)?;

            let mut len = self.base_len;

            unsafe {
                let mut m_twiddles = self.twiddles.as_slice();

                while len < self.execution_length {
                    let columns = len;
                    len *= 5;
                    let fifth = len / 5;

                    for data in scratch.chunks_exact_mut(len) {
                        for j in 0..fifth {
                            let u0 = *data.get_unchecked(j);
                            let u1 = c_mul_fast(
                                *data.get_unchecked(j + fifth),
                                *m_twiddles.get_unchecked(4 * j),
                            );
                            let u2 = c_mul_fast(
                                *data.get_unchecked(j + 2 * fifth),
                                *m_twiddles.get_unchecked(4 * j + 1),
                            );
                            let u3 = c_mul_fast(
                                *data.get_unchecked(j + 3 * fifth),
                                *m_twiddles.get_unchecked(4 * j + 2),
                            );
                            let u4 = c_mul_fast(
                                *data.get_unchecked(j + 4 * fifth),
                                *m_twiddles.get_unchecked(4 * j + 3),
                            );

                            let (y0, y1, y2, y3, y4) =
                                self.butterfly5.butterfly5(u0, u1, u2, u3, u4);

                            *data.get_unchecked_mut(j) = y0;
                            *data.get_unchecked_mut(j + fifth) = y1;
                            *data.get_unchecked_mut(j + 2 * fifth) = y2;
                            *data.get_unchecked_mut(j + 3 * fifth) = y3;
                            *data.get_unchecked_mut(j + 4 * fifth) = y4;
                        }
                    }

                    m_twiddles = &m_twiddles[columns * 4..];
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
    fn test_radix5() {
        for i in 1..6 {
            let size = 5usize.pow(i);
            let mut input = vec![Complex::<f64>::default(); size];
            for z in input.iter_mut() {
                *z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
            }
            let src = input.to_vec();
            let radix_forward = Radix5::new(size, FftDirection::Forward).unwrap();
            let radix_inverse = Radix5::new(size, FftDirection::Inverse).unwrap();
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
