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
use crate::butterflies::{Butterfly1, Butterfly2, Butterfly4, Butterfly8};
use crate::butterflies_pow2::{radix4_passes, Butterfly16, Butterfly32, Butterfly64};
use crate::capability::FftCapability;
use crate::err::try_vec;
use crate::traits::FftSample;
use crate::util::{bitreversed_transpose, radixn_floating_twiddles_from_base};
use crate::{FftDirection, FftExecutor, WaftError};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::marker::PhantomData;

/// Power-of-two pass engine: digit-reversal reorder, a butterfly base, then
/// radix-4 combine stages up to the full length.
///
/// The base butterfly is sized from the exponent parity and the detected CPU
/// capability; wide vector units favour the 64-point base.
pub(crate) struct Radix4<T> {
    twiddles: Vec<Complex<T>>,
    execution_length: usize,
    direction: FftDirection,
    base_len: usize,
    base_fft: Box<dyn FftExecutor<T> + Send + Sync>,
}

impl<T: FftSample> Radix4<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(
        size: usize,
        fft_direction: FftDirection,
        capability: FftCapability,
    ) -> Result<Radix4<T>, WaftError> {
        assert!(size.is_power_of_two(), "Input length must be a power of 2");

        let exponent = size.trailing_zeros();
        let base_fft: Box<dyn FftExecutor<T> + Send + Sync> = match exponent {
            0 => Box::new(Butterfly1 {
                phantom_data: PhantomData,
                direction: fft_direction,
            }),
            1 => Box::new(Butterfly2::new(fft_direction)),
            2 => Box::new(Butterfly4::new(fft_direction)),
            3 => Box::new(Butterfly8::new(fft_direction)),
            _ => {
                if exponent % 2 == 1 {
                    Box::new(Butterfly32::new(fft_direction)?)
                } else if capability >= FftCapability::Wide && exponent >= 6 {
                    Box::new(Butterfly64::new(fft_direction)?)
                } else {
                    Box::new(Butterfly16::new(fft_direction)?)
                }
            }
        };

        let base_len = base_fft.length();
        let twiddles = radixn_floating_twiddles_from_base::<T, 4>(base_len, size, fft_direction)?;

        Ok(Radix4 {
            execution_length: size,
            twiddles,
            direction: fft_direction,
            base_len,
            base_fft,
        })
    }

    pub(crate) fn base_length(&self) -> usize {
        self.base_len
    }
}

impl<T: FftSample> FftExecutor<T> for Radix4<T>
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
            scratch.copy_from_slice(chunk);
            // digit reversal first
            bitreversed_transpose::<Complex<T>, 4>(self.base_len, scratch, chunk);

            self.base_fft.execute(chunk)?;

            radix4_passes(chunk, self.base_len, &self.twiddles, self.direction);
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
    fn test_radix4() {
        for i in 1..7 {
            let size = 4usize.pow(i);
            let mut input = vec![Complex::<f32>::default(); size];
            for z in input.iter_mut() {
                *z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
            }
            let src = input.to_vec();
            let radix_forward =
                Radix4::new(size, FftDirection::Forward, FftCapability::detect()).unwrap();
            let radix_inverse =
                Radix4::new(size, FftDirection::Inverse, FftCapability::detect()).unwrap();
            radix_forward.execute(&mut input).unwrap();
            radix_inverse.execute(&mut input).unwrap();

            input = input
                .iter()
                .map(|&x| x * (1.0 / input.len() as f32))
                .collect();

            input.iter().zip(src.iter()).for_each(|(a, b)| {
                assert!(
                    (a.re - b.re).abs() < 1e-4,
                    "a_re {} != b_re {} for size {}",
                    a.re,
                    b.re,
                    size
                );
                assert!(
                    (a.im - b.im).abs() < 1e-4,
                    "a_im {} != b_im {} for size {}",
                    a.im,
                    b.im,
                    size
                );
            });
        }
    }

    #[test]
    fn test_radix4_odd_exponents() {
        for exp in [1u32, 3, 5, 7] {
            let size = 1usize << exp;
            let mut input = vec![Complex::<f64>::default(); size];
            for z in input.iter_mut() {
                *z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
            }
            let src = input.to_vec();
            let radix_forward =
                Radix4::new(size, FftDirection::Forward, FftCapability::detect()).unwrap();
            let radix_inverse =
                Radix4::new(size, FftDirection::Inverse, FftCapability::detect()).unwrap();
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
