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
use crate::spectrum_arithmetic::{ComplexArith, ComplexArithFactory};
use crate::traits::FftSample;
use crate::transpose::{TransposeExecutor, TransposeFactory};
use crate::util::compute_twiddle;
use crate::{FftDirection, FftExecutor, WaftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::sync::Arc;

/// Composite-length engine: factor the size as width x height, run the two
/// child transforms over the rows of the respective transposes, with one
/// twiddle application in between.
pub(crate) struct MixedRadix<T> {
    execution_length: usize,
    direction: FftDirection,
    twiddles: Vec<Complex<T>>,
    width_executor: Box<dyn FftExecutor<T> + Send + Sync>,
    width: usize,
    height_executor: Box<dyn FftExecutor<T> + Send + Sync>,
    height: usize,
    spectrum_ops: Arc<dyn ComplexArith<T> + Send + Sync>,
    transpose_executor: Box<dyn TransposeExecutor<T> + Send + Sync>,
    child_scratch: usize,
}

impl<T: FftSample + ComplexArithFactory<T> + TransposeFactory<T>> MixedRadix<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(
        width_executor: Box<dyn FftExecutor<T> + Send + Sync>,
        height_executor: Box<dyn FftExecutor<T> + Send + Sync>,
    ) -> Result<Self, WaftError> {
        assert_eq!(
            width_executor.direction(),
            height_executor.direction(),
            "width_fft and height_fft must have the same direction. got width direction={}, height direction={}",
            width_executor.direction(),
            height_executor.direction()
        );

        let direction = width_executor.direction();

        let width = width_executor.length();
        let height = height_executor.length();

        let len = width * height;

        let mut twiddles = try_vec![Complex::zero(); len];
        for (x, row) in twiddles.chunks_exact_mut(height).enumerate() {
            for (y, dst) in row.iter_mut().enumerate() {
                *dst = compute_twiddle(x * y, len, direction);
            }
        }

        let child_scratch = width_executor
            .scratch_length()
            .max(height_executor.scratch_length());

        Ok(MixedRadix {
            execution_length: len,
            width_executor,
            width,
            height_executor,
            height,
            direction,
            twiddles,
            spectrum_ops: T::make_complex_arith(),
            transpose_executor: T::transpose_strategy(width, height),
            child_scratch,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for MixedRadix<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        let mut scratch = try_vec![Complex::zero(); self.scratch_length()];
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

        let (own, child_scratch) = scratch.split_at_mut(self.execution_length);

        for chunk in in_place.chunks_exact_mut(self.execution_length) {
            // STEP 1: transpose
            self.transpose_executor
                .transpose(chunk, own, self.width, self.height);

            // STEP 2: perform FFTs of size `height`
            self.height_executor
                .execute_with_scratch(own, child_scratch)?;

            // STEP 3: apply twiddle factors
            self.spectrum_ops.mul(own, &self.twiddles, chunk);

            // STEP 4: transpose again
            self.transpose_executor
                .transpose(chunk, own, self.height, self.width);

            // STEP 5: perform FFTs of size `width`
            self.width_executor
                .execute_with_scratch(own, child_scratch)?;

            // STEP 6: transpose again
            self.transpose_executor
                .transpose(own, chunk, self.width, self.height);
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
        self.execution_length + self.child_scratch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::butterflies::{Butterfly2, Butterfly11};
    use crate::dft::Dft;
    use num_complex::Complex;

    #[test]
    fn test_mixed_radix_22() {
        let src: [Complex<f64>; 22] = [
            Complex::new(1.3, 1.6),
            Complex::new(1.7, -0.4),
            Complex::new(8.2, -0.1),
            Complex::new(0.9, 0.13),
            Complex::new(3.25, 2.7),
            Complex::new(0.654, 0.324),
            Complex::new(-0.45, -0.4),
            Complex::new(0.45, -0.4),
            Complex::new(8.2, -0.1),
            Complex::new(0.9, 0.13),
            Complex::new(3.25, 2.7),
            Complex::new(0.654, 0.324),
            Complex::new(3.25, 2.7),
            Complex::new(0.654, 0.324),
            Complex::new(-0.45, -0.4),
            Complex::new(0.45, -0.4),
            Complex::new(0.9, 0.13),
            Complex::new(3.25, 2.7),
            Complex::new(1.7, -0.4),
            Complex::new(8.2, -0.1),
            Complex::new(0.45, -0.4),
            Complex::new(8.2, -0.1),
        ];
        let reference_fft = Dft::new(22, FftDirection::Forward).unwrap();
        let mx = MixedRadix::new(
            Box::new(Butterfly11::new(FftDirection::Forward)),
            Box::new(Butterfly2::new(FftDirection::Forward)),
        )
        .unwrap();
        let mut reference_value = src.to_vec();
        reference_fft.execute(&mut reference_value).unwrap();
        let mut test_value = src.to_vec();
        mx.execute(&mut test_value).unwrap();
        reference_value
            .iter()
            .zip(test_value.iter())
            .enumerate()
            .for_each(|(idx, (a, b))| {
                assert!(
                    (a.re - b.re).abs() < 1e-9,
                    "a_re {} != b_re {} for at {idx}",
                    a.re,
                    b.re,
                );
                assert!(
                    (a.im - b.im).abs() < 1e-9,
                    "a_im {} != b_im {} for at {idx}",
                    a.im,
                    b.im,
                );
            });
    }

    #[test]
    fn test_mixed_radix_nested() {
        // 2 * 11 * 2 = 44, with a nested composite as the height child
        let inner = MixedRadix::new(
            Box::new(Butterfly11::new(FftDirection::Forward)),
            Box::new(Butterfly2::new(FftDirection::Forward)),
        )
        .unwrap();
        let mx = MixedRadix::new(
            Box::new(Butterfly2::new(FftDirection::Forward)),
            Box::new(inner),
        )
        .unwrap();
        assert_eq!(mx.length(), 44);

        let src: Vec<Complex<f64>> = (0..44)
            .map(|i| Complex::new((i as f64 * 0.37).sin(), (i as f64 * 0.21).cos()))
            .collect();
        let mut reference_value = src.clone();
        Dft::new(44, FftDirection::Forward)
            .unwrap()
            .execute(&mut reference_value)
            .unwrap();
        let mut test_value = src;
        mx.execute(&mut test_value).unwrap();
        reference_value
            .iter()
            .zip(test_value.iter())
            .enumerate()
            .for_each(|(idx, (a, b))| {
                assert!((a.re - b.re).abs() < 1e-9, "at {idx}");
                assert!((a.im - b.im).abs() < 1e-9, "at {idx}");
            });
    }
}
