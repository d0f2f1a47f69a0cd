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

//! DCT-II and DCT-III over the complex engine.
//!
//! The signal is permuted even-indices-ascending then odd-indices-descending,
//! run through a same-length complex FFT, and folded with quarter-wave
//! twiddles. DCT-III inverts the construction, so a forward-then-inverse pass
//! scales the signal by `2 * size`.

use crate::capability::FftCapability;
use crate::err::try_vec;
use crate::planner::{plan_executor, validate_real_size};
use crate::spectrum_arithmetic::ComplexArithFactory;
use crate::tables::SharedUnitRoots;
use crate::traits::FftSample;
use crate::transpose::TransposeFactory;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftExecutor, WaftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// A prepared DCT of a fixed size. The forward direction is DCT-II, the
/// inverse is DCT-III; neither is normalized.
pub struct DctPlan<T> {
    size: usize,
    forward_executor: Box<dyn FftExecutor<T> + Send + Sync>,
    inverse_executor: Box<dyn FftExecutor<T> + Send + Sync>,
    // e^(-i*pi*k / (2*size)) for k in 0..size
    twiddles: Vec<Complex<T>>,
    scratch_length: usize,
}

pub(crate) fn build_dct_plan<T>(size: usize) -> Result<DctPlan<T>, WaftError>
where
    T: FftSample + ComplexArithFactory<T> + TransposeFactory<T> + SharedUnitRoots,
    f64: AsPrimitive<T>,
{
    validate_real_size(size)?;
    let capability = FftCapability::detect();
    let (forward_executor, _) = plan_executor::<T>(size, FftDirection::Forward, capability)?;
    let (inverse_executor, _) = plan_executor::<T>(size, FftDirection::Inverse, capability)?;

    let mut twiddles = try_vec![Complex::<T>::zero(); size];
    for (k, twiddle) in twiddles.iter_mut().enumerate() {
        *twiddle = compute_twiddle(k, 4 * size, FftDirection::Forward);
    }

    let child_scratch = forward_executor
        .scratch_length()
        .max(inverse_executor.scratch_length());
    Ok(DctPlan {
        size,
        forward_executor,
        inverse_executor,
        twiddles,
        scratch_length: size + child_scratch,
    })
}

impl DctPlan<f32> {
    pub fn new(size: usize) -> Result<DctPlan<f32>, WaftError> {
        build_dct_plan(size)
    }
}

impl DctPlan<f64> {
    pub fn new(size: usize) -> Result<DctPlan<f64>, WaftError> {
        build_dct_plan(size)
    }
}

impl<T: FftSample> DctPlan<T>
where
    f64: AsPrimitive<T>,
{
    pub fn size(&self) -> usize {
        self.size
    }

    /// Scratch requirement in complex points.
    pub fn scratch_length(&self) -> usize {
        self.scratch_length
    }

    /// Scratch requirement in bytes.
    pub fn temp_size(&self) -> usize {
        self.scratch_length * std::mem::size_of::<Complex<T>>()
    }

    pub fn make_scratch(&self) -> Result<Vec<Complex<T>>, WaftError> {
        Ok(try_vec![Complex::zero(); self.scratch_length])
    }

    /// DCT-II: `out[k] = 2 * sum_j in[j] * cos(pi*k*(2j+1) / (2n))`.
    pub fn forward(&self, input: &[T], output: &mut [T]) -> Result<(), WaftError> {
        let mut scratch = self.make_scratch()?;
        self.forward_with_scratch(input, output, &mut scratch)
    }

    /// DCT-III, scaled so that a DCT-II followed by this yields `2n` times
    /// the original signal.
    pub fn inverse(&self, input: &[T], output: &mut [T]) -> Result<(), WaftError> {
        let mut scratch = self.make_scratch()?;
        self.inverse_with_scratch(input, output, &mut scratch)
    }

    pub fn forward_with_scratch(
        &self,
        input: &[T],
        output: &mut [T],
        scratch: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.validate(input.len(), output.len(), scratch.len())?;
        let n = self.size;
        let (buffer, child_scratch) = scratch.split_at_mut(n);

        // Evens ascending into the front, odds descending into the back.
        for (j, dst) in buffer.iter_mut().take(n.div_ceil(2)).enumerate() {
            *dst = Complex::new(input[2 * j], T::zero());
        }
        for (j, dst) in buffer.iter_mut().rev().take(n / 2).enumerate() {
            *dst = Complex::new(input[2 * j + 1], T::zero());
        }

        self.forward_executor
            .execute_with_scratch(buffer, child_scratch)?;

        let two: T = 2.0f64.as_();
        for ((dst, src), twiddle) in output
            .iter_mut()
            .zip(buffer.iter())
            .zip(self.twiddles.iter())
        {
            *dst = two * (src.re * twiddle.re - src.im * twiddle.im);
        }
        Ok(())
    }

    pub fn inverse_with_scratch(
        &self,
        input: &[T],
        output: &mut [T],
        scratch: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.validate(input.len(), output.len(), scratch.len())?;
        let n = self.size;
        let (buffer, child_scratch) = scratch.split_at_mut(n);

        buffer[0] = Complex::new(input[0], T::zero());
        for k in 1..n {
            // e^(+i*pi*k/(2n)) * (c[k] - i*c[n-k])
            let twiddle = self.twiddles[k].conj();
            let bin = Complex::new(input[k], -input[n - k]);
            buffer[k] = bin * twiddle;
        }

        self.inverse_executor
            .execute_with_scratch(buffer, child_scratch)?;

        for (j, src) in buffer.iter().take(n.div_ceil(2)).enumerate() {
            output[2 * j] = src.re;
        }
        for (j, src) in buffer.iter().rev().take(n / 2).enumerate() {
            output[2 * j + 1] = src.re;
        }
        Ok(())
    }

    fn validate(
        &self,
        input_len: usize,
        output_len: usize,
        scratch_len: usize,
    ) -> Result<(), WaftError> {
        if input_len != self.size {
            return Err(WaftError::InvalidSizeMultiplier(input_len, self.size));
        }
        if output_len != self.size {
            return Err(WaftError::InvalidSizeMultiplier(output_len, self.size));
        }
        if scratch_len < self.scratch_length {
            return Err(WaftError::ScratchBufferIsTooSmall(
                scratch_len,
                self.scratch_length,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{naive_dct2, naive_dct3};

    #[test]
    fn test_dct_minimum_size() {
        assert!(DctPlan::<f64>::new(0).is_err());
        assert!(DctPlan::<f64>::new(3).is_err());
        assert!(DctPlan::<f64>::new(4).is_ok());
    }

    #[test]
    fn test_dct2_against_naive() {
        for &size in &[4usize, 5, 8, 12, 16, 60, 100, 101, 128] {
            let plan = DctPlan::<f64>::new(size).unwrap();
            let input: Vec<f64> = (0..size).map(|i| (i as f64 * 0.633).sin()).collect();
            let expected = naive_dct2(&input);
            let mut actual = vec![0f64; size];
            plan.forward(&input, &mut actual).unwrap();
            for (idx, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
                assert!(
                    (a - b).abs() < 1e-8 * size as f64,
                    "a {} != b {} for size {size} at {idx}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_dct3_against_naive() {
        for &size in &[4usize, 5, 8, 12, 60, 100, 101] {
            let plan = DctPlan::<f64>::new(size).unwrap();
            let input: Vec<f64> = (0..size).map(|i| (i as f64 * 0.871).cos()).collect();
            let expected = naive_dct3(&input);
            let mut actual = vec![0f64; size];
            plan.inverse(&input, &mut actual).unwrap();
            for (idx, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
                assert!(
                    (a - b).abs() < 1e-8 * size as f64,
                    "a {} != b {} for size {size} at {idx}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_dct_roundtrip_scales_by_two_n() {
        for &size in &[4usize, 12, 64, 100, 243] {
            let plan = DctPlan::<f64>::new(size).unwrap();
            let input: Vec<f64> = (0..size).map(|i| (i as f64 * 1.113).sin()).collect();
            let mut spectrum = vec![0f64; size];
            let mut back = vec![0f64; size];
            let mut scratch = plan.make_scratch().unwrap();
            plan.forward_with_scratch(&input, &mut spectrum, &mut scratch)
                .unwrap();
            plan.inverse_with_scratch(&spectrum, &mut back, &mut scratch)
                .unwrap();
            let scale = 2.0 * size as f64;
            for (idx, (a, &b)) in back.iter().zip(input.iter()).enumerate() {
                assert!(
                    (a - b * scale).abs() < 1e-8 * scale,
                    "a {} != b {} for size {size} at {idx}",
                    a,
                    b * scale
                );
            }
        }
    }

    #[test]
    fn test_dct_rejects_wrong_lengths() {
        let plan = DctPlan::<f64>::new(16).unwrap();
        let input = vec![0f64; 16];
        let mut short = vec![0f64; 15];
        assert!(plan.forward(&input, &mut short).is_err());
    }
}
