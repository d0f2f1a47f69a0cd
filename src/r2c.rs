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

//! Real-input transforms layered over the complex engine.
//!
//! Even lengths pack the signal into a half-length complex transform and
//! recombine with quarter-spectrum twiddles; odd lengths fall back to a
//! full-length complex transform.

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

/// Spectrum memory layout for real-input plans.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RealPackFormat {
    /// `n/2 + 1` bins; the DC and Nyquist bins carry a zero imaginary part.
    Explicit,
    /// `n/2` bins; the always-real Nyquist bin rides in the imaginary slot of
    /// the DC bin. Even lengths only.
    Folded,
}

enum RealPath<T> {
    Even {
        half_forward: Box<dyn FftExecutor<T> + Send + Sync>,
        half_inverse: Box<dyn FftExecutor<T> + Send + Sync>,
        // 0.5 * W^k for the forward recombination, plain W^-k for the inverse
        forward_twiddles: Vec<Complex<T>>,
        inverse_twiddles: Vec<Complex<T>>,
    },
    Odd {
        full_forward: Box<dyn FftExecutor<T> + Send + Sync>,
        full_inverse: Box<dyn FftExecutor<T> + Send + Sync>,
    },
}

/// A prepared transform between `size` reals and a half spectrum.
///
/// Both directions are unnormalized; a forward-then-inverse pass scales the
/// signal by `size`.
pub struct RealFftPlan<T> {
    size: usize,
    spectrum_length: usize,
    pack_format: RealPackFormat,
    path: RealPath<T>,
    scratch_length: usize,
}

pub(crate) fn build_real_plan<T>(
    size: usize,
    pack_format: RealPackFormat,
) -> Result<RealFftPlan<T>, WaftError>
where
    T: FftSample + ComplexArithFactory<T> + TransposeFactory<T> + SharedUnitRoots,
    f64: AsPrimitive<T>,
{
    validate_real_size(size)?;
    if pack_format == RealPackFormat::Folded && size % 2 != 0 {
        return Err(WaftError::InvalidPackFormat(size));
    }
    let capability = FftCapability::detect();
    let (path, scratch_length) = if size % 2 == 0 {
        let half = size / 2;
        let (half_forward, _) = plan_executor::<T>(half, FftDirection::Forward, capability)?;
        let (half_inverse, _) = plan_executor::<T>(half, FftDirection::Inverse, capability)?;

        let twiddles_count = if size % 4 == 0 { size / 4 } else { size / 4 + 1 };
        let mut forward_twiddles = try_vec![Complex::<T>::zero(); twiddles_count - 1];
        for (i, twiddle) in forward_twiddles.iter_mut().enumerate() {
            *twiddle = compute_twiddle(i + 1, size, FftDirection::Forward) * 0.5f64.as_();
        }
        let mut inverse_twiddles = try_vec![Complex::<T>::zero(); twiddles_count - 1];
        for (i, twiddle) in inverse_twiddles.iter_mut().enumerate() {
            *twiddle = compute_twiddle(i + 1, size, FftDirection::Inverse);
        }

        let child_scratch = half_forward
            .scratch_length()
            .max(half_inverse.scratch_length());
        let scratch_length = (half + 1) + child_scratch;
        (
            RealPath::Even {
                half_forward,
                half_inverse,
                forward_twiddles,
                inverse_twiddles,
            },
            scratch_length,
        )
    } else {
        let (full_forward, _) = plan_executor::<T>(size, FftDirection::Forward, capability)?;
        let (full_inverse, _) = plan_executor::<T>(size, FftDirection::Inverse, capability)?;
        let child_scratch = full_forward
            .scratch_length()
            .max(full_inverse.scratch_length());
        let scratch_length = size + child_scratch;
        (
            RealPath::Odd {
                full_forward,
                full_inverse,
            },
            scratch_length,
        )
    };
    let spectrum_length = match pack_format {
        RealPackFormat::Explicit => size / 2 + 1,
        RealPackFormat::Folded => size / 2,
    };
    Ok(RealFftPlan {
        size,
        spectrum_length,
        pack_format,
        path,
        scratch_length,
    })
}

impl RealFftPlan<f32> {
    pub fn new(size: usize, pack_format: RealPackFormat) -> Result<RealFftPlan<f32>, WaftError> {
        build_real_plan(size, pack_format)
    }
}

impl RealFftPlan<f64> {
    pub fn new(size: usize, pack_format: RealPackFormat) -> Result<RealFftPlan<f64>, WaftError> {
        build_real_plan(size, pack_format)
    }
}

impl<T: FftSample> RealFftPlan<T>
where
    f64: AsPrimitive<T>,
{
    /// Signal length in real points.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Spectrum length in complex bins for the plan's pack format.
    pub fn spectrum_length(&self) -> usize {
        self.spectrum_length
    }

    pub fn pack_format(&self) -> RealPackFormat {
        self.pack_format
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

    pub fn forward(&self, input: &[T], output: &mut [Complex<T>]) -> Result<(), WaftError> {
        let mut scratch = self.make_scratch()?;
        self.forward_with_scratch(input, output, &mut scratch)
    }

    pub fn inverse(&self, input: &[Complex<T>], output: &mut [T]) -> Result<(), WaftError> {
        let mut scratch = self.make_scratch()?;
        self.inverse_with_scratch(input, output, &mut scratch)
    }

    pub fn forward_with_scratch(
        &self,
        input: &[T],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        if input.len() != self.size {
            return Err(WaftError::InvalidSizeMultiplier(input.len(), self.size));
        }
        if output.len() != self.spectrum_length {
            return Err(WaftError::InvalidSizeMultiplier(
                output.len(),
                self.spectrum_length,
            ));
        }
        if scratch.len() < self.scratch_length {
            return Err(WaftError::ScratchBufferIsTooSmall(
                scratch.len(),
                self.scratch_length,
            ));
        }
        match &self.path {
            RealPath::Even {
                half_forward,
                forward_twiddles,
                ..
            } => {
                let half = self.size / 2;
                let (spectrum, child_scratch) = scratch.split_at_mut(half + 1);

                for (dst, input_pair) in spectrum.iter_mut().zip(input.chunks_exact(2)) {
                    *dst = Complex::new(input_pair[0], input_pair[1]);
                }
                half_forward.execute_with_scratch(&mut spectrum[..half], child_scratch)?;

                let (mut left, mut right) = spectrum.split_at_mut((half + 1) / 2);
                match (left.first_mut(), right.last_mut()) {
                    (Some(first_element), Some(last_element)) => {
                        // DC and Nyquist are the sum and difference of the
                        // first value's real and imaginary parts.
                        let first_value = *first_element;
                        *first_element = Complex {
                            re: first_value.re + first_value.im,
                            im: T::zero(),
                        };
                        *last_element = Complex {
                            re: first_value.re - first_value.im,
                            im: T::zero(),
                        };
                        left = &mut left[1..];
                        let right_len = right.len();
                        right = &mut right[..right_len - 1];
                    }
                    _ => return Ok(()),
                }

                recombine_forward(forward_twiddles, left, right);

                if (half + 1) % 2 == 1 {
                    if let Some(center_element) = spectrum.get_mut((half + 1) / 2) {
                        center_element.im = -center_element.im;
                    }
                }

                self.pack(spectrum, output);
                Ok(())
            }
            RealPath::Odd { full_forward, .. } => {
                let (buffer, child_scratch) = scratch.split_at_mut(self.size);
                for (dst, &src) in buffer.iter_mut().zip(input.iter()) {
                    *dst = Complex::new(src, T::zero());
                }
                full_forward.execute_with_scratch(buffer, child_scratch)?;
                output.copy_from_slice(&buffer[..self.spectrum_length]);
                if let Some(elem) = output.first_mut() {
                    elem.im = T::zero();
                }
                Ok(())
            }
        }
    }

    pub fn inverse_with_scratch(
        &self,
        input: &[Complex<T>],
        output: &mut [T],
        scratch: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        if input.len() != self.spectrum_length {
            return Err(WaftError::InvalidSizeMultiplier(
                input.len(),
                self.spectrum_length,
            ));
        }
        if output.len() != self.size {
            return Err(WaftError::InvalidSizeMultiplier(output.len(), self.size));
        }
        if scratch.len() < self.scratch_length {
            return Err(WaftError::ScratchBufferIsTooSmall(
                scratch.len(),
                self.scratch_length,
            ));
        }
        match &self.path {
            RealPath::Even {
                half_inverse,
                inverse_twiddles,
                ..
            } => {
                let half = self.size / 2;
                let (spectrum, child_scratch) = scratch.split_at_mut(half + 1);

                self.unpack(input, spectrum);
                spectrum[0].im = T::zero();
                spectrum[half].im = T::zero();

                let (mut left, mut right) = spectrum.split_at_mut((half + 1) / 2);
                match (left.first_mut(), right.last_mut()) {
                    (Some(first_input), Some(last_input)) => {
                        let first_sum = *first_input + *last_input;
                        let first_diff = *first_input - *last_input;
                        *first_input = Complex {
                            re: first_sum.re - first_sum.im,
                            im: first_diff.re - first_diff.im,
                        };
                        left = &mut left[1..];
                        let right_len = right.len();
                        right = &mut right[..right_len - 1];
                    }
                    _ => return Ok(()),
                }

                recombine_inverse(inverse_twiddles, left, right);

                if (half + 1) % 2 == 1 {
                    let center_element = spectrum[(half + 1) / 2];
                    let doubled = center_element + center_element;
                    spectrum[(half + 1) / 2] = doubled.conj();
                }

                half_inverse.execute_with_scratch(&mut spectrum[..half], child_scratch)?;

                for (dst, src) in output.chunks_exact_mut(2).zip(spectrum.iter()) {
                    dst[0] = src.re;
                    dst[1] = src.im;
                }
                Ok(())
            }
            RealPath::Odd { full_inverse, .. } => {
                let (buffer, child_scratch) = scratch.split_at_mut(self.size);
                buffer[..input.len()].copy_from_slice(input);
                buffer[0].im = T::zero();
                for (buf, val) in buffer
                    .iter_mut()
                    .rev()
                    .take(self.size / 2)
                    .zip(input.iter().skip(1))
                {
                    *buf = val.conj();
                }
                full_inverse.execute_with_scratch(buffer, child_scratch)?;
                for (dst, src) in output.iter_mut().zip(buffer.iter()) {
                    *dst = src.re;
                }
                Ok(())
            }
        }
    }

    fn pack(&self, spectrum: &[Complex<T>], output: &mut [Complex<T>]) {
        match self.pack_format {
            RealPackFormat::Explicit => output.copy_from_slice(spectrum),
            RealPackFormat::Folded => {
                output.copy_from_slice(&spectrum[..self.spectrum_length]);
                output[0].im = spectrum[self.spectrum_length].re;
            }
        }
    }

    fn unpack(&self, input: &[Complex<T>], spectrum: &mut [Complex<T>]) {
        match self.pack_format {
            RealPackFormat::Explicit => spectrum.copy_from_slice(input),
            RealPackFormat::Folded => {
                spectrum[..input.len()].copy_from_slice(input);
                spectrum[0].im = T::zero();
                spectrum[input.len()] = Complex::new(input[0].im, T::zero());
            }
        }
    }
}

fn recombine_forward<T: FftSample>(
    twiddles: &[Complex<T>],
    left: &mut [Complex<T>],
    right: &mut [Complex<T>],
) where
    f64: AsPrimitive<T>,
{
    for ((twiddle, out), out_rev) in twiddles
        .iter()
        .zip(left.iter_mut())
        .zip(right.iter_mut().rev())
    {
        let sum = *out + *out_rev;
        let diff = *out - *out_rev;
        let half: T = 0.5f64.as_();

        let twiddled_re_sum = sum.im * twiddle.re;
        let twiddled_im_sum = sum.im * twiddle.im;
        let twiddled_re_diff = diff.re * twiddle.re;
        let twiddled_im_diff = diff.re * twiddle.im;
        let half_sum_re = half * sum.re;
        let half_diff_im = half * diff.im;

        let output_twiddled_real = twiddled_re_sum + twiddled_im_diff;
        let output_twiddled_im = twiddled_im_sum - twiddled_re_diff;

        *out = Complex {
            re: half_sum_re + output_twiddled_real,
            im: half_diff_im + output_twiddled_im,
        };
        *out_rev = Complex {
            re: half_sum_re - output_twiddled_real,
            im: output_twiddled_im - half_diff_im,
        };
    }
}

fn recombine_inverse<T: FftSample>(
    twiddles: &[Complex<T>],
    left: &mut [Complex<T>],
    right: &mut [Complex<T>],
) where
    f64: AsPrimitive<T>,
{
    for ((twiddle, fft_input), fft_input_rev) in twiddles
        .iter()
        .zip(left.iter_mut())
        .zip(right.iter_mut().rev())
    {
        let sum = *fft_input + *fft_input_rev;
        let diff = *fft_input - *fft_input_rev;

        // The twiddle for the mirrored bin is the same one with the real
        // part negated, so one load covers both sides.
        let twiddled_re_sum = sum.im * twiddle.re;
        let twiddled_im_sum = sum.im * twiddle.im;
        let twiddled_re_diff = diff.re * twiddle.re;
        let twiddled_im_diff = diff.re * twiddle.im;

        let output_twiddled_real = twiddled_re_sum + twiddled_im_diff;
        let output_twiddled_im = twiddled_im_sum - twiddled_re_diff;

        *fft_input = Complex {
            re: sum.re - output_twiddled_real,
            im: diff.im - output_twiddled_im,
        };
        *fft_input_rev = Complex {
            re: sum.re + output_twiddled_real,
            im: -output_twiddled_im - diff.im,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::naive_real_dft;

    #[test]
    fn test_real_plan_minimum_size() {
        assert!(RealFftPlan::<f64>::new(0, RealPackFormat::Explicit).is_err());
        assert!(RealFftPlan::<f64>::new(3, RealPackFormat::Explicit).is_err());
        assert!(RealFftPlan::<f64>::new(4, RealPackFormat::Explicit).is_ok());
    }

    #[test]
    fn test_folded_rejects_odd_sizes() {
        assert!(RealFftPlan::<f64>::new(9, RealPackFormat::Folded).is_err());
        assert!(RealFftPlan::<f64>::new(10, RealPackFormat::Folded).is_ok());
    }

    #[test]
    fn test_real_cosine_size_4() {
        let plan = RealFftPlan::<f64>::new(4, RealPackFormat::Explicit).unwrap();
        let input = [1.0, 0.0, -1.0, 0.0];
        let mut output = vec![Complex::<f64>::zero(); 3];
        plan.forward(&input, &mut output).unwrap();
        assert!(output[0].norm() < 1e-12);
        assert!((output[1].re - 2.0).abs() < 1e-12);
        assert!(output[1].im.abs() < 1e-12);
        assert!(output[2].norm() < 1e-12);
    }

    #[test]
    fn test_real_forward_against_naive() {
        for &size in &[4usize, 6, 8, 9, 10, 12, 15, 100, 101, 128, 1000, 1024] {
            let plan = RealFftPlan::<f64>::new(size, RealPackFormat::Explicit).unwrap();
            let input: Vec<f64> = (0..size).map(|i| (i as f64 * 0.417).sin()).collect();
            let expected = naive_real_dft(&input);
            let mut output = vec![Complex::<f64>::zero(); size / 2 + 1];
            plan.forward(&input, &mut output).unwrap();
            for (idx, (a, b)) in output.iter().zip(expected.iter()).enumerate() {
                assert!(
                    (a.re - b.re).abs() < 1e-8 * size as f64,
                    "a_re {} != b_re {} for size {size} at {idx}",
                    a.re,
                    b.re
                );
                assert!(
                    (a.im - b.im).abs() < 1e-8 * size as f64,
                    "a_im {} != b_im {} for size {size} at {idx}",
                    a.im,
                    b.im
                );
            }
        }
    }

    #[test]
    fn test_real_roundtrip_scales_by_size() {
        for &size in &[4usize, 6, 9, 10, 15, 64, 100, 101, 1024] {
            let plan = RealFftPlan::<f64>::new(size, RealPackFormat::Explicit).unwrap();
            let input: Vec<f64> = (0..size).map(|i| (i as f64 * 1.371).cos()).collect();
            let mut spectrum = vec![Complex::<f64>::zero(); plan.spectrum_length()];
            let mut back = vec![0f64; size];
            let mut scratch = plan.make_scratch().unwrap();
            plan.forward_with_scratch(&input, &mut spectrum, &mut scratch)
                .unwrap();
            plan.inverse_with_scratch(&spectrum, &mut back, &mut scratch)
                .unwrap();
            let scale = size as f64;
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
    fn test_folded_matches_explicit() {
        for &size in &[4usize, 10, 64, 100] {
            let explicit = RealFftPlan::<f64>::new(size, RealPackFormat::Explicit).unwrap();
            let folded = RealFftPlan::<f64>::new(size, RealPackFormat::Folded).unwrap();
            let input: Vec<f64> = (0..size).map(|i| (i as f64 * 0.713).sin()).collect();

            let mut full = vec![Complex::<f64>::zero(); size / 2 + 1];
            explicit.forward(&input, &mut full).unwrap();
            let mut packed = vec![Complex::<f64>::zero(); size / 2];
            folded.forward(&input, &mut packed).unwrap();

            assert!((packed[0].re - full[0].re).abs() < 1e-10);
            assert!((packed[0].im - full[size / 2].re).abs() < 1e-10);
            for k in 1..size / 2 {
                assert!((packed[k].re - full[k].re).abs() < 1e-10, "at {k}");
                assert!((packed[k].im - full[k].im).abs() < 1e-10, "at {k}");
            }

            let mut back = vec![0f64; size];
            folded.inverse(&packed, &mut back).unwrap();
            for (idx, (a, &b)) in back.iter().zip(input.iter()).enumerate() {
                assert!((a - b * size as f64).abs() < 1e-8 * size as f64, "at {idx}");
            }
        }
    }

    #[test]
    fn test_rejects_wrong_buffer_lengths() {
        let plan = RealFftPlan::<f64>::new(16, RealPackFormat::Explicit).unwrap();
        let input = vec![0f64; 16];
        let mut short_output = vec![Complex::<f64>::zero(); 8];
        assert!(plan.forward(&input, &mut short_output).is_err());
        let spectrum = vec![Complex::<f64>::zero(); 9];
        let mut short_back = vec![0f64; 15];
        assert!(plan.inverse(&spectrum, &mut short_back).is_err());
    }
}
