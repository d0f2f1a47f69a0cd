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
use crate::capability::FftCapability;
use crate::err::try_vec;
use crate::planner::{plan_executor, render_steps, validate_complex_size, PlanStep};
use crate::spectrum_arithmetic::ComplexArithFactory;
use crate::tables::SharedUnitRoots;
use crate::traits::FftSample;
use crate::transpose::TransposeFactory;
use crate::{FftDirection, FftExecutor, WaftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// A prepared complex transform of a fixed size, holding the executor trees
/// for both directions. Plans are immutable once built; execution only needs
/// a caller-supplied scratch buffer, so one plan can serve many threads.
pub struct FftPlan<T> {
    size: usize,
    forward: Box<dyn FftExecutor<T> + Send + Sync>,
    inverse: Box<dyn FftExecutor<T> + Send + Sync>,
    steps: Vec<PlanStep>,
    scratch_length: usize,
    capability: FftCapability,
}

pub(crate) fn build_plan<T>(size: usize) -> Result<FftPlan<T>, WaftError>
where
    T: FftSample + ComplexArithFactory<T> + TransposeFactory<T> + SharedUnitRoots,
    f64: AsPrimitive<T>,
{
    validate_complex_size(size)?;
    let capability = FftCapability::detect();
    let (forward, steps) = plan_executor::<T>(size, FftDirection::Forward, capability)?;
    let (inverse, _) = plan_executor::<T>(size, FftDirection::Inverse, capability)?;
    let scratch_length = forward.scratch_length().max(inverse.scratch_length());
    Ok(FftPlan {
        size,
        forward,
        inverse,
        steps,
        scratch_length,
        capability,
    })
}

impl FftPlan<f32> {
    pub fn new(size: usize) -> Result<FftPlan<f32>, WaftError> {
        build_plan(size)
    }
}

impl FftPlan<f64> {
    pub fn new(size: usize) -> Result<FftPlan<f64>, WaftError> {
        build_plan(size)
    }
}

impl<T: FftSample> FftPlan<T> {
    /// Transform length in complex points.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Scratch requirement in complex points.
    pub fn scratch_length(&self) -> usize {
        self.scratch_length
    }

    /// Scratch requirement in bytes, for callers that allocate raw memory.
    pub fn temp_size(&self) -> usize {
        self.scratch_length * std::mem::size_of::<Complex<T>>()
    }

    pub fn make_scratch(&self) -> Result<Vec<Complex<T>>, WaftError> {
        Ok(try_vec![Complex::zero(); self.scratch_length])
    }

    /// Unnormalized forward transform, in place. `in_place` length must be a
    /// multiple of the plan size.
    pub fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        self.forward.execute(in_place)
    }

    pub fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.forward.execute_with_scratch(in_place, scratch)
    }

    /// Unnormalized inverse transform, in place. A forward-then-inverse pass
    /// scales the signal by the plan size.
    pub fn execute_inverse(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        self.inverse.execute(in_place)
    }

    pub fn execute_inverse_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.inverse.execute_with_scratch(in_place, scratch)
    }

    /// Renders the chosen factorization and logs it at debug level.
    pub fn dump(&self) -> String {
        let report = format!(
            "fft plan {}, capability {}, scratch {} points: {}",
            self.size,
            self.capability.name(),
            self.scratch_length,
            render_steps(self.size, &self.steps)
        );
        log::debug!("{report}");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::naive_dft;

    fn assert_spectra_close(a: &[Complex<f64>], b: &[Complex<f64>], tolerance: f64) {
        for (idx, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!(
                (x.re - y.re).abs() < tolerance,
                "a_re {} != b_re {} at {idx}",
                x.re,
                y.re
            );
            assert!(
                (x.im - y.im).abs() < tolerance,
                "a_im {} != b_im {} at {idx}",
                x.im,
                y.im
            );
        }
    }

    #[test]
    fn test_plan_boundary_sizes() {
        assert!(FftPlan::<f64>::new(0).is_err());
        assert!(FftPlan::<f64>::new(1).is_err());
        assert!(FftPlan::<f64>::new(2).is_ok());
        assert!(FftPlan::<f64>::new(crate::planner::MAX_FFT_SIZE + 1).is_err());
    }

    #[test]
    fn test_plan_of_ones_size_8() {
        let plan = FftPlan::<f64>::new(8).unwrap();
        let mut data = vec![Complex::new(1.0, 0.0); 8];
        plan.execute(&mut data).unwrap();
        assert!((data[0].re - 8.0).abs() < 1e-12);
        assert!(data[0].im.abs() < 1e-12);
        for bin in &data[1..] {
            assert!(bin.re.abs() < 1e-12);
            assert!(bin.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_plan_against_naive() {
        for &size in &[3usize, 5, 7, 11, 12, 60, 100, 101, 256, 243, 625, 1001] {
            let plan = FftPlan::<f64>::new(size).unwrap();
            let src: Vec<Complex<f64>> = (0..size)
                .map(|i| Complex::new((i as f64 * 0.731).sin(), (i as f64 * 0.391).cos()))
                .collect();
            let expected = naive_dft(&src, FftDirection::Forward);
            let mut actual = src.clone();
            plan.execute(&mut actual).unwrap();
            assert_spectra_close(&actual, &expected, 1e-8 * size as f64);

            let expected = naive_dft(&src, FftDirection::Inverse);
            let mut actual = src;
            plan.execute_inverse(&mut actual).unwrap();
            assert_spectra_close(&actual, &expected, 1e-8 * size as f64);
        }
    }

    #[test]
    fn test_plan_roundtrip_scales_by_size() {
        for &size in &[12usize, 64, 100, 1000] {
            let plan = FftPlan::<f64>::new(size).unwrap();
            let src: Vec<Complex<f64>> = (0..size)
                .map(|i| Complex::new(i as f64 * 0.5, -(i as f64) * 0.25))
                .collect();
            let mut data = src.clone();
            let mut scratch = plan.make_scratch().unwrap();
            plan.execute_with_scratch(&mut data, &mut scratch).unwrap();
            plan.execute_inverse_with_scratch(&mut data, &mut scratch)
                .unwrap();
            let scale = size as f64;
            for (idx, (a, b)) in data.iter().zip(src.iter()).enumerate() {
                assert!((a.re - b.re * scale).abs() < 1e-7 * scale, "at {idx}");
                assert!((a.im - b.im * scale).abs() < 1e-7 * scale, "at {idx}");
            }
        }
    }

    #[test]
    fn test_plan_linearity() {
        let size = 60;
        let plan = FftPlan::<f64>::new(size).unwrap();
        let a: Vec<Complex<f64>> = (0..size)
            .map(|i| Complex::new((i as f64).sin(), (i as f64 * 0.3).cos()))
            .collect();
        let b: Vec<Complex<f64>> = (0..size)
            .map(|i| Complex::new((i as f64 * 1.7).cos(), (i as f64 * 0.9).sin()))
            .collect();

        let mut sum: Vec<Complex<f64>> = a.iter().zip(b.iter()).map(|(x, y)| x + y).collect();
        plan.execute(&mut sum).unwrap();

        let mut fa = a;
        let mut fb = b;
        plan.execute(&mut fa).unwrap();
        plan.execute(&mut fb).unwrap();
        for (idx, (s, (x, y))) in sum.iter().zip(fa.iter().zip(fb.iter())).enumerate() {
            assert!((s.re - (x.re + y.re)).abs() < 1e-9, "at {idx}");
            assert!((s.im - (x.im + y.im)).abs() < 1e-9, "at {idx}");
        }
    }

    #[test]
    fn test_plan_impulse() {
        let size = 100;
        let plan = FftPlan::<f64>::new(size).unwrap();
        let mut data = vec![Complex::<f64>::zero(); size];
        data[0] = Complex::new(1.0, 0.0);
        plan.execute(&mut data).unwrap();
        for bin in &data {
            assert!((bin.re - 1.0).abs() < 1e-10);
            assert!(bin.im.abs() < 1e-10);
        }
    }

    #[test]
    fn test_plan_parseval() {
        let size = 128;
        let plan = FftPlan::<f64>::new(size).unwrap();
        let src: Vec<Complex<f64>> = (0..size)
            .map(|i| Complex::new((i as f64 * 0.113).sin(), (i as f64 * 0.531).cos()))
            .collect();
        let time_energy: f64 = src.iter().map(|c| c.norm_sqr()).sum();
        let mut data = src;
        plan.execute(&mut data).unwrap();
        let freq_energy: f64 = data.iter().map(|c| c.norm_sqr()).sum();
        assert!((freq_energy - time_energy * size as f64).abs() < 1e-6 * freq_energy);
    }

    #[test]
    fn test_rejects_short_scratch() {
        let plan = FftPlan::<f64>::new(1000).unwrap();
        let mut data = vec![Complex::<f64>::zero(); 1000];
        let mut scratch = vec![Complex::<f64>::zero(); plan.scratch_length() - 1];
        assert!(plan.execute_with_scratch(&mut data, &mut scratch).is_err());
    }

    #[test]
    fn test_dump_mentions_size() {
        let plan = FftPlan::<f32>::new(1000).unwrap();
        let report = plan.dump();
        assert!(report.contains("1000"));
        assert_eq!(plan.temp_size(), plan.scratch_length() * 8);
    }
}
