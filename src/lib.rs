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

//! Mixed-radix FFT engine with real-input and DCT adapters.
//!
//! Transforms are built as [`FftPlan`] objects: immutable, thread-safe, and
//! reusable, with execution working in place over caller-supplied scratch.
//! Lengths factor over a fixed butterfly catalogue; power-of-two, -three and
//! -five runs use dedicated pass engines and leftover primes fall back to a
//! direct summation. Nothing is normalized: a forward-then-inverse pass
//! scales by the transform size.

#[cfg(all(target_arch = "x86_64", feature = "avx"))]
mod avx;
mod butterflies;
mod butterflies_pow2;
mod capability;
mod capi;
mod complex_fma;
mod dct;
mod dft;
mod err;
mod mixed_radix;
mod mla;
mod plan;
mod plan_cache;
mod planner;
mod r2c;
mod radix3;
mod radix4;
mod radix5;
#[cfg(test)]
mod reference;
mod short_butterflies;
mod spectrum_arithmetic;
mod tables;
mod traits;
mod transpose;
mod util;

pub use capability::FftCapability;
pub use capi::*;
pub use dct::DctPlan;
pub use err::WaftError;
pub use plan::FftPlan;
pub use plan_cache::{shared_plan_cache_f32, shared_plan_cache_f64, FftPlanCache};
pub use planner::{MAX_FFT_SIZE, MIN_FFT_SIZE, MIN_REAL_FFT_SIZE};
pub use r2c::{RealFftPlan, RealPackFormat};
pub use traits::FftSample;

use num_complex::Complex;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

impl FftDirection {
    #[must_use]
    pub fn inverse(&self) -> FftDirection {
        match self {
            FftDirection::Forward => FftDirection::Inverse,
            FftDirection::Inverse => FftDirection::Forward,
        }
    }
}

impl Display for FftDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FftDirection::Forward => f.write_str("Forward"),
            FftDirection::Inverse => f.write_str("Inverse"),
        }
    }
}

/// A runnable transform of one fixed length and direction.
///
/// `in_place` slices whose length is a multiple of [`FftExecutor::length`]
/// are processed as consecutive frames.
pub trait FftExecutor<T> {
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError>;
    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), WaftError>;
    fn direction(&self) -> FftDirection;
    /// Transform length in complex points.
    fn length(&self) -> usize;
    /// Required scratch length in complex points.
    fn scratch_length(&self) -> usize;
}

/// Convenience entry points mirroring the plan constructors.
pub struct Waft {}

impl Waft {
    pub fn plan_f32(size: usize) -> Result<FftPlan<f32>, WaftError> {
        FftPlan::<f32>::new(size)
    }

    pub fn plan_f64(size: usize) -> Result<FftPlan<f64>, WaftError> {
        FftPlan::<f64>::new(size)
    }

    pub fn real_plan_f32(
        size: usize,
        pack_format: RealPackFormat,
    ) -> Result<RealFftPlan<f32>, WaftError> {
        RealFftPlan::<f32>::new(size, pack_format)
    }

    pub fn real_plan_f64(
        size: usize,
        pack_format: RealPackFormat,
    ) -> Result<RealFftPlan<f64>, WaftError> {
        RealFftPlan::<f64>::new(size, pack_format)
    }

    pub fn dct_plan_f32(size: usize) -> Result<DctPlan<f32>, WaftError> {
        DctPlan::<f32>::new(size)
    }

    pub fn dct_plan_f64(size: usize) -> Result<DctPlan<f64>, WaftError> {
        DctPlan::<f64>::new(size)
    }
}
