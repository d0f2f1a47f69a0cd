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
use crate::butterflies::{
    Butterfly1, Butterfly10, Butterfly11, Butterfly2, Butterfly3, Butterfly4, Butterfly5,
    Butterfly6, Butterfly7, Butterfly8, Butterfly9,
};
use crate::butterflies_pow2::{Butterfly16, Butterfly32, Butterfly64};
use crate::capability::FftCapability;
use crate::dft::Dft;
use crate::mixed_radix::MixedRadix;
use crate::radix3::Radix3;
use crate::radix4::Radix4;
use crate::radix5::Radix5;
use crate::spectrum_arithmetic::ComplexArithFactory;
use crate::tables::SharedUnitRoots;
use crate::traits::FftSample;
use crate::transpose::TransposeFactory;
use crate::util::{compute_logarithm, is_power_of_five, is_power_of_three};
use crate::{FftDirection, FftExecutor, WaftError};
use num_traits::AsPrimitive;
use std::fmt::Write as _;
use std::marker::PhantomData;

/// Largest supported transform length, 2^24 points.
pub const MAX_FFT_SIZE: usize = 1 << 24;
/// Smallest complex transform length.
pub const MIN_FFT_SIZE: usize = 2;
/// Smallest real-input or DCT transform length.
pub const MIN_REAL_FFT_SIZE: usize = 4;

/// Fixed butterfly catalogue, largest first so the greedy factorizer
/// prefers the widest kernels.
const BUTTERFLY_CATALOGUE: [usize; 13] = [64, 32, 16, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// One factor of a built plan, as reported by `dump`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum PlanStep {
    /// A catalogued fixed-radix kernel.
    Radix(usize),
    /// The O(r^2) direct-summation fallback for an uncatalogued prime.
    Generic(usize),
}

pub(crate) fn render_steps(size: usize, steps: &[PlanStep]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{size} =");
    for (i, step) in steps.iter().enumerate() {
        let sep = if i == 0 { ' ' } else { '*' };
        match step {
            PlanStep::Radix(r) => {
                let _ = write!(out, "{sep}{r}");
            }
            PlanStep::Generic(r) => {
                let _ = write!(out, "{sep}generic({r})");
            }
        }
    }
    out
}

pub(crate) fn validate_complex_size(size: usize) -> Result<(), WaftError> {
    if size == 0 {
        return Err(WaftError::ZeroSizedFft);
    }
    if size < MIN_FFT_SIZE {
        return Err(WaftError::SizeTooSmall(size, MIN_FFT_SIZE));
    }
    if size > MAX_FFT_SIZE {
        return Err(WaftError::SizeExceedsMaximum(size, MAX_FFT_SIZE));
    }
    Ok(())
}

pub(crate) fn validate_real_size(size: usize) -> Result<(), WaftError> {
    if size == 0 {
        return Err(WaftError::ZeroSizedFft);
    }
    if size < MIN_REAL_FFT_SIZE {
        return Err(WaftError::SizeTooSmall(size, MIN_REAL_FFT_SIZE));
    }
    if size > MAX_FFT_SIZE {
        return Err(WaftError::SizeExceedsMaximum(size, MAX_FFT_SIZE));
    }
    Ok(())
}

/// Builds the executor tree for `size` and records the radix sequence it
/// chose. Greedy: catalogued kernels first, pass engines for prime-power
/// runs, the generic fallback only for primes past the catalogue.
pub(crate) fn plan_executor<T>(
    size: usize,
    direction: FftDirection,
    capability: FftCapability,
) -> Result<(Box<dyn FftExecutor<T> + Send + Sync>, Vec<PlanStep>), WaftError>
where
    T: FftSample + ComplexArithFactory<T> + TransposeFactory<T> + SharedUnitRoots,
    f64: AsPrimitive<T>,
{
    let mut steps = Vec::new();
    let executor = plan_recursive(size, direction, capability, &mut steps)?;
    log::debug!(
        "fft plan for {size} ({direction}, {}): {}",
        capability.name(),
        render_steps(size, &steps)
    );
    Ok((executor, steps))
}

fn plan_recursive<T>(
    size: usize,
    direction: FftDirection,
    capability: FftCapability,
    steps: &mut Vec<PlanStep>,
) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, WaftError>
where
    T: FftSample + ComplexArithFactory<T> + TransposeFactory<T> + SharedUnitRoots,
    f64: AsPrimitive<T>,
{
    if size == 1 {
        steps.push(PlanStep::Radix(1));
        return Ok(Box::new(Butterfly1 {
            phantom_data: PhantomData,
            direction,
        }));
    }

    if let Some(butterfly) = catalogued_butterfly::<T>(size, direction)? {
        steps.push(PlanStep::Radix(size));
        return Ok(butterfly);
    }

    if size.is_power_of_two() {
        let engine = Radix4::new(size, direction, capability)?;
        push_engine_steps::<4>(engine.base_length(), size, steps);
        return Ok(Box::new(engine));
    }

    if is_power_of_three(size as u64) {
        let engine = Radix3::new(size, direction)?;
        push_engine_steps::<3>(engine.base_length(), size, steps);
        return Ok(Box::new(engine));
    }

    if is_power_of_five(size as u64) {
        let engine = Radix5::new(size, direction)?;
        push_engine_steps::<5>(engine.base_length(), size, steps);
        return Ok(Box::new(engine));
    }

    for factor in BUTTERFLY_CATALOGUE {
        if size % factor == 0 {
            steps.push(PlanStep::Radix(factor));
            let width = catalogued_butterfly::<T>(factor, direction)?
                .expect("catalogue entries always resolve");
            let height = plan_recursive(size / factor, direction, capability, steps)?;
            return Ok(Box::new(MixedRadix::new(width, height)?));
        }
    }

    // No catalogued divisor left, so this is a prime beyond the catalogue.
    steps.push(PlanStep::Generic(size));
    Ok(Box::new(Dft::new(size, direction)?))
}

fn push_engine_steps<const N: usize>(base_len: usize, size: usize, steps: &mut Vec<PlanStep>) {
    steps.push(PlanStep::Radix(base_len));
    let passes = compute_logarithm::<N>(size / base_len).unwrap_or(0);
    for _ in 0..passes {
        steps.push(PlanStep::Radix(N));
    }
}

fn catalogued_butterfly<T>(
    size: usize,
    direction: FftDirection,
) -> Result<Option<Box<dyn FftExecutor<T> + Send + Sync>>, WaftError>
where
    T: FftSample,
    f64: AsPrimitive<T>,
{
    let executor: Box<dyn FftExecutor<T> + Send + Sync> = match size {
        2 => Box::new(Butterfly2::new(direction)),
        3 => Box::new(Butterfly3::new(direction)),
        4 => Box::new(Butterfly4::new(direction)),
        5 => Box::new(Butterfly5::new(direction)),
        6 => Box::new(Butterfly6::new(direction)),
        7 => Box::new(Butterfly7::new(direction)),
        8 => Box::new(Butterfly8::new(direction)),
        9 => Box::new(Butterfly9::new(direction)),
        10 => Box::new(Butterfly10::new(direction)),
        11 => Box::new(Butterfly11::new(direction)),
        16 => Box::new(Butterfly16::new(direction)?),
        32 => Box::new(Butterfly32::new(direction)?),
        64 => Box::new(Butterfly64::new(direction)?),
        _ => return Ok(None),
    };
    Ok(Some(executor))
}
