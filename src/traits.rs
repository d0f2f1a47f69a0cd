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
use num_traits::{Float, MulAdd};
use std::fmt::{Debug, Display};

/// Trigonometry in units of pi.
///
/// `x.sincos_pi()` returns `(sin(pi*x), cos(pi*x))` with exact values at
/// quarter rotations, so twiddle factors are bit-identical across platforms
/// whether they come from a table or from the analytic path.
pub trait FftTrigonometry: Sized {
    fn sincos_pi(self) -> (Self, Self);
}

#[inline]
fn sincos_pi_f64(x: f64) -> (f64, f64) {
    let doubled = 2. * x;
    if doubled == doubled.trunc() && doubled.abs() < 1e15 {
        // Multiple of pi/2, return the exact lattice value.
        return match (doubled as i64).rem_euclid(4) {
            0 => (0., 1.),
            1 => (1., 0.),
            2 => (0., -1.),
            _ => (-1., 0.),
        };
    }
    let angle = std::f64::consts::PI * x;
    (angle.sin(), angle.cos())
}

impl FftTrigonometry for f64 {
    #[inline]
    fn sincos_pi(self) -> (f64, f64) {
        sincos_pi_f64(self)
    }
}

impl FftTrigonometry for f32 {
    #[inline]
    fn sincos_pi(self) -> (f32, f32) {
        // Computed in double precision, a single rounding on the way out.
        let (s, c) = sincos_pi_f64(self as f64);
        (s as f32, c as f32)
    }
}

/// Umbrella bound for the element types the engine is instantiated over.
pub trait FftSample:
    Float
    + FftTrigonometry
    + MulAdd<Self, Output = Self>
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
}

impl FftSample for f32 {}
impl FftSample for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_rotations_exact() {
        assert_eq!(0f64.sincos_pi(), (0., 1.));
        assert_eq!(0.5f64.sincos_pi(), (1., 0.));
        assert_eq!(1f64.sincos_pi(), (0., -1.));
        assert_eq!(1.5f64.sincos_pi(), (-1., 0.));
        assert_eq!((-0.5f64).sincos_pi(), (-1., 0.));
        assert_eq!((-1f64).sincos_pi(), (0., -1.));
    }

    #[test]
    fn test_matches_std_trig() {
        for k in 1..64 {
            let x = k as f64 / 64.;
            let (s, c) = x.sincos_pi();
            assert!((s - (std::f64::consts::PI * x).sin()).abs() < 1e-15);
            assert!((c - (std::f64::consts::PI * x).cos()).abs() < 1e-15);
        }
    }
}
