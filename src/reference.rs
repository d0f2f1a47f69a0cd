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

//! Straight O(n^2) definition-form transforms, used only as test oracles.

use crate::util::compute_twiddle;
use crate::FftDirection;
use num_complex::Complex;
use num_traits::Zero;

pub(crate) fn naive_dft(input: &[Complex<f64>], direction: FftDirection) -> Vec<Complex<f64>> {
    let n = input.len();
    let mut output = vec![Complex::zero(); n];
    for (k, dst) in output.iter_mut().enumerate() {
        let mut acc = Complex::<f64>::zero();
        for (j, src) in input.iter().enumerate() {
            acc += src * compute_twiddle::<f64>(j * k % n, n, direction);
        }
        *dst = acc;
    }
    output
}

pub(crate) fn naive_real_dft(input: &[f64]) -> Vec<Complex<f64>> {
    let as_complex: Vec<Complex<f64>> = input.iter().map(|&x| Complex::new(x, 0.0)).collect();
    let full = naive_dft(&as_complex, FftDirection::Forward);
    full[..input.len() / 2 + 1].to_vec()
}

/// DCT-II with a leading factor of 2, matching the forward DCT plan.
pub(crate) fn naive_dct2(input: &[f64]) -> Vec<f64> {
    let n = input.len();
    let mut output = vec![0f64; n];
    for (k, dst) in output.iter_mut().enumerate() {
        let mut acc = 0f64;
        for (j, &src) in input.iter().enumerate() {
            let angle = std::f64::consts::PI * k as f64 * (2 * j + 1) as f64 / (2 * n) as f64;
            acc += src * angle.cos();
        }
        *dst = 2.0 * acc;
    }
    output
}

/// DCT-III scaled so that `naive_dct3(naive_dct2(x)) == 2n * x`.
pub(crate) fn naive_dct3(input: &[f64]) -> Vec<f64> {
    let n = input.len();
    let mut output = vec![0f64; n];
    for (j, dst) in output.iter_mut().enumerate() {
        let mut acc = input[0];
        for (k, &src) in input.iter().enumerate().skip(1) {
            let angle = std::f64::consts::PI * k as f64 * (2 * j + 1) as f64 / (2 * n) as f64;
            acc += 2.0 * src * angle.cos();
        }
        *dst = acc;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dct_pair_roundtrip() {
        let src = [0.7, -1.3, 2.2, 0.05, 1.9, -0.4];
        let spectrum = naive_dct2(&src);
        let back = naive_dct3(&spectrum);
        for (a, &b) in back.iter().zip(src.iter()) {
            assert!((a - b * 12.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_real_dft_of_cosine() {
        // cos(2*pi*j/4) sampled over a period concentrates in bin 1
        let src = [1.0, 0.0, -1.0, 0.0];
        let spectrum = naive_real_dft(&src);
        assert_eq!(spectrum.len(), 3);
        assert!(spectrum[0].norm() < 1e-12);
        assert!((spectrum[1].re - 2.0).abs() < 1e-12);
        assert!(spectrum[1].im.abs() < 1e-12);
        assert!(spectrum[2].norm() < 1e-12);
    }
}
