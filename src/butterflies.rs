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
use crate::complex_fma::c_mul_fast;
use crate::mla::fmla;
use crate::short_butterflies::{
    rotate_90, FastButterfly2, FastButterfly3, FastButterfly4, FastButterfly5,
};
use crate::traits::FftSample;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftExecutor, WaftError};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::marker::PhantomData;

pub(crate) struct Butterfly1<T> {
    pub(crate) phantom_data: PhantomData<T>,
    pub(crate) direction: FftDirection,
}

impl<T: FftSample> FftExecutor<T> for Butterfly1<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, _: &mut [Complex<T>]) -> Result<(), WaftError> {
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        1
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

pub(crate) struct Butterfly2<T> {
    phantom_data: PhantomData<T>,
    direction: FftDirection,
}

impl<T> Butterfly2<T> {
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Self {
            direction: fft_direction,
            phantom_data: PhantomData,
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly2<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        if in_place.len() % 2 != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.length(),
            ));
        }

        for chunk in in_place.chunks_exact_mut(2) {
            let u0 = chunk[0];
            let u1 = chunk[1];

            chunk[0] = u0 + u1;
            chunk[1] = u0 - u1;
        }
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        2
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

pub(crate) struct Butterfly3<T> {
    direction: FftDirection,
    twiddle: Complex<T>,
}

impl<T: FftSample> Butterfly3<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Self {
            direction: fft_direction,
            twiddle: compute_twiddle(1, 3, fft_direction),
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly3<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        if in_place.len() % 3 != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.length(),
            ));
        }

        for chunk in in_place.chunks_exact_mut(3) {
            let u0 = chunk[0];
            let u1 = chunk[1];
            let u2 = chunk[2];

            let xp = u1 + u2;
            let xn = u1 - u2;
            let sum = u0 + xp;

            let w_1 = Complex {
                re: fmla(self.twiddle.re, xp.re, u0.re),
                im: fmla(self.twiddle.re, xp.im, u0.im),
            };

            chunk[0] = sum;
            chunk[1] = Complex {
                re: fmla(-self.twiddle.im, xn.im, w_1.re),
                im: fmla(self.twiddle.im, xn.re, w_1.im),
            };
            chunk[2] = Complex {
                re: fmla(self.twiddle.im, xn.im, w_1.re),
                im: fmla(-self.twiddle.im, xn.re, w_1.im),
            };
        }
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        3
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

pub(crate) struct Butterfly4<T> {
    direction: FftDirection,
    phantom_data: PhantomData<T>,
}

impl<T: FftSample> Butterfly4<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Self {
            direction: fft_direction,
            phantom_data: PhantomData,
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly4<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        if in_place.len() % 4 != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.length(),
            ));
        }

        for chunk in in_place.chunks_exact_mut(4) {
            let a = chunk[0];
            let b = chunk[1];
            let c = chunk[2];
            let d = chunk[3];

            let t0 = a + c;
            let t1 = a - c;
            let t2 = b + d;
            let t3 = rotate_90(b - d, self.direction);

            chunk[0] = t0 + t2;
            chunk[1] = t1 + t3;
            chunk[2] = t0 - t2;
            chunk[3] = t1 - t3;
        }
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        4
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

pub(crate) struct Butterfly5<T> {
    direction: FftDirection,
    butterfly5: FastButterfly5<T>,
}

impl<T: FftSample> Butterfly5<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Butterfly5 {
            direction: fft_direction,
            butterfly5: FastButterfly5::new(fft_direction),
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly5<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        if in_place.len() % self.length() != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.length(),
            ));
        }

        for chunk in in_place.chunks_exact_mut(5) {
            let (y0, y1, y2, y3, y4) =
                self.butterfly5
                    .butterfly5(chunk[0], chunk[1], chunk[2], chunk[3], chunk[4]);

            chunk[0] = y0;
            chunk[1] = y1;
            chunk[2] = y2;
            chunk[3] = y3;
            chunk[4] = y4;
        }
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        5
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

pub(crate) struct Butterfly6<T> {
    direction: FftDirection,
    phantom_data: PhantomData<T>,
}

impl<T: FftSample> Butterfly6<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Butterfly6 {
            direction: fft_direction,
            phantom_data: PhantomData,
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly6<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        if in_place.len() % self.length() != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.length(),
            ));
        }

        let fast_butterfly3 = FastButterfly3::new(self.direction);
        let fast_butterfly2 = FastButterfly2::new(self.direction);

        // Good-Thomas 3x2: no inter-stage twiddles, remapped in and out.
        for chunk in in_place.chunks_exact_mut(6) {
            let u0 = chunk[0];
            let u1 = chunk[1];
            let u2 = chunk[2];
            let u3 = chunk[3];
            let u4 = chunk[4];
            let u5 = chunk[5];

            let (t0, t2, t4) = fast_butterfly3.butterfly3(u0, u2, u4);
            let (t1, t3, t5) = fast_butterfly3.butterfly3(u3, u5, u1);
            let (y0, y3) = fast_butterfly2.butterfly2(t0, t1);
            let (y4, y1) = fast_butterfly2.butterfly2(t2, t3);
            let (y2, y5) = fast_butterfly2.butterfly2(t4, t5);

            chunk[0] = y0;
            chunk[1] = y1;
            chunk[2] = y2;
            chunk[3] = y3;
            chunk[4] = y4;
            chunk[5] = y5;
        }
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        6
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

/// Odd-prime DFT exploiting conjugate symmetry: bins `k` and `P-k` come out
/// of one accumulation pass over the pairwise sums and differences of the
/// mirrored inputs. `twiddles[m-1]` holds `W^m` for `m` in `1..=H` where
/// `H = (P-1)/2`; twiddles past the half circle reuse the mirrored entry
/// with the imaginary part negated.
#[inline(always)]
fn odd_prime_dft<T: FftSample, const P: usize, const H: usize>(
    chunk: &mut [Complex<T>],
    twiddles: &[Complex<T>; H],
) {
    let first = chunk[0];
    let mut pair_sums = [Complex::<T>::default(); H];
    let mut pair_diffs = [Complex::<T>::default(); H];
    let mut bin0 = first;
    for m in 0..H {
        pair_sums[m] = chunk[m + 1] + chunk[P - 1 - m];
        pair_diffs[m] = chunk[m + 1] - chunk[P - 1 - m];
        bin0 = bin0 + pair_sums[m];
    }

    for k in 1..=H {
        let mut even_re = first.re;
        let mut even_im = first.im;
        let mut odd_re = T::zero();
        let mut odd_im = T::zero();
        for m in 1..=H {
            let j = (k * m) % P;
            let (w_re, w_im) = if j <= H {
                (twiddles[j - 1].re, twiddles[j - 1].im)
            } else {
                (twiddles[P - j - 1].re, -twiddles[P - j - 1].im)
            };
            even_re = fmla(w_re, pair_sums[m - 1].re, even_re);
            even_im = fmla(w_re, pair_sums[m - 1].im, even_im);
            odd_re = fmla(w_im, pair_diffs[m - 1].im, odd_re);
            odd_im = fmla(w_im, pair_diffs[m - 1].re, odd_im);
        }
        chunk[k] = Complex {
            re: even_re - odd_re,
            im: even_im + odd_im,
        };
        chunk[P - k] = Complex {
            re: even_re + odd_re,
            im: even_im - odd_im,
        };
    }
    chunk[0] = bin0;
}

pub(crate) struct Butterfly7<T> {
    direction: FftDirection,
    twiddles: [Complex<T>; 3],
}

impl<T: FftSample> Butterfly7<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Butterfly7 {
            direction: fft_direction,
            twiddles: [
                compute_twiddle(1, 7, fft_direction),
                compute_twiddle(2, 7, fft_direction),
                compute_twiddle(3, 7, fft_direction),
            ],
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly7<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        if in_place.len() % self.length() != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.length(),
            ));
        }

        for chunk in in_place.chunks_exact_mut(7) {
            odd_prime_dft::<T, 7, 3>(chunk, &self.twiddles);
        }
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        7
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

pub(crate) struct Butterfly8<T> {
    direction: FftDirection,
    root2: T,
}

impl<T: FftSample> Butterfly8<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Butterfly8 {
            direction: fft_direction,
            root2: (0.5f64.sqrt()).as_(),
        }
    }
}

/// 8-point kernel as a free function so the larger power-of-two blocks can
/// run it over stack arrays without boxing an executor.
#[inline(always)]
pub(crate) fn butterfly8_kernel<T: FftSample>(
    chunk: &mut [Complex<T>],
    root2: T,
    direction: FftDirection,
) where
    f64: AsPrimitive<T>,
{
    let bf4 = FastButterfly4::new(direction);
    let bf2 = FastButterfly2::new(direction);

    let u0 = chunk[0];
    let u1 = chunk[1];
    let u2 = chunk[2];
    let u3 = chunk[3];
    let u4 = chunk[4];
    let u5 = chunk[5];
    let u6 = chunk[6];
    let u7 = chunk[7];

    let (u0, u2, u4, u6) = bf4.butterfly4(u0, u2, u4, u6);
    let (u1, mut u3, mut u5, mut u7) = bf4.butterfly4(u1, u3, u5, u7);

    u3 = (rotate_90(u3, direction) + u3) * root2;
    u5 = rotate_90(u5, direction);
    u7 = (rotate_90(u7, direction) - u7) * root2;

    let (u0, u1) = bf2.butterfly2(u0, u1);
    let (u2, u3) = bf2.butterfly2(u2, u3);
    let (u4, u5) = bf2.butterfly2(u4, u5);
    let (u6, u7) = bf2.butterfly2(u6, u7);

    chunk[0] = u0;
    chunk[1] = u2;
    chunk[2] = u4;
    chunk[3] = u6;
    chunk[4] = u1;
    chunk[5] = u3;
    chunk[6] = u5;
    chunk[7] = u7;
}

impl<T: FftSample> FftExecutor<T> for Butterfly8<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        if in_place.len() % self.length() != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.length(),
            ));
        }

        for chunk in in_place.chunks_exact_mut(8) {
            butterfly8_kernel(chunk, self.root2, self.direction);
        }
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        8
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

pub(crate) struct Butterfly9<T> {
    direction: FftDirection,
    twiddle1: Complex<T>,
    twiddle2: Complex<T>,
    twiddle4: Complex<T>,
}

impl<T: FftSample> Butterfly9<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Butterfly9 {
            direction: fft_direction,
            twiddle1: compute_twiddle(1, 9, fft_direction),
            twiddle2: compute_twiddle(2, 9, fft_direction),
            twiddle4: compute_twiddle(4, 9, fft_direction),
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly9<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        if in_place.len() % self.length() != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.length(),
            ));
        }

        let bf3 = FastButterfly3::new(self.direction);

        for chunk in in_place.chunks_exact_mut(9) {
            let u0 = chunk[0];
            let u1 = chunk[1];
            let u2 = chunk[2];
            let u3 = chunk[3];
            let u4 = chunk[4];
            let u5 = chunk[5];
            let u6 = chunk[6];
            let u7 = chunk[7];
            let u8 = chunk[8];

            let (u0, u3, u6) = bf3.butterfly3(u0, u3, u6);
            let (u1, mut u4, mut u7) = bf3.butterfly3(u1, u4, u7);
            let (u2, mut u5, mut u8) = bf3.butterfly3(u2, u5, u8);

            u4 = c_mul_fast(u4, self.twiddle1);
            u7 = c_mul_fast(u7, self.twiddle2);
            u5 = c_mul_fast(u5, self.twiddle2);
            u8 = c_mul_fast(u8, self.twiddle4);

            let (zu0, zu3, zu6) = bf3.butterfly3(u0, u1, u2);
            let (zu1, zu4, zu7) = bf3.butterfly3(u3, u4, u5);
            let (zu2, zu5, zu8) = bf3.butterfly3(u6, u7, u8);

            chunk[0] = zu0;
            chunk[1] = zu1;
            chunk[2] = zu2;

            chunk[3] = zu3;
            chunk[4] = zu4;
            chunk[5] = zu5;

            chunk[6] = zu6;
            chunk[7] = zu7;
            chunk[8] = zu8;
        }
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        9
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

pub(crate) struct Butterfly10<T> {
    direction: FftDirection,
    phantom_data: PhantomData<T>,
}

impl<T: FftSample> Butterfly10<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Butterfly10 {
            direction: fft_direction,
            phantom_data: PhantomData,
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly10<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        if in_place.len() % self.length() != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.length(),
            ));
        }

        let bf5 = FastButterfly5::new(self.direction);
        let bf2 = FastButterfly2::new(self.direction);

        // Good-Thomas 5x2: no inter-stage twiddles, remapped in and out.
        for chunk in in_place.chunks_exact_mut(10) {
            let (a0, a1, a2, a3, a4) =
                bf5.butterfly5(chunk[0], chunk[2], chunk[4], chunk[6], chunk[8]);
            let (b0, b1, b2, b3, b4) =
                bf5.butterfly5(chunk[5], chunk[7], chunk[9], chunk[1], chunk[3]);

            let (y0, y5) = bf2.butterfly2(a0, b0);
            let (y6, y1) = bf2.butterfly2(a1, b1);
            let (y2, y7) = bf2.butterfly2(a2, b2);
            let (y8, y3) = bf2.butterfly2(a3, b3);
            let (y4, y9) = bf2.butterfly2(a4, b4);

            chunk[0] = y0;
            chunk[1] = y1;
            chunk[2] = y2;
            chunk[3] = y3;
            chunk[4] = y4;
            chunk[5] = y5;
            chunk[6] = y6;
            chunk[7] = y7;
            chunk[8] = y8;
            chunk[9] = y9;
        }
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        10
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

pub(crate) struct Butterfly11<T> {
    direction: FftDirection,
    twiddles: [Complex<T>; 5],
}

impl<T: FftSample> Butterfly11<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Self {
        Butterfly11 {
            direction: fft_direction,
            twiddles: [
                compute_twiddle(1, 11, fft_direction),
                compute_twiddle(2, 11, fft_direction),
                compute_twiddle(3, 11, fft_direction),
                compute_twiddle(4, 11, fft_direction),
                compute_twiddle(5, 11, fft_direction),
            ],
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly11<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), WaftError> {
        if in_place.len() % self.length() != 0 {
            return Err(WaftError::InvalidSizeMultiplier(
                in_place.len(),
                self.length(),
            ));
        }

        for chunk in in_place.chunks_exact_mut(11) {
            odd_prime_dft::<T, 11, 5>(chunk, &self.twiddles);
        }
        Ok(())
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        _: &mut [Complex<T>],
    ) -> Result<(), WaftError> {
        self.execute(in_place)
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        11
    }

    fn scratch_length(&self) -> usize {
        0
    }
}
