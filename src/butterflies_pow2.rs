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
use crate::butterflies::butterfly8_kernel;
use crate::complex_fma::c_mul_fast;
use crate::short_butterflies::{rotate_90, FastButterfly4};
use crate::traits::FftSample;
use crate::util::{bitreversed_transpose, radixn_floating_twiddles_from_base};
use crate::{FftDirection, FftExecutor, WaftError};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Radix-4 combine stages growing `base_len`-point sub-transforms up to the
/// full chunk. Twiddles must come from `radixn_floating_twiddles_from_base`
/// with the same base and target length.
#[inline(always)]
pub(crate) fn radix4_passes<T: FftSample>(
    chunk: &mut [Complex<T>],
    base_len: usize,
    twiddles: &[Complex<T>],
    direction: FftDirection,
) {
    let mut len = base_len;

    unsafe {
        let mut m_twiddles = twiddles;

        while len < chunk.len() {
            let columns = len;
            len *= 4;
            let quarter = len / 4;

            for data in chunk.chunks_exact_mut(len) {
                for j in 0..quarter {
                    let a = *data.get_unchecked(j);
                    let b = c_mul_fast(
                        *data.get_unchecked(j + quarter),
                        *m_twiddles.get_unchecked(3 * j),
                    );
                    let c = c_mul_fast(
                        *data.get_unchecked(j + 2 * quarter),
                        *m_twiddles.get_unchecked(3 * j + 1),
                    );
                    let d = c_mul_fast(
                        *data.get_unchecked(j + 3 * quarter),
                        *m_twiddles.get_unchecked(3 * j + 2),
                    );

                    let t0 = a + c;
                    let t1 = a - c;
                    let t2 = b + d;
                    let t3 = rotate_90(b - d, direction);

                    *data.get_unchecked_mut(j) = t0 + t2;
                    *data.get_unchecked_mut(j + quarter) = t1 + t3;
                    *data.get_unchecked_mut(j + 2 * quarter) = t0 - t2;
                    *data.get_unchecked_mut(j + 3 * quarter) = t1 - t3;
                }
            }

            m_twiddles = &m_twiddles[columns * 3..];
        }
    }
}

/// 16-point block: reorder, four 4-point butterflies, one radix-4 combine.
/// Runs entirely on the stack, no scratch needed.
pub(crate) struct Butterfly16<T> {
    direction: FftDirection,
    twiddles: Vec<Complex<T>>,
}

impl<T: FftSample> Butterfly16<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Result<Self, WaftError> {
        Ok(Butterfly16 {
            direction: fft_direction,
            twiddles: radixn_floating_twiddles_from_base::<T, 4>(4, 16, fft_direction)?,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly16<T>
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

        let bf4 = FastButterfly4::new(self.direction);

        for chunk in in_place.chunks_exact_mut(16) {
            let mut block = [Complex::<T>::default(); 16];
            bitreversed_transpose::<Complex<T>, 4>(4, chunk, &mut block);

            for row in block.chunks_exact_mut(4) {
                let (y0, y1, y2, y3) = bf4.butterfly4(row[0], row[1], row[2], row[3]);
                row[0] = y0;
                row[1] = y1;
                row[2] = y2;
                row[3] = y3;
            }

            radix4_passes(&mut block, 4, &self.twiddles, self.direction);
            chunk.copy_from_slice(&block);
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
        16
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

/// 32-point block: reorder, four 8-point butterflies, one radix-4 combine.
pub(crate) struct Butterfly32<T> {
    direction: FftDirection,
    twiddles: Vec<Complex<T>>,
    root2: T,
}

impl<T: FftSample> Butterfly32<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Result<Self, WaftError> {
        Ok(Butterfly32 {
            direction: fft_direction,
            twiddles: radixn_floating_twiddles_from_base::<T, 4>(8, 32, fft_direction)?,
            root2: (0.5f64.sqrt()).as_(),
        })
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly32<T>
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

        for chunk in in_place.chunks_exact_mut(32) {
            let mut block = [Complex::<T>::default(); 32];
            bitreversed_transpose::<Complex<T>, 4>(8, chunk, &mut block);

            for row in block.chunks_exact_mut(8) {
                butterfly8_kernel(row, self.root2, self.direction);
            }

            radix4_passes(&mut block, 8, &self.twiddles, self.direction);
            chunk.copy_from_slice(&block);
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
        32
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

/// 64-point block: reorder, sixteen 4-point butterflies, two radix-4 combines.
pub(crate) struct Butterfly64<T> {
    direction: FftDirection,
    twiddles: Vec<Complex<T>>,
}

impl<T: FftSample> Butterfly64<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(fft_direction: FftDirection) -> Result<Self, WaftError> {
        Ok(Butterfly64 {
            direction: fft_direction,
            twiddles: radixn_floating_twiddles_from_base::<T, 4>(4, 64, fft_direction)?,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly64<T>
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

        let bf4 = FastButterfly4::new(self.direction);

        for chunk in in_place.chunks_exact_mut(64) {
            let mut block = [Complex::<T>::default(); 64];
            bitreversed_transpose::<Complex<T>, 4>(4, chunk, &mut block);

            for row in block.chunks_exact_mut(4) {
                let (y0, y1, y2, y3) = bf4.butterfly4(row[0], row[1], row[2], row[3]);
                row[0] = y0;
                row[1] = y1;
                row[2] = y2;
                row[3] = y3;
            }

            radix4_passes(&mut block, 4, &self.twiddles, self.direction);
            chunk.copy_from_slice(&block);
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
        64
    }

    fn scratch_length(&self) -> usize {
        0
    }
}
