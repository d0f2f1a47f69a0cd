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
use num_complex::Complex;
use std::marker::PhantomData;

pub(crate) trait TransposeExecutor<T> {
    fn transpose(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        width: usize,
        height: usize,
    );
}

pub(crate) trait TransposeFactory<T> {
    fn transpose_strategy(
        width: usize,
        height: usize,
    ) -> Box<dyn TransposeExecutor<T> + Send + Sync>;
}

impl TransposeFactory<f32> for f32 {
    fn transpose_strategy(
        width: usize,
        height: usize,
    ) -> Box<dyn TransposeExecutor<f32> + Send + Sync> {
        make_strategy::<f32>(width, height)
    }
}

impl TransposeFactory<f64> for f64 {
    fn transpose_strategy(
        width: usize,
        height: usize,
    ) -> Box<dyn TransposeExecutor<f64> + Send + Sync> {
        make_strategy::<f64>(width, height)
    }
}

fn make_strategy<T: Copy + Send + Sync + 'static>(
    width: usize,
    height: usize,
) -> Box<dyn TransposeExecutor<T> + Send + Sync> {
    if width > 31 && height > 31 {
        return Box::new(TransposeTiled {
            phantom_data: PhantomData,
        });
    }
    Box::new(TransposeTiny {
        phantom_data: PhantomData,
    })
}

struct TransposeTiny<T> {
    phantom_data: PhantomData<T>,
}

impl<T: Copy> TransposeExecutor<T> for TransposeTiny<T> {
    fn transpose(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        width: usize,
        height: usize,
    ) {
        for x in 0..width {
            for y in 0..height {
                let input_index = x + y * width;
                let output_index = y + x * height;

                unsafe {
                    *output.get_unchecked_mut(output_index) = *input.get_unchecked(input_index);
                }
            }
        }
    }
}

const TILE: usize = 16;

/// Cache-blocked transpose for matrices where both sides exceed a tile.
struct TransposeTiled<T> {
    phantom_data: PhantomData<T>,
}

impl<T: Copy> TransposeExecutor<T> for TransposeTiled<T> {
    fn transpose(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        width: usize,
        height: usize,
    ) {
        assert!(input.len() >= width * height && output.len() >= width * height);
        for ty in (0..height).step_by(TILE) {
            let y_end = (ty + TILE).min(height);
            for tx in (0..width).step_by(TILE) {
                let x_end = (tx + TILE).min(width);
                for y in ty..y_end {
                    for x in tx..x_end {
                        unsafe {
                            *output.get_unchecked_mut(y + x * height) =
                                *input.get_unchecked(x + y * width);
                        }
                    }
                }
            }
        }
    }
}
