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

//! FMA-enabled recompilations of the bulk complex kernels.
//!
//! The loops are the same generic bodies the scalar module runs; compiling
//! them under `avx2,fma` lets the autovectorizer emit fused wide code. The
//! factory only hands these out after the capability probe confirmed support,
//! which is what makes the `unsafe` calls here sound.

use crate::spectrum_arithmetic::{mul_generic, ComplexArith};
use num_complex::Complex;

macro_rules! avx_arith {
    ($name: ident, $ty: ty, $mul: ident) => {
        #[target_feature(enable = "avx2", enable = "fma")]
        unsafe fn $mul(a: &[Complex<$ty>], b: &[Complex<$ty>], dst: &mut [Complex<$ty>]) {
            mul_generic(a, b, dst)
        }

        pub(crate) struct $name {}

        impl ComplexArith<$ty> for $name {
            fn mul(&self, a: &[Complex<$ty>], b: &[Complex<$ty>], dst: &mut [Complex<$ty>]) {
                unsafe { $mul(a, b, dst) }
            }
        }
    };
}

avx_arith!(AvxComplexArith32, f32, mul_f32);
avx_arith!(AvxComplexArith64, f64, mul_f64);
