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
use crate::traits::FftSample;
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

/// Bulk elementwise complex products, the twiddle-application seam every
/// composite engine goes through. Implementations may be capability-dispatched.
pub(crate) trait ComplexArith<T> {
    /// `dst = a * b`
    fn mul(&self, a: &[Complex<T>], b: &[Complex<T>], dst: &mut [Complex<T>]);
}

pub(crate) trait ComplexArithFactory<T> {
    fn make_complex_arith() -> Arc<dyn ComplexArith<T> + Send + Sync>;
}

impl ComplexArithFactory<f32> for f32 {
    fn make_complex_arith() -> Arc<dyn ComplexArith<f32> + Send + Sync> {
        static ARITHMETIC_MODULE_SINGLE: OnceLock<Arc<dyn ComplexArith<f32> + Send + Sync>> =
            OnceLock::new();
        ARITHMETIC_MODULE_SINGLE
            .get_or_init(|| {
                #[cfg(all(target_arch = "x86_64", feature = "avx"))]
                {
                    if crate::capability::FftCapability::detect()
                        >= crate::capability::FftCapability::Fma
                    {
                        return Arc::new(crate::avx::AvxComplexArith32 {});
                    }
                }
                Arc::new(ScalarComplexArith {
                    phantom_data: PhantomData,
                })
            })
            .clone()
    }
}

impl ComplexArithFactory<f64> for f64 {
    fn make_complex_arith() -> Arc<dyn ComplexArith<f64> + Send + Sync> {
        static ARITHMETIC_MODULE_DOUBLE: OnceLock<Arc<dyn ComplexArith<f64> + Send + Sync>> =
            OnceLock::new();
        ARITHMETIC_MODULE_DOUBLE
            .get_or_init(|| {
                #[cfg(all(target_arch = "x86_64", feature = "avx"))]
                {
                    if crate::capability::FftCapability::detect()
                        >= crate::capability::FftCapability::Fma
                    {
                        return Arc::new(crate::avx::AvxComplexArith64 {});
                    }
                }
                Arc::new(ScalarComplexArith {
                    phantom_data: PhantomData,
                })
            })
            .clone()
    }
}

#[derive(Clone)]
pub(crate) struct ScalarComplexArith<T: Clone> {
    pub(crate) phantom_data: PhantomData<T>,
}

impl<T: FftSample> ComplexArith<T> for ScalarComplexArith<T>
where
    f64: AsPrimitive<T>,
{
    fn mul(&self, a: &[Complex<T>], b: &[Complex<T>], dst: &mut [Complex<T>]) {
        mul_generic(a, b, dst)
    }
}

#[inline(always)]
pub(crate) fn mul_generic<T: FftSample>(a: &[Complex<T>], b: &[Complex<T>], dst: &mut [Complex<T>]) {
    for ((dst, src), twiddle) in dst.iter_mut().zip(a.iter()).zip(b.iter()) {
        *dst = c_mul_fast(*src, *twiddle);
    }
}
