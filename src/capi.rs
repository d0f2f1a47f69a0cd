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

//! C-compatible entry points.
//!
//! Plans are returned as opaque heap pointers, null on any invalid request.
//! Complex buffers are interleaved `re, im` pairs; `Complex<T>` is `repr(C)`,
//! so the casts below are layout-safe. Execute calls take the destination
//! first, then the source, then scratch; the complex transforms permit
//! `output == input` for in-place operation, otherwise the buffers must not
//! overlap. They return 0 on success, `WAFT_ERR_NULL` for null pointers and
//! `WAFT_ERR_EXEC` for transform failures. A non-null `temp` must hold at
//! least `get_temp_size` bytes; passing null makes the call allocate
//! internally.

use crate::dct::DctPlan;
use crate::plan::FftPlan;
use crate::r2c::{RealFftPlan, RealPackFormat};
use num_complex::Complex;

pub const WAFT_ERR_NULL: i32 = -1;
pub const WAFT_ERR_EXEC: i32 = -2;

pub const WAFT_REAL_PACK_EXPLICIT: u32 = 0;
pub const WAFT_REAL_PACK_FOLDED: u32 = 1;

macro_rules! complex_capi {
    (
        $ty: ty,
        $create: ident, $get_size: ident, $get_temp_size: ident,
        $execute: ident, $execute_inverse: ident, $dump: ident, $delete: ident
    ) => {
        #[no_mangle]
        pub extern "C" fn $create(size: usize) -> *mut FftPlan<$ty> {
            match FftPlan::<$ty>::new(size) {
                Ok(plan) => Box::into_raw(Box::new(plan)),
                Err(err) => {
                    log::debug!("plan creation for size {size} rejected: {err}");
                    std::ptr::null_mut()
                }
            }
        }

        /// # Safety
        /// `plan` must be a live pointer from the matching create call.
        #[no_mangle]
        pub unsafe extern "C" fn $get_size(plan: *const FftPlan<$ty>) -> usize {
            match unsafe { plan.as_ref() } {
                Some(plan) => plan.size(),
                None => 0,
            }
        }

        /// Scratch requirement in bytes.
        ///
        /// # Safety
        /// `plan` must be a live pointer from the matching create call.
        #[no_mangle]
        pub unsafe extern "C" fn $get_temp_size(plan: *const FftPlan<$ty>) -> usize {
            match unsafe { plan.as_ref() } {
                Some(plan) => plan.temp_size(),
                None => 0,
            }
        }

        /// # Safety
        /// `output` and `input` must each hold `2 * size` floats and either
        /// be equal (in place) or not overlap; `temp`, when non-null, must
        /// hold `get_temp_size` bytes.
        #[no_mangle]
        pub unsafe extern "C" fn $execute(
            plan: *const FftPlan<$ty>,
            output: *mut $ty,
            input: *const $ty,
            temp: *mut $ty,
        ) -> i32 {
            unsafe { run_complex(plan, output, input, temp, false) }
        }

        /// # Safety
        /// Same contract as the forward execute.
        #[no_mangle]
        pub unsafe extern "C" fn $execute_inverse(
            plan: *const FftPlan<$ty>,
            output: *mut $ty,
            input: *const $ty,
            temp: *mut $ty,
        ) -> i32 {
            unsafe { run_complex(plan, output, input, temp, true) }
        }

        /// Logs the plan's factorization at debug level.
        ///
        /// # Safety
        /// `plan` must be a live pointer from the matching create call.
        #[no_mangle]
        pub unsafe extern "C" fn $dump(plan: *const FftPlan<$ty>) {
            if let Some(plan) = unsafe { plan.as_ref() } {
                let _ = plan.dump();
            }
        }

        /// # Safety
        /// `plan` must come from the matching create call and not be used
        /// afterwards. Null is a no-op.
        #[no_mangle]
        pub unsafe extern "C" fn $delete(plan: *mut FftPlan<$ty>) {
            if !plan.is_null() {
                drop(unsafe { Box::from_raw(plan) });
            }
        }
    };
}

unsafe fn run_complex<T: crate::FftSample>(
    plan: *const FftPlan<T>,
    output: *mut T,
    input: *const T,
    temp: *mut T,
    inverse: bool,
) -> i32 {
    let Some(plan) = (unsafe { plan.as_ref() }) else {
        return WAFT_ERR_NULL;
    };
    if output.is_null() || input.is_null() {
        return WAFT_ERR_NULL;
    }
    if input != output.cast_const() {
        unsafe {
            std::ptr::copy_nonoverlapping(
                input.cast::<Complex<T>>(),
                output.cast::<Complex<T>>(),
                plan.size(),
            )
        };
    }
    let in_place =
        unsafe { std::slice::from_raw_parts_mut(output.cast::<Complex<T>>(), plan.size()) };
    let executed = if temp.is_null() {
        if inverse {
            plan.execute_inverse(in_place)
        } else {
            plan.execute(in_place)
        }
    } else {
        let scratch = unsafe {
            std::slice::from_raw_parts_mut(temp.cast::<Complex<T>>(), plan.scratch_length())
        };
        if inverse {
            plan.execute_inverse_with_scratch(in_place, scratch)
        } else {
            plan.execute_with_scratch(in_place, scratch)
        }
    };
    match executed {
        Ok(()) => 0,
        Err(err) => {
            log::debug!("fft execution failed: {err}");
            WAFT_ERR_EXEC
        }
    }
}

complex_capi!(
    f32,
    waft_create_plan_f32,
    waft_plan_f32_get_size,
    waft_plan_f32_get_temp_size,
    waft_plan_f32_execute,
    waft_plan_f32_execute_inverse,
    waft_plan_f32_dump,
    waft_plan_f32_delete
);
complex_capi!(
    f64,
    waft_create_plan_f64,
    waft_plan_f64_get_size,
    waft_plan_f64_get_temp_size,
    waft_plan_f64_execute,
    waft_plan_f64_execute_inverse,
    waft_plan_f64_dump,
    waft_plan_f64_delete
);

macro_rules! real_capi {
    (
        $ty: ty,
        $create: ident, $get_size: ident, $get_spectrum_size: ident, $get_temp_size: ident,
        $execute: ident, $execute_inverse: ident, $delete: ident
    ) => {
        #[no_mangle]
        pub extern "C" fn $create(size: usize, pack_format: u32) -> *mut RealFftPlan<$ty> {
            let pack_format = match pack_format {
                WAFT_REAL_PACK_EXPLICIT => RealPackFormat::Explicit,
                WAFT_REAL_PACK_FOLDED => RealPackFormat::Folded,
                _ => return std::ptr::null_mut(),
            };
            match RealFftPlan::<$ty>::new(size, pack_format) {
                Ok(plan) => Box::into_raw(Box::new(plan)),
                Err(err) => {
                    log::debug!("real plan creation for size {size} rejected: {err}");
                    std::ptr::null_mut()
                }
            }
        }

        /// # Safety
        /// `plan` must be a live pointer from the matching create call.
        #[no_mangle]
        pub unsafe extern "C" fn $get_size(plan: *const RealFftPlan<$ty>) -> usize {
            match unsafe { plan.as_ref() } {
                Some(plan) => plan.size(),
                None => 0,
            }
        }

        /// Spectrum length in complex bins.
        ///
        /// # Safety
        /// `plan` must be a live pointer from the matching create call.
        #[no_mangle]
        pub unsafe extern "C" fn $get_spectrum_size(plan: *const RealFftPlan<$ty>) -> usize {
            match unsafe { plan.as_ref() } {
                Some(plan) => plan.spectrum_length(),
                None => 0,
            }
        }

        /// Scratch requirement in bytes.
        ///
        /// # Safety
        /// `plan` must be a live pointer from the matching create call.
        #[no_mangle]
        pub unsafe extern "C" fn $get_temp_size(plan: *const RealFftPlan<$ty>) -> usize {
            match unsafe { plan.as_ref() } {
                Some(plan) => plan.temp_size(),
                None => 0,
            }
        }

        /// # Safety
        /// `output` must hold `2 * spectrum_length` floats, `input` must hold
        /// `size` reals; `temp`, when non-null, must hold `get_temp_size`
        /// bytes.
        #[no_mangle]
        pub unsafe extern "C" fn $execute(
            plan: *const RealFftPlan<$ty>,
            output: *mut $ty,
            input: *const $ty,
            temp: *mut $ty,
        ) -> i32 {
            let Some(plan) = (unsafe { plan.as_ref() }) else {
                return WAFT_ERR_NULL;
            };
            if input.is_null() || output.is_null() {
                return WAFT_ERR_NULL;
            }
            let input = unsafe { std::slice::from_raw_parts(input, plan.size()) };
            let output = unsafe {
                std::slice::from_raw_parts_mut(
                    output.cast::<Complex<$ty>>(),
                    plan.spectrum_length(),
                )
            };
            let executed = if temp.is_null() {
                plan.forward(input, output)
            } else {
                let scratch = unsafe {
                    std::slice::from_raw_parts_mut(
                        temp.cast::<Complex<$ty>>(),
                        plan.scratch_length(),
                    )
                };
                plan.forward_with_scratch(input, output, scratch)
            };
            match executed {
                Ok(()) => 0,
                Err(err) => {
                    log::debug!("real fft execution failed: {err}");
                    WAFT_ERR_EXEC
                }
            }
        }

        /// # Safety
        /// `output` must hold `size` reals, `input` must hold
        /// `2 * spectrum_length` floats; `temp`, when non-null, must hold
        /// `get_temp_size` bytes.
        #[no_mangle]
        pub unsafe extern "C" fn $execute_inverse(
            plan: *const RealFftPlan<$ty>,
            output: *mut $ty,
            input: *const $ty,
            temp: *mut $ty,
        ) -> i32 {
            let Some(plan) = (unsafe { plan.as_ref() }) else {
                return WAFT_ERR_NULL;
            };
            if input.is_null() || output.is_null() {
                return WAFT_ERR_NULL;
            }
            let input = unsafe {
                std::slice::from_raw_parts(input.cast::<Complex<$ty>>(), plan.spectrum_length())
            };
            let output = unsafe { std::slice::from_raw_parts_mut(output, plan.size()) };
            let executed = if temp.is_null() {
                plan.inverse(input, output)
            } else {
                let scratch = unsafe {
                    std::slice::from_raw_parts_mut(
                        temp.cast::<Complex<$ty>>(),
                        plan.scratch_length(),
                    )
                };
                plan.inverse_with_scratch(input, output, scratch)
            };
            match executed {
                Ok(()) => 0,
                Err(err) => {
                    log::debug!("real inverse fft execution failed: {err}");
                    WAFT_ERR_EXEC
                }
            }
        }

        /// # Safety
        /// `plan` must come from the matching create call and not be used
        /// afterwards. Null is a no-op.
        #[no_mangle]
        pub unsafe extern "C" fn $delete(plan: *mut RealFftPlan<$ty>) {
            if !plan.is_null() {
                drop(unsafe { Box::from_raw(plan) });
            }
        }
    };
}

real_capi!(
    f32,
    waft_create_real_plan_f32,
    waft_real_plan_f32_get_size,
    waft_real_plan_f32_get_spectrum_size,
    waft_real_plan_f32_get_temp_size,
    waft_real_plan_f32_execute,
    waft_real_plan_f32_execute_inverse,
    waft_real_plan_f32_delete
);
real_capi!(
    f64,
    waft_create_real_plan_f64,
    waft_real_plan_f64_get_size,
    waft_real_plan_f64_get_spectrum_size,
    waft_real_plan_f64_get_temp_size,
    waft_real_plan_f64_execute,
    waft_real_plan_f64_execute_inverse,
    waft_real_plan_f64_delete
);

macro_rules! dct_capi {
    (
        $ty: ty,
        $create: ident, $get_size: ident, $get_temp_size: ident,
        $execute: ident, $execute_inverse: ident, $delete: ident
    ) => {
        #[no_mangle]
        pub extern "C" fn $create(size: usize) -> *mut DctPlan<$ty> {
            match DctPlan::<$ty>::new(size) {
                Ok(plan) => Box::into_raw(Box::new(plan)),
                Err(err) => {
                    log::debug!("dct plan creation for size {size} rejected: {err}");
                    std::ptr::null_mut()
                }
            }
        }

        /// # Safety
        /// `plan` must be a live pointer from the matching create call.
        #[no_mangle]
        pub unsafe extern "C" fn $get_size(plan: *const DctPlan<$ty>) -> usize {
            match unsafe { plan.as_ref() } {
                Some(plan) => plan.size(),
                None => 0,
            }
        }

        /// Scratch requirement in bytes.
        ///
        /// # Safety
        /// `plan` must be a live pointer from the matching create call.
        #[no_mangle]
        pub unsafe extern "C" fn $get_temp_size(plan: *const DctPlan<$ty>) -> usize {
            match unsafe { plan.as_ref() } {
                Some(plan) => plan.temp_size(),
                None => 0,
            }
        }

        /// DCT-II.
        ///
        /// # Safety
        /// `output` and `input` must each hold `size` reals; `temp`, when
        /// non-null, must hold `get_temp_size` bytes.
        #[no_mangle]
        pub unsafe extern "C" fn $execute(
            plan: *const DctPlan<$ty>,
            output: *mut $ty,
            input: *const $ty,
            temp: *mut $ty,
        ) -> i32 {
            unsafe { run_dct(plan, output, input, temp, false) }
        }

        /// DCT-III.
        ///
        /// # Safety
        /// Same contract as the forward execute.
        #[no_mangle]
        pub unsafe extern "C" fn $execute_inverse(
            plan: *const DctPlan<$ty>,
            output: *mut $ty,
            input: *const $ty,
            temp: *mut $ty,
        ) -> i32 {
            unsafe { run_dct(plan, output, input, temp, true) }
        }

        /// # Safety
        /// `plan` must come from the matching create call and not be used
        /// afterwards. Null is a no-op.
        #[no_mangle]
        pub unsafe extern "C" fn $delete(plan: *mut DctPlan<$ty>) {
            if !plan.is_null() {
                drop(unsafe { Box::from_raw(plan) });
            }
        }
    };
}

unsafe fn run_dct<T: crate::FftSample>(
    plan: *const DctPlan<T>,
    output: *mut T,
    input: *const T,
    temp: *mut T,
    inverse: bool,
) -> i32
where
    f64: num_traits::AsPrimitive<T>,
{
    let Some(plan) = (unsafe { plan.as_ref() }) else {
        return WAFT_ERR_NULL;
    };
    if input.is_null() || output.is_null() {
        return WAFT_ERR_NULL;
    }
    let input = unsafe { std::slice::from_raw_parts(input, plan.size()) };
    let output = unsafe { std::slice::from_raw_parts_mut(output, plan.size()) };
    let executed = if temp.is_null() {
        if inverse {
            plan.inverse(input, output)
        } else {
            plan.forward(input, output)
        }
    } else {
        let scratch = unsafe {
            std::slice::from_raw_parts_mut(temp.cast::<Complex<T>>(), plan.scratch_length())
        };
        if inverse {
            plan.inverse_with_scratch(input, output, scratch)
        } else {
            plan.forward_with_scratch(input, output, scratch)
        }
    };
    match executed {
        Ok(()) => 0,
        Err(err) => {
            log::debug!("dct execution failed: {err}");
            WAFT_ERR_EXEC
        }
    }
}

dct_capi!(
    f32,
    waft_create_dct_plan_f32,
    waft_dct_plan_f32_get_size,
    waft_dct_plan_f32_get_temp_size,
    waft_dct_plan_f32_execute,
    waft_dct_plan_f32_execute_inverse,
    waft_dct_plan_f32_delete
);
dct_capi!(
    f64,
    waft_create_dct_plan_f64,
    waft_dct_plan_f64_get_size,
    waft_dct_plan_f64_get_temp_size,
    waft_dct_plan_f64_execute,
    waft_dct_plan_f64_execute_inverse,
    waft_dct_plan_f64_delete
);
