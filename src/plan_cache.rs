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

//! Memoized plans, keyed by size. Plan construction is the expensive part
//! of a transform, so repeated sizes should reuse the same `Arc`'d plan.

use crate::plan::{build_plan, FftPlan};
use crate::spectrum_arithmetic::ComplexArithFactory;
use crate::tables::SharedUnitRoots;
use crate::traits::FftSample;
use crate::transpose::TransposeFactory;
use crate::WaftError;
use num_traits::AsPrimitive;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// Unbounded cache of complex plans. Entries stay until `clear` is called.
pub struct FftPlanCache<T> {
    plans: Mutex<HashMap<usize, Arc<FftPlan<T>>>>,
}

impl<T> Default for FftPlanCache<T> {
    fn default() -> Self {
        FftPlanCache::new()
    }
}

impl<T> FftPlanCache<T> {
    pub fn new() -> Self {
        FftPlanCache {
            plans: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.plans.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached plan. Outstanding `Arc` handles stay valid.
    pub fn clear(&self) {
        if let Ok(mut map) = self.plans.lock() {
            map.clear();
        }
    }
}

fn plan_inner<T>(cache: &FftPlanCache<T>, size: usize) -> Result<Arc<FftPlan<T>>, WaftError>
where
    T: FftSample + ComplexArithFactory<T> + TransposeFactory<T> + SharedUnitRoots,
    f64: AsPrimitive<T>,
{
    if let Ok(map) = cache.plans.lock() {
        if let Some(existing) = map.get(&size) {
            return Ok(existing.clone());
        }
    }
    let plan: Arc<FftPlan<T>> = Arc::new(build_plan(size)?);
    if let Ok(mut map) = cache.plans.lock() {
        // Racing builders settle on whichever entry landed first.
        return Ok(map.entry(size).or_insert(plan).clone());
    }
    Ok(plan)
}

impl FftPlanCache<f32> {
    pub fn plan(&self, size: usize) -> Result<Arc<FftPlan<f32>>, WaftError> {
        plan_inner(self, size)
    }
}

impl FftPlanCache<f64> {
    pub fn plan(&self, size: usize) -> Result<Arc<FftPlan<f64>>, WaftError> {
        plan_inner(self, size)
    }
}

/// Process-wide plan cache for `f32` transforms.
pub fn shared_plan_cache_f32() -> &'static FftPlanCache<f32> {
    static CACHE: OnceLock<FftPlanCache<f32>> = OnceLock::new();
    CACHE.get_or_init(FftPlanCache::new)
}

/// Process-wide plan cache for `f64` transforms.
pub fn shared_plan_cache_f64() -> &'static FftPlanCache<f64> {
    static CACHE: OnceLock<FftPlanCache<f64>> = OnceLock::new();
    CACHE.get_or_init(FftPlanCache::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_returns_shared_plan() {
        let cache = FftPlanCache::<f64>::new();
        let a = cache.plan(240).unwrap();
        let b = cache.plan(240).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_clear() {
        let cache = FftPlanCache::<f32>::new();
        let kept = cache.plan(64).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        // Cleared caches rebuild; the old handle still executes.
        let rebuilt = cache.plan(64).unwrap();
        assert!(!Arc::ptr_eq(&kept, &rebuilt));
        let mut data = vec![num_complex::Complex::<f32>::default(); 64];
        kept.execute(&mut data).unwrap();
    }

    #[test]
    fn test_cache_propagates_plan_errors() {
        let cache = FftPlanCache::<f64>::new();
        assert!(cache.plan(1).is_err());
        assert!(cache.is_empty());
    }
}
