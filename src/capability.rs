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
use std::sync::OnceLock;

/// Ordered CPU capability tag used to pick a kernel set.
///
/// Detected once per process; every plan built afterwards reads the same
/// memoized value, so the chosen kernel set never changes at runtime.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftCapability {
    /// Portable scalar kernels, always available.
    Generic,
    /// Fused multiply-add vector units (AVX2+FMA on x86-64, NEON on aarch64).
    Fma,
    /// Wide vector units (AVX-512 on x86-64); plans prefer larger butterfly bases.
    Wide,
}

impl FftCapability {
    /// Probes the running processor, memoizing the answer.
    pub fn detect() -> FftCapability {
        static DETECTED: OnceLock<FftCapability> = OnceLock::new();
        *DETECTED.get_or_init(probe)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FftCapability::Generic => "generic",
            FftCapability::Fma => "fma",
            FftCapability::Wide => "wide",
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx"))]
fn probe() -> FftCapability {
    if std::arch::is_x86_feature_detected!("avx512f") {
        return FftCapability::Wide;
    }
    if std::arch::is_x86_feature_detected!("avx2") && std::arch::is_x86_feature_detected!("fma") {
        return FftCapability::Fma;
    }
    FftCapability::Generic
}

#[cfg(target_arch = "aarch64")]
fn probe() -> FftCapability {
    // NEON is baseline on aarch64.
    FftCapability::Fma
}

#[cfg(not(any(all(target_arch = "x86_64", feature = "avx"), target_arch = "aarch64")))]
fn probe() -> FftCapability {
    FftCapability::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_is_stable() {
        let first = FftCapability::detect();
        for _ in 0..8 {
            assert_eq!(FftCapability::detect(), first);
        }
    }

    #[test]
    fn test_ordering() {
        assert!(FftCapability::Generic < FftCapability::Fma);
        assert!(FftCapability::Fma < FftCapability::Wide);
    }
}
