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
use criterion::{criterion_group, criterion_main, Criterion};
use num_complex::Complex;
use rand::Rng;
use waft::{DctPlan, RealFftPlan, RealPackFormat};

fn bench_real_fft(c: &mut Criterion) {
    for n in [1024usize, 1000, 44100] {
        let input: Vec<f64> = (0..n).map(|_| rand::rng().random()).collect();

        c.bench_function(&format!("waft rfft f64 {n}"), |b| {
            let plan = RealFftPlan::<f64>::new(n, RealPackFormat::Explicit).unwrap();
            let mut spectrum = vec![Complex::<f64>::default(); plan.spectrum_length()];
            let mut scratch = plan.make_scratch().unwrap();
            b.iter(|| {
                plan.forward_with_scratch(&input, &mut spectrum, &mut scratch)
                    .unwrap();
            })
        });

        c.bench_function(&format!("waft irfft f64 {n}"), |b| {
            let forward = RealFftPlan::<f64>::new(n, RealPackFormat::Explicit).unwrap();
            let mut spectrum = vec![Complex::<f64>::default(); forward.spectrum_length()];
            let mut scratch = forward.make_scratch().unwrap();
            forward
                .forward_with_scratch(&input, &mut spectrum, &mut scratch)
                .unwrap();
            let mut back = vec![0f64; n];
            b.iter(|| {
                forward
                    .inverse_with_scratch(&spectrum, &mut back, &mut scratch)
                    .unwrap();
            })
        });
    }
}

fn bench_dct(c: &mut Criterion) {
    for n in [1024usize, 1000] {
        let input: Vec<f32> = (0..n).map(|_| rand::rng().random()).collect();

        c.bench_function(&format!("waft dct2 f32 {n}"), |b| {
            let plan = DctPlan::<f32>::new(n).unwrap();
            let mut spectrum = vec![0f32; n];
            let mut scratch = plan.make_scratch().unwrap();
            b.iter(|| {
                plan.forward_with_scratch(&input, &mut spectrum, &mut scratch)
                    .unwrap();
            })
        });
    }
}

criterion_group!(benches, bench_real_fft, bench_dct);
criterion_main!(benches);
