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
use rustfft::FftPlanner;
use waft::FftPlan;

fn random_signal_f64(n: usize) -> Vec<Complex<f64>> {
    (0..n)
        .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
        .collect()
}

fn random_signal_f32(n: usize) -> Vec<Complex<f32>> {
    (0..n)
        .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
        .collect()
}

fn bench_complex_f64(c: &mut Criterion) {
    // pow2, mixed composite, power of 3, prime
    for n in [1024usize, 1000, 2187, 1009] {
        let signal = random_signal_f64(n);

        c.bench_function(&format!("waft f64 {n}"), |b| {
            let plan = FftPlan::<f64>::new(n).unwrap();
            let mut scratch = plan.make_scratch().unwrap();
            let mut working = signal.clone();
            b.iter(|| {
                plan.execute_with_scratch(&mut working, &mut scratch)
                    .unwrap();
            })
        });

        c.bench_function(&format!("rustfft f64 {n}"), |b| {
            let fft = FftPlanner::<f64>::new().plan_fft_forward(n);
            let mut working = signal.clone();
            b.iter(|| {
                fft.process(&mut working);
            })
        });
    }
}

fn bench_complex_f32(c: &mut Criterion) {
    for n in [4096usize, 1000, 44100] {
        let signal = random_signal_f32(n);

        c.bench_function(&format!("waft f32 {n}"), |b| {
            let plan = FftPlan::<f32>::new(n).unwrap();
            let mut scratch = plan.make_scratch().unwrap();
            let mut working = signal.clone();
            b.iter(|| {
                plan.execute_with_scratch(&mut working, &mut scratch)
                    .unwrap();
            })
        });

        c.bench_function(&format!("rustfft f32 {n}"), |b| {
            let fft = FftPlanner::<f32>::new().plan_fft_forward(n);
            let mut working = signal.clone();
            b.iter(|| {
                fft.process(&mut working);
            })
        });
    }
}

criterion_group!(benches, bench_complex_f64, bench_complex_f32);
criterion_main!(benches);
