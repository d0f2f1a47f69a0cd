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
use rand::Rng;
use std::time::Instant;
use waft::{FftCapability, FftPlan, RealFftPlan, RealPackFormat, Waft};

fn time_complex_plan(size: usize) {
    let plan = FftPlan::<f64>::new(size).unwrap();
    println!("{}", plan.dump());

    let mut data: Vec<Complex<f64>> = (0..size)
        .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
        .collect();
    let mut scratch = plan.make_scratch().unwrap();

    let start = Instant::now();
    let rounds = 200;
    for _ in 0..rounds {
        plan.execute_with_scratch(&mut data, &mut scratch).unwrap();
        plan.execute_inverse_with_scratch(&mut data, &mut scratch)
            .unwrap();
    }
    let elapsed = start.elapsed();
    println!(
        "  {rounds} roundtrips of size {size}: {:?} ({:?} per transform)",
        elapsed,
        elapsed / (rounds * 2)
    );
}

fn time_real_plan(size: usize) {
    let plan = RealFftPlan::<f32>::new(size, RealPackFormat::Explicit).unwrap();
    let input: Vec<f32> = (0..size).map(|_| rand::rng().random()).collect();
    let mut spectrum = vec![Complex::<f32>::default(); plan.spectrum_length()];
    let mut back = vec![0f32; size];
    let mut scratch = plan.make_scratch().unwrap();

    let start = Instant::now();
    let rounds = 200;
    for _ in 0..rounds {
        plan.forward_with_scratch(&input, &mut spectrum, &mut scratch)
            .unwrap();
        plan.inverse_with_scratch(&spectrum, &mut back, &mut scratch)
            .unwrap();
    }
    println!(
        "  real fft of size {size}, {rounds} roundtrips: {:?}",
        start.elapsed()
    );
}

fn main() {
    env_logger::init();
    println!("capability: {}", FftCapability::detect().name());

    for size in [64usize, 1000, 1024, 1001, 4096, 1 << 16] {
        time_complex_plan(size);
    }
    for size in [1024usize, 1000, 44100] {
        time_real_plan(size);
    }

    let dct = Waft::dct_plan_f64(1024).unwrap();
    let input: Vec<f64> = (0..1024).map(|_| rand::rng().random()).collect();
    let mut spectrum = vec![0f64; 1024];
    let start = Instant::now();
    for _ in 0..200 {
        dct.forward(&input, &mut spectrum).unwrap();
    }
    println!("  dct-ii of size 1024, 200 passes: {:?}", start.elapsed());
}
