#![no_main]

use libfuzzer_sys::fuzz_target;
use num_complex::Complex;
use waft::FftPlan;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    forward: bool,
    size: u16,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    if data.size < 2 || data.size > 15100 {
        return;
    }
    let plan = FftPlan::<f64>::new(data.size as usize).unwrap();
    let mut chunk = vec![Complex::new(data.re, data.im); data.size as usize];
    if data.forward {
        plan.execute(&mut chunk).unwrap();
    } else {
        plan.execute_inverse(&mut chunk).unwrap();
    }
    let mut scratch = plan.make_scratch().unwrap();
    plan.execute_with_scratch(&mut chunk, &mut scratch).unwrap();
    plan.execute_inverse_with_scratch(&mut chunk, &mut scratch)
        .unwrap();
});
