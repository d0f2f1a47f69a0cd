#![no_main]

use libfuzzer_sys::fuzz_target;
use num_complex::Complex;
use waft::{DctPlan, RealFftPlan, RealPackFormat};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    folded: bool,
    size: u16,
    value: f32,
}

fuzz_target!(|data: Target| {
    if data.size < 4 || data.size > 15100 {
        return;
    }
    let size = data.size as usize;
    let pack_format = if data.folded {
        RealPackFormat::Folded
    } else {
        RealPackFormat::Explicit
    };
    let Ok(plan) = RealFftPlan::<f32>::new(size, pack_format) else {
        // Folded layouts reject odd sizes.
        assert!(data.folded && size % 2 == 1);
        return;
    };
    let input = vec![data.value; size];
    let mut spectrum = vec![Complex::<f32>::default(); plan.spectrum_length()];
    let mut back = vec![0f32; size];
    plan.forward(&input, &mut spectrum).unwrap();
    plan.inverse(&spectrum, &mut back).unwrap();

    let dct = DctPlan::<f32>::new(size).unwrap();
    let mut coefficients = vec![0f32; size];
    dct.forward(&input, &mut coefficients).unwrap();
    dct.inverse(&coefficients, &mut back).unwrap();
});
