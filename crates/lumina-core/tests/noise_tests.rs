// Determinism and range tests for the value-noise sampler.

use lumina_core::ValueNoise;

#[test]
fn identical_inputs_yield_identical_samples() {
    let a = ValueNoise::new(1234);
    let b = ValueNoise::new(1234);
    for i in 0..100 {
        let x = i as f32 * 0.37;
        let y = i as f32 * 0.11 + 3.0;
        let z = i as f32 * 0.05;
        assert_eq!(a.sample3(x, y, z), b.sample3(x, y, z));
    }
}

#[test]
fn different_seeds_decorrelate() {
    let a = ValueNoise::new(1);
    let b = ValueNoise::new(2);
    let mut differing = 0;
    for i in 0..64 {
        let x = i as f32 * 0.73;
        if (a.sample2(x, 0.5) - b.sample2(x, 0.5)).abs() > 1e-6 {
            differing += 1;
        }
    }
    assert!(differing > 32, "seeds should produce distinct fields");
}

#[test]
fn samples_stay_in_unit_range() {
    let noise = ValueNoise::new(99);
    for i in 0..40 {
        for j in 0..40 {
            let v = noise.sample3(i as f32 * 0.631 - 12.0, j as f32 * 0.417 - 7.0, 0.25);
            assert!((0.0..1.0).contains(&v), "sample {v} out of range");
        }
    }
}

#[test]
fn field_is_smooth_at_small_scales() {
    let noise = ValueNoise::new(7);
    for i in 0..200 {
        let x = i as f32 * 0.01;
        let a = noise.sample2(x, 4.2);
        let b = noise.sample2(x + 0.001, 4.2);
        assert!((a - b).abs() < 0.05, "adjacent samples should be close");
    }
}
