#![no_main]

use labws::{Lab, WorkingSpace, lab_to_rgb, rgb_to_lab, xyz_from_lab};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u32, u32, u32, u8)| {
    let l = f32::from_bits(data.0);
    let a = f32::from_bits(data.1);
    let b = f32::from_bits(data.2);
    let space = WorkingSpace::ALL[data.3 as usize % WorkingSpace::ALL.len()];

    _ = xyz_from_lab(l, a, b);
    let rgb = lab_to_rgb(space, l, a, b);
    if let Some(lab) = rgb_to_lab(space, rgb) {
        _ = lab.euclidean_distance(Lab::new(l, a, b));
    }
});
