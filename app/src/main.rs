use labws::{Lab, WorkingSpace, lab_hsv_to_rgb, lab_to_rgb, lookup, rgb_to_lab};
use rand::Rng;
use tracing_subscriber::EnvFilter;

fn print_row(space: WorkingSpace, lab: Lab) {
    let rgb = lab_to_rgb(space, lab.l, lab.a, lab.b);
    println!(
        "{:>16} L={:7.2} a={:8.2} b={:8.2} -> r={:8.5} g={:8.5} b={:8.5}{}",
        space.name(),
        lab.l,
        lab.a,
        lab.b,
        rgb.r,
        rgb.g,
        rgb.b,
        if rgb.is_in_gamut() { "" } else { "  (out of gamut)" }
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() == 4 {
        let space = match lookup(&args[0]) {
            Ok(space) => space,
            Err(e) => {
                tracing::error!("{e}");
                std::process::exit(1);
            }
        };
        let values: Result<Vec<f32>, _> = args[1..].iter().map(|x| x.parse::<f32>()).collect();
        match values {
            Ok(v) => print_row(space, Lab::new(v[0], v[1], v[2])),
            Err(e) => {
                tracing::error!("invalid Lab component: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let samples = [
        Lab::new(0., 0., 0.),
        Lab::new(50., 0., 0.),
        Lab::new(100., 0., 0.),
        Lab::new(53.24, 80.09, 67.20),
        Lab::new(87.73, -86.18, 83.18),
        Lab::new(32.30, 79.19, -107.86),
    ];

    for space in WorkingSpace::ALL {
        for lab in samples {
            print_row(space, lab);
        }
    }

    let hue_wheel = (0..12)
        .map(|i| lab_hsv_to_rgb(WorkingSpace::Srgb, i as f32 / 12., 0.4, 0.7))
        .filter(|rgb| rgb.is_in_gamut())
        .count();
    println!("{hue_wheel} of 12 hue wheel samples are inside sRGB");

    let mut rng = rand::rng();
    let mut worst = 0f32;
    for _ in 0..10000 {
        let space = WorkingSpace::ALL[rng.random_range(0..WorkingSpace::ALL.len())];
        let rgb = labws::Rgb::new(
            rng.random_range(0f32..1f32),
            rng.random_range(0f32..1f32),
            rng.random_range(0f32..1f32),
        );
        if let Some(lab) = rgb_to_lab(space, rgb) {
            let back = lab_to_rgb(space, lab.l, lab.a, lab.b);
            worst = worst.max(back.max_channel_distance(rgb));
        }
    }
    println!("worst RGB -> Lab -> RGB deviation: {worst:e}");
}
