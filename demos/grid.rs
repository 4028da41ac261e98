//! Extract a blended 3x3 palette from an image and print it as hex.
//!
//! Usage:
//!   cargo run --example grid --release -- <image> [sample-step]

use swatchgrid::{extract_palette, ExtractConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let input = args.get(1).expect("usage: grid <image> [sample-step]");
    let step: usize = args
        .get(2)
        .map(|s| s.parse().expect("sample-step must be a number"))
        .unwrap_or(1);

    // Load image as RGBA and flatten to RGB samples
    let img = image::open(input).unwrap().to_rgba8();
    let (w, h) = (img.width(), img.height());
    let samples = swatchgrid::sample::from_rgba_bytes_strided(img.as_raw(), step);

    let grid = extract_palette(&samples, &ExtractConfig::default()).unwrap();

    eprintln!("{input} ({w}x{h}, {} samples)", samples.len());
    for row in grid.hex_cells().chunks(3) {
        println!("{}  {}  {}", row[0], row[1], row[2]);
    }
}
