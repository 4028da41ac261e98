use swatchgrid::color::blend;
use swatchgrid::median_cut::dominant_colors;
use swatchgrid::{extract_palette, ExtractConfig, ExtractError, PaletteGrid};

#[test]
fn smoke_test_gradient() {
    let pixels = gradient(32, 32);
    let config = ExtractConfig::default();
    let grid = extract_palette(&pixels, &config).unwrap();

    let corners = grid.corners();
    for (i, a) in corners.iter().enumerate() {
        for b in corners.iter().skip(i + 1) {
            assert_ne!(a, b, "gradient corners should be distinct");
        }
    }
    for hex in grid.hex_cells() {
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
    }
}

#[test]
fn single_color_image() {
    let pixel = rgb::RGB {
        r: 200,
        g: 100,
        b: 50,
    };
    let pixels = vec![pixel; 64];
    let grid = extract_palette(&pixels, &ExtractConfig::default()).unwrap();

    // Every box averages to the same color, and blending a color with
    // itself changes nothing, so the whole grid is that color
    for cell in grid.iter() {
        assert_eq!(cell, pixel);
    }
}

#[test]
fn two_color_image_fills_rows() {
    let dark = rgb::RGB {
        r: 50,
        g: 50,
        b: 50,
    };
    let light = rgb::RGB {
        r: 200,
        g: 200,
        b: 200,
    };
    let mut pixels = vec![dark; 32];
    pixels.extend(vec![light; 32]);

    let grid = extract_palette(&pixels, &ExtractConfig::default()).unwrap();

    let mid = blend(dark, light);
    assert_eq!(grid.cells(), &[dark, dark, dark, mid, mid, mid, light, light, light]);
}

#[test]
fn empty_input_reports_no_dominant_colors() {
    let result = extract_palette(&[], &ExtractConfig::default());
    assert!(matches!(
        result,
        Err(ExtractError::InsufficientDominantColors {
            needed: 4,
            found: 0
        })
    ));
}

#[test]
fn color_count_below_corner_count() {
    let pixels = gradient(8, 8);
    let config = ExtractConfig::new().color_count(2);
    assert!(matches!(
        extract_palette(&pixels, &config),
        Err(ExtractError::InsufficientDominantColors {
            needed: 4,
            found: 2
        })
    ));
}

#[test]
fn color_count_above_corner_count_is_fine() {
    let pixels = gradient(16, 16);
    let config = ExtractConfig::new().color_count(9);
    let grid = extract_palette(&pixels, &config).unwrap();
    assert_ne!(grid, PaletteGrid::default());
}

#[test]
fn all_black_image_cannot_be_averaged() {
    // Splitting filters every sample away, leaving only empty boxes
    let pixels = vec![rgb::RGB { r: 0, g: 0, b: 0 }; 64];
    assert!(matches!(
        extract_palette(&pixels, &ExtractConfig::default()),
        Err(ExtractError::EmptyBoxAverage)
    ));
}

#[test]
fn config_builder() {
    let config = ExtractConfig::default();
    assert_eq!(config.color_count, 4);

    let config = ExtractConfig::new().color_count(6);
    assert_eq!(config.color_count, 6);
}

// ===================== Stateful refresh flow =====================

#[test]
fn refresh_keeps_last_good_grid() {
    let pixels = gradient(16, 16);
    let mut grid = PaletteGrid::new();

    let dominant = dominant_colors(&pixels, 4).unwrap();
    grid.refresh(&dominant).unwrap();
    let good = grid;

    // A later extraction that comes up short must not disturb the grid
    let too_few = dominant_colors(&pixels, 2).unwrap();
    assert_eq!(too_few.len(), 2);
    assert!(grid.refresh(&too_few).is_err());
    assert_eq!(grid, good);
}

#[test]
fn hex_cells_from_single_color_image() {
    let pixels = vec![
        rgb::RGB {
            r: 200,
            g: 100,
            b: 50
        };
        16
    ];
    let grid = extract_palette(&pixels, &ExtractConfig::default()).unwrap();
    for hex in grid.hex_cells() {
        assert_eq!(hex, "#C86432");
    }
}

// ===================== Helper functions =====================

fn gradient(width: usize, height: usize) -> Vec<rgb::RGB<u8>> {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            let b = 128u8;
            pixels.push(rgb::RGB { r, g, b });
        }
    }
    pixels
}
