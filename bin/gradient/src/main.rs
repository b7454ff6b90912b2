//! Renders a stack of horizontal gradient bands, one per color space, into a
//! PNG so the interpolation behavior of the spaces can be compared visually.

use anyhow::Context;
use clap::Parser;
use gradia::{sample_gradient, Component, Components, Space};
use image::{Rgb, RgbImage};
use rand::Rng;

/// Band order from top to bottom.
const SPACES: [Space; 8] = [
    Space::Srgb,
    Space::Cielab,
    Space::Ipt,
    Space::Oklab,
    Space::Ictcp,
    Space::Xyb,
    Space::Srlab2,
    Space::Linear,
];

fn parse_rgb(s: &str) -> Result<[u8; 3], String> {
    let mut parts = s.split(',').map(|p| p.trim().parse::<u8>());
    let mut next = || {
        parts
            .next()
            .ok_or_else(|| format!("expected \"r,g,b\", got \"{s}\""))?
            .map_err(|e| format!("invalid channel in \"{s}\": {e}"))
    };
    let rgb = [next()?, next()?, next()?];
    if parts.next().is_some() {
        return Err(format!("expected exactly 3 channels in \"{s}\""));
    }
    Ok(rgb)
}

#[derive(Parser)]
#[command(about = "Render gradient comparison bands across color spaces")]
struct Args {
    /// Left endpoint as "r,g,b".
    #[arg(long, value_parser = parse_rgb, default_value = "0,0,255")]
    left: [u8; 3],

    /// Right endpoint as "r,g,b".
    #[arg(long, value_parser = parse_rgb, default_value = "255,255,0")]
    right: [u8; 3],

    /// Quantization level in (0, 1]; 1 disables banding.
    #[arg(long, default_value_t = 1.0)]
    quant: Component,

    /// Width of each band in pixels.
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Height of each band in pixels.
    #[arg(long, default_value_t = 100)]
    band_height: u32,

    /// Pick random endpoints instead of --left/--right.
    #[arg(long)]
    random: bool,

    /// Output PNG path.
    #[arg(long, default_value = "out.png")]
    out: String,
}

/// Clamps a sampled sRGB triplet into displayable 8-bit channels. Out of
/// gamut results from the wide spaces land here, so this is the one place
/// values get clamped.
fn pack(c: &Components) -> Rgb<u8> {
    Rgb([
        c.0.clamp(0.0, 255.0) as u8,
        c.1.clamp(0.0, 255.0) as u8,
        c.2.clamp(0.0, 255.0) as u8,
    ])
}

/// Writes one sampled row into the image and replicates it down the band.
fn blit_band(image: &mut RgbImage, top: u32, band_height: u32, row: &[Components]) {
    for (x, components) in row.iter().enumerate() {
        let pixel = pack(components);
        for y in top..top + band_height {
            image.put_pixel(x as u32, y, pixel);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (left, right) = if args.random {
        let mut rng = rand::thread_rng();
        (rng.gen::<[u8; 3]>(), rng.gen::<[u8; 3]>())
    } else {
        (args.left, args.right)
    };

    let mut image = RgbImage::new(args.width, args.band_height * SPACES.len() as u32);
    for (index, space) in SPACES.iter().enumerate() {
        let row = sample_gradient(left, right, *space, args.quant, args.width as usize)
            .with_context(|| format!("sampling the {space:?} band"))?;
        blit_band(&mut image, index as u32 * args.band_height, args.band_height, &row);
    }

    image
        .save(&args.out)
        .with_context(|| format!("writing {}", args.out))?;

    Ok(())
}
