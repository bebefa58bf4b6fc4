// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;
use imgcarve::cli::{Cli, Command};
use imgcarve::{driver, polygon::Point, quilt, seam::SeamMode, CarveError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn parse_polygon(flat: &[i64]) -> Result<Vec<Point>, CarveError> {
    if flat.len() % 2 != 0 {
        return Err(CarveError::InputParse {
            message: "polygon coordinates must come in x/y pairs".into(),
        });
    }
    Ok(flat.chunks(2).map(|pair| (pair[0], pair[1])).collect())
}

fn dump_magnitude(image: &image::RgbaImage, output: &str) -> Result<(), CarveError> {
    let energy = imgcarve::energy::energy_field(image);
    let mut max = 0.0f64;
    for y in 0..energy.height {
        for x in 0..energy.width {
            max = max.max(energy[(x, y)]);
        }
    }
    let max = max.max(1.0);
    let mut out = image::GrayImage::new(energy.width, energy.height);
    for y in 0..energy.height {
        for x in 0..energy.width {
            let v = (energy[(x, y)] / max * 255.0).round() as u8;
            out.put_pixel(x, y, image::Luma([v]));
        }
    }
    let path = format!("{}.magnitude.png", output);
    out.save(&path).map_err(|source| CarveError::ImageCodec { path, source })
}

fn run() -> Result<(), CarveError> {
    let cli = Cli::parse();
    let mode: SeamMode = cli.mode.into();
    let mut rng = make_rng(cli.seed);

    let source = image::open(&cli.input)
        .map_err(|source| CarveError::ImageCodec { path: cli.input.clone(), source })?
        .to_rgba8();

    if cli.dump_magnitude {
        dump_magnitude(&source, &cli.output)?;
    }

    let result = match cli.command {
        Command::Decrease { dw, dh } => {
            let shrunk_width = driver::shrink_width(&source, dw, mode, &mut rng)?;
            driver::shrink_height(&shrunk_width, dh, mode, &mut rng)?
        }
        Command::Increase { dw, dh } => {
            let grown_width = driver::grow_width(&source, dw, mode, cli.max_increase_div, &mut rng)?;
            driver::grow_height(&grown_width, dh, mode, cli.max_increase_div, &mut rng)?
        }
        Command::Amplification { percent } => driver::amplify(&source, percent, mode, &mut rng)?,
        Command::Erase { polygon } => {
            let points = parse_polygon(&polygon)?;
            driver::erase_object(&source, &points, mode, &mut rng)?
        }
        Command::Enlarge { scale, quilt: quilt_args } => {
            let (source_width, source_height) = source.dimensions();
            let width = (source_width as f64 * scale) as u32;
            let height = (source_height as f64 * scale) as u32;
            quilt::enlarge(&source, width, height, quilt_args.into(), &mut rng)?
        }
        Command::AddTexture { texture, alpha, steps, quilt: quilt_args } => {
            let texture_image = image::open(&texture)
                .map_err(|source| CarveError::ImageCodec { path: texture.clone(), source })?
                .to_rgba8();
            quilt::texture_transfer(&texture_image, &source, alpha, steps, quilt_args.into(), &mut rng)?
        }
    };

    result
        .save(&cli.output)
        .map_err(|source| CarveError::ImageCodec { path: cli.output.clone(), source })
}

fn main() {
    env_logger::init();
    match run() {
        Ok(()) => {}
        Err(err @ CarveError::InvariantFailure { .. }) => {
            panic!("{}", err);
        }
        Err(err) => {
            eprintln!("imgcarve: {}", err);
            std::process::exit(1);
        }
    }
}
