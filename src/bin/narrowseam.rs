use narrowseam::{compute_energy, energy_to_image, raster_from_image, raster_to_image, SeamCarver};

use clap::{App, Arg};
use failure::{Error, ResultExt};
use image::GenericImageView;
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let matches = App::new("narrowseam")
        .version("0.1.0")
        .about("Content-aware image width reduction by seam carving")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("The image to narrow")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Where to write the narrowed image")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("COLUMNS")
                .help("Target width, in columns; must be smaller than the input width")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .value_name("FILE")
                .help("Also write the first energy map as a grayscale image")
                .takes_value(true),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();
    let target_width: u32 = matches
        .value_of("width")
        .unwrap()
        .parse::<u32>()
        .with_context(|_| "the target width must be a whole number of columns".to_string())?;

    let decoded = image::open(input).with_context(|_| format!("could not read {}", input))?;
    let (width, height) = decoded.dimensions();
    println!("Original image size: {}x{}", width, height);

    let image = raster_from_image(&decoded);

    if let Some(path) = matches.value_of("energy") {
        let dump = energy_to_image(&compute_energy(&image));
        dump.save(path)
            .with_context(|_| format!("could not write {}", path))?;
    }

    println!("Carving...");
    let carved = SeamCarver::new(image).carve_to_width(target_width)?;

    raster_to_image(&carved)
        .save(output)
        .with_context(|_| format!("could not write {}", output))?;
    println!("Wrote {} at {}x{}", output, carved.width, carved.height);
    Ok(())
}
