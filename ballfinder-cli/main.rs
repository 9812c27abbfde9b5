use ballfinder_cli::{BallFinder, Params};
use flexi_logger::Logger;
use std::time::Instant;

fn main() {
    Logger::try_with_env_or_str("info")
        .expect("Invalid log specification")
        .start()
        .expect("Logger initialization failed");

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| {
        eprintln!("Usage: ballfinder <input> [output]");
        std::process::exit(2);
    });
    let output = args.next().unwrap_or_else(|| "balls.png".to_string());

    let finder = BallFinder::new(Params::default());

    let mut img = image::ImageReader::open(&input)
        .expect("Image not found")
        .decode()
        .expect("Decode failed")
        .to_rgba8();

    // Time the full descent
    let t0 = Instant::now();
    let candidates = finder.detect_image(&img).expect("Detection failed");
    let elapsed = t0.elapsed();

    println!("Time taken: {:.2?}", elapsed);
    println!("Detected {} ball candidate(s)", candidates.len());
    for c in &candidates {
        println!("  ({}, {})  id={}", c.x, c.y, c.id);
    }

    // Draw red circles at each accepted candidate
    finder.draw_overlay(&mut img, &candidates);

    img.save(&output).expect("Failed to save output image");
    println!("Saved result image as {}", output);
}
