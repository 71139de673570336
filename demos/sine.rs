use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use monotone_spline::Spline;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "spline.out".to_string());

    let number_of_samples = 11;
    let x: Vec<f64> = (0..number_of_samples)
        .map(|i| i as f64 / (number_of_samples - 1) as f64)
        .collect();
    let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();

    let spline = Spline::monotone(x, y).unwrap();

    let mut out = BufWriter::new(File::create(&path).unwrap());

    let number_of_points = 100;
    let (min_x, max_x) = spline.domain();
    for i in 0..number_of_points {
        let x = min_x + (max_x - min_x) * i as f64 / number_of_points as f64;
        writeln!(out, "{} {}", x, spline.interpolate(x).unwrap()).unwrap();
    }
}
