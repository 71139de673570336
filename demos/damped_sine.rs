use std::f64::consts::PI;

use monotone_spline::Spline;

fn main() {
    let x_min = 1.0;
    let x_max = 5.0 * PI;

    let number_of_samples = 30;
    let x: Vec<f64> = (0..number_of_samples)
        .map(|i| x_min + (x_max - x_min) * i as f64 / (number_of_samples - 1) as f64)
        .collect();
    let y: Vec<f64> = x.iter().map(|x| x * x.sin()).collect();

    let spline = Spline::monotone(x, y).unwrap();

    let number_of_points = 300;
    let queries: Vec<f64> = (0..number_of_points)
        .map(|i| x_min + (x_max - x_min) * i as f64 / (number_of_points - 1) as f64)
        .collect();
    let values = spline.batch_interpolate(&queries).unwrap();

    for (x, value) in queries.iter().zip(&values) {
        println!("{:.4} {:.4}", x, value);
    }
}
