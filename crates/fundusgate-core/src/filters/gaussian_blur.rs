use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Apply Gaussian blur to a raw array using separable 1D convolution.
pub fn gaussian_blur_array(data: &Array2<f32>, sigma: f32) -> Array2<f32> {
    let kernel = make_gaussian_kernel(sigma);
    let row_pass = convolve(data, &kernel, Axis::Rows);
    convolve(&row_pass, &kernel, Axis::Cols)
}

fn make_gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    let size = 2 * radius + 1;
    let mut kernel = vec![0.0f32; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

#[derive(Clone, Copy)]
enum Axis {
    Rows,
    Cols,
}

fn convolve(data: &Array2<f32>, kernel: &[f32], axis: Axis) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    let tap = |row: usize, col: usize, ki: usize| -> f32 {
        let offset = ki as isize - radius as isize;
        match axis {
            Axis::Rows => {
                let src_col = (col as isize + offset).clamp(0, w as isize - 1) as usize;
                data[[row, src_col]]
            }
            Axis::Cols => {
                let src_row = (row as isize + offset).clamp(0, h as isize - 1) as usize;
                data[[src_row, col]]
            }
        }
    };

    let convolve_row = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                kernel
                    .iter()
                    .enumerate()
                    .map(|(ki, &kv)| tap(row, col, ki) * kv)
                    .sum()
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(convolve_row).collect()
    } else {
        (0..h).map(convolve_row).collect()
    };

    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}
