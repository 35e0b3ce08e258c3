use super::{FrequencyResponse, Sweep};
use crate::Complex;

use rayon::prelude::*;
use std::f64::consts::PI;

// horner, in powers of z^-1
fn polyval(coef: &[f64], delay: Complex<f64>) -> Complex<f64> {
    coef.iter().rev()
        .fold(Complex::new(0.0, 0.0), |acc, &c| acc * delay + Complex::new(c, 0.0))
}

pub fn response_at(numerator: &[f64], denominator: &[f64], omega: f64)
                   -> Complex<f64>
{
    let delay = Complex::from_polar(&1.0, &-omega);
    polyval(numerator, delay) / polyval(denominator, delay)
}

// bins cover [0, rate / 2); a[0] is not assumed to be 1
pub fn evaluate(numerator: &[f64], denominator: &[f64], sweep: &Sweep)
                -> FrequencyResponse
{
    let n = sweep.points;
    let nyquist = sweep.rate / 2.0;
    log::debug!("evaluating order {}/{} transfer function at {} points",
                numerator.len().saturating_sub(1),
                denominator.len().saturating_sub(1),
                n);

    let bins: Vec<_> = (0..n).into_par_iter()
        .map(|k| {
            let omega = PI * k as f64 / n as f64;
            let freq = nyquist * k as f64 / n as f64;
            (freq, response_at(numerator, denominator, omega))
        })
        .collect();
    FrequencyResponse::from_bins(bins)
}
