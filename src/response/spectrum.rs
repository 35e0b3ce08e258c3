use super::{FrequencyResponse, Sweep};
use crate::fft;

// unlike freqz, the bins run all the way up to rate
pub fn analyze(samples: &[f64], sweep: &Sweep) -> FrequencyResponse {
    let n = sweep.points;
    if samples.len() > n {
        log::warn!("impulse response truncated from {} to {} samples",
                   samples.len(), n);
    }
    log::debug!("transforming {} samples at {} points", samples.len(), n);

    let spectrum = fft::rfft(samples, n);
    let fstep = sweep.rate / n as f64;
    FrequencyResponse::from_bins(
        spectrum.into_iter()
            .enumerate()
            .map(|(k, x)| (k as f64 * fstep, x))
    )
}
