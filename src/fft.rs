use crate::Complex;

// zero-padded or truncated to n, unnormalized
pub fn rfft(samples: &[f64], n: usize) -> Vec<Complex<f64>> {
    if n == 0 {
        return vec![];
    }

    let mut data: Vec<_> = samples.iter()
        .take(n)
        .map(|&v| Complex::new(v, 0.0))
        .collect();
    data.resize(n, Complex::new(0.0, 0.0));

    let mut output = vec![Complex::new(0.0, 0.0); n];
    let mut planner = rustfft::FFTplanner::new(false);
    let fft = planner.plan_fft(n);
    fft.process(&mut data, &mut output);
    output
}
