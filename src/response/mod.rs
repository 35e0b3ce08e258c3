use crate::Complex;

pub mod freqz;
pub mod spectrum;

pub const DEFAULT_POINTS: usize = 2400;
pub const DEFAULT_RATE: f64 = 48000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    pub points: usize,
    pub rate: f64,
}

impl Sweep {
    pub fn new() -> Self {
        Sweep {
            points: DEFAULT_POINTS,
            rate: DEFAULT_RATE,
        }
    }

    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Sweep::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyResponse {
    pub frequencies: Vec<f64>,
    pub gain_db: Vec<f64>,
    pub phase_degrees: Vec<f64>,
}

impl FrequencyResponse {
    pub fn from_bins<I>(bins: I) -> Self
    where
        I: IntoIterator<Item=(f64, Complex<f64>)>,
    {
        let bins = bins.into_iter();
        let (lower, _) = bins.size_hint();
        let mut response = FrequencyResponse {
            frequencies: Vec::with_capacity(lower),
            gain_db: Vec::with_capacity(lower),
            phase_degrees: Vec::with_capacity(lower),
        };
        for (f, h) in bins {
            response.frequencies.push(f);
            response.gain_db.push(gain_db(h));
            response.phase_degrees.push(phase_degrees(h));
        }
        response
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item=(f64, f64, f64)> + '_ {
        self.frequencies.iter()
            .zip(self.gain_db.iter())
            .zip(self.phase_degrees.iter())
            .map(|((f, g), p)| (*f, *g, *p))
    }

    // only applied on request; the response itself is left alone
    pub fn unwrapped_phase(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.phase_degrees.len());
        let mut offset = 0.0;
        let mut last: Option<f64> = None;
        for &p in &self.phase_degrees {
            if let Some(prev) = last {
                let delta = p - prev;
                if delta.is_finite() {
                    // fold the step into (-180, 180]
                    let folded = delta - 360.0 * ((delta - 180.0) / 360.0).ceil();
                    offset += folded - delta;
                }
            }
            last = Some(p);
            out.push(p + offset);
        }
        out
    }
}

pub fn gain_db(h: Complex<f64>) -> f64 {
    20.0 * h.norm().log10()
}

pub fn phase_degrees(h: Complex<f64>) -> f64 {
    h.arg().to_degrees()
}
