mod convolve;
pub use convolve::*;

// ascending powers of z^-1; denominator[0] need not be 1
#[derive(Clone, Debug, PartialEq)]
pub struct FilterStage {
    pub numerator: Vec<f64>,
    pub denominator: Vec<f64>,
}

impl FilterStage {
    pub fn new(numerator: Vec<f64>, denominator: Vec<f64>) -> Self {
        FilterStage { numerator, denominator }
    }

    pub fn identity() -> Self {
        FilterStage::new(vec![1.0], vec![1.0])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterSpec {
    pub stages: Vec<FilterStage>,
}

impl FilterSpec {
    pub fn new(stages: Vec<FilterStage>) -> Self {
        FilterSpec { stages }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn cascade(&self) -> FilterStage {
        let numerator = cascade(self.stages.iter().map(|s| &s.numerator[..]));
        let denominator = cascade(self.stages.iter().map(|s| &s.denominator[..]));
        log::debug!("cascaded {} stage(s) into order {}/{}",
                    self.stages.len(),
                    numerator.len().saturating_sub(1),
                    denominator.len().saturating_sub(1));
        FilterStage { numerator, denominator }
    }
}
