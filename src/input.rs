use crate::error::ParseError;
use crate::filter::{FilterSpec, FilterStage};
use crate::response::{freqz, spectrum, FrequencyResponse, Sweep};

pub const NUMERATOR: &str = "b";
pub const DENOMINATOR: &str = "a";

#[derive(Clone, Debug, PartialEq)]
pub struct ImpulseResponse {
    pub samples: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Coefficients(FilterSpec),
    Impulse(ImpulseResponse),
}

impl Input {
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Coefficients(_) => "Coeff.",
            Input::Impulse(_) => "IR",
        }
    }

    pub fn analyze(&self, sweep: &Sweep) -> FrequencyResponse {
        match self {
            Input::Coefficients(spec) => {
                let stage = spec.cascade();
                freqz::evaluate(&stage.numerator, &stage.denominator, sweep)
            },
            Input::Impulse(ir) => spectrum::analyze(&ir.samples, sweep),
        }
    }
}

pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Input, ParseError> {
    let first = match lines.first() {
        Some(first) => first.as_ref(),
        None => return Err(ParseError::EmptyInput),
    };

    if is_marker(first) {
        parse_coefficients(lines).map(Input::Coefficients)
    } else {
        let samples = lines.iter()
            .map(|l| parse_number(l.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("impulse response with {} samples", samples.len());
        Ok(Input::Impulse(ImpulseResponse { samples }))
    }
}

pub fn parse_str(text: &str) -> Result<Input, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    parse(&lines)
}

fn is_marker(line: &str) -> bool {
    line == NUMERATOR || line == DENOMINATOR
}

fn parse_number(line: &str) -> Result<f64, ParseError> {
    line.trim().parse()
        .map_err(|_| ParseError::InvalidNumber(line.to_owned()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Numerator,
    Denominator,
}

// Coefficient blocks are collected into two independent lists; the i-th
// numerator pairs with the i-th denominator once everything is read.
#[derive(Debug)]
struct Blocks {
    target: Target,
    buffer: Vec<f64>,
    numerators: Vec<Vec<f64>>,
    denominators: Vec<Vec<f64>>,
}

impl Blocks {
    fn new() -> Self {
        Blocks {
            target: Target::Numerator,
            buffer: vec![],
            numerators: vec![],
            denominators: vec![],
        }
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let block = std::mem::replace(&mut self.buffer, vec![]);
        match self.target {
            Target::Numerator => self.numerators.push(block),
            Target::Denominator => self.denominators.push(block),
        }
    }

    fn switch(&mut self, target: Target) {
        self.flush();
        log::trace!("switching to {:?}", target);
        self.target = target;
    }

    fn push(&mut self, value: f64) {
        self.buffer.push(value);
    }

    fn finish(mut self) -> Result<FilterSpec, ParseError> {
        self.flush();
        // markers alone carry no stages
        if self.numerators.is_empty() && self.denominators.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if self.numerators.len() != self.denominators.len() {
            return Err(ParseError::MismatchedStageCount {
                numerators: self.numerators.len(),
                denominators: self.denominators.len(),
            });
        }
        let stages: Vec<_> = self.numerators.into_iter()
            .zip(self.denominators)
            .map(|(b, a)| FilterStage::new(b, a))
            .collect();
        log::debug!("parsed {} filter stage(s)", stages.len());
        Ok(FilterSpec::new(stages))
    }
}

fn parse_coefficients<S: AsRef<str>>(lines: &[S])
                                     -> Result<FilterSpec, ParseError>
{
    let mut blocks = Blocks::new();
    for line in lines {
        match line.as_ref() {
            NUMERATOR => blocks.switch(Target::Numerator),
            DENOMINATOR => blocks.switch(Target::Denominator),
            other => blocks.push(parse_number(other)?),
        }
    }
    blocks.finish()
}
