// wickedly useful re-export
pub use num::Complex;

pub mod error;
pub use error::{Error, ParseError, Result};

pub mod filter;
pub use filter::{FilterSpec, FilterStage};

pub mod input;
pub use input::{parse, parse_str, ImpulseResponse, Input};

pub mod response;
pub use response::{FrequencyResponse, Sweep};

pub mod fft;

pub mod output;
