use crate::response::FrequencyResponse;

use std::io::{Error, ErrorKind, Result, Write};

pub const HEADER: &str = "# frequency_hz\tgain_db\tphase_deg";

pub fn write_table<W: Write>(out: W, title: &str,
                             response: &FrequencyResponse) -> Result<()> {
    write_table_with_phase(out, title, response, &response.phase_degrees)
}

pub fn write_table_with_phase<W: Write>(mut out: W, title: &str,
                                        response: &FrequencyResponse,
                                        phase: &[f64]) -> Result<()> {
    if phase.len() != response.len() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("{} phase values for {} points", phase.len(), response.len()),
        ));
    }
    writeln!(out, "# {}", title)?;
    writeln!(out, "{}", HEADER)?;
    let rows = response.frequencies.iter()
        .zip(response.gain_db.iter())
        .zip(phase.iter());
    for ((f, g), p) in rows {
        writeln!(out, "{}\t{}\t{}", f, g, p)?;
    }
    out.flush()
}
