use freqresp::*;

use clap::value_t_or_exit;
use std::io::{Read, Write};

fn positive_count(v: String) -> std::result::Result<(), String> {
    match v.parse::<usize>() {
        Ok(x) if x > 0 => Ok(()),
        _ => Err(format!("expected a positive integer, got {:?}", v)),
    }
}

// finite, above zero
fn positive_rate(v: String) -> std::result::Result<(), String> {
    match v.parse::<f64>() {
        Ok(x) if x.is_finite() && x > 0.0 => Ok(()),
        _ => Err(format!("expected a finite positive rate, got {:?}", v)),
    }
}

fn main() {
    let matches = clap::App::new("freqresp")
        .about("frequency response and phase from coefficients or impulse response")
        .after_help("Coefficient input is a \"b\" line followed by numerator \
                     coefficients, one per line, then an \"a\" line followed by \
                     denominator coefficients. Repeat b/a blocks for cascaded \
                     stages.\n\nAny other input is read as impulse response \
                     samples, one per line.")
        .arg(clap::Arg::with_name("input")
             .short("i")
             .long("input")
             .value_name("FILE")
             .help("Read input from a file, not stdin.")
             .takes_value(true))
        .arg(clap::Arg::with_name("output")
             .short("o")
             .long("output")
             .value_name("FILE")
             .help("Write the table to a file, not stdout.")
             .takes_value(true))
        .arg(clap::Arg::with_name("title")
             .short("t")
             .long("title")
             .value_name("TITLE")
             .help("Title for the output (default: Coeff. or IR)")
             .takes_value(true))
        .arg(clap::Arg::with_name("rate")
             .short("r")
             .long("rate")
             .value_name("HZ")
             .help("Sampling rate, in Hz.")
             .takes_value(true)
             .default_value("48000")
             .validator(positive_rate))
        .arg(clap::Arg::with_name("points")
             .short("p")
             .long("points")
             .value_name("N")
             .help("Number of frequency points.")
             .takes_value(true)
             .default_value("2400")
             .validator(positive_count))
        .arg(clap::Arg::with_name("unwrap")
             .short("u")
             .long("unwrap")
             .help("Unwrap the phase column."))
        .arg(clap::Arg::with_name("verbose")
             .short("v")
             .multiple(true)
             .help("More logging; repeat for more."))
        .get_matches();

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"));
    logger.format_timestamp(None);
    match matches.occurrences_of("verbose") {
        0 => {},
        1 => { logger.filter_level(log::LevelFilter::Info); },
        2 => { logger.filter_level(log::LevelFilter::Debug); },
        _ => { logger.filter_level(log::LevelFilter::Trace); },
    }
    logger.init();

    if let Err(e) = run(&matches) {
        log::debug!("{:?}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let mut text = String::new();
    if let Some(path) = matches.value_of("input") {
        log::info!("reading {}", path);
        text = std::fs::read_to_string(path)?;
    } else {
        std::io::stdin().read_to_string(&mut text)?;
    }

    let input = parse_str(&text)?;
    let sweep = Sweep::new()
        .points(value_t_or_exit!(matches, "points", usize))
        .rate(value_t_or_exit!(matches, "rate", f64));
    log::info!("{} input, {} points at {} Hz",
               input.kind(), sweep.points, sweep.rate);

    let response = input.analyze(&sweep);
    let title = matches.value_of("title").unwrap_or(input.kind());

    let out: Box<dyn Write> = if let Some(path) = matches.value_of("output") {
        Box::new(std::io::BufWriter::new(std::fs::File::create(path)?))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };

    if matches.is_present("unwrap") {
        let phase = response.unwrapped_phase();
        output::write_table_with_phase(out, title, &response, &phase)?;
    } else {
        output::write_table(out, title, &response)?;
    }
    Ok(())
}
