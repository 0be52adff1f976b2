use std::{fs, io};
use std::io::{BufRead, BufReader};
use std::time::{Duration, Instant};

pub(crate) fn file_to_vec(filename: &str) -> io::Result<Vec<String>> {
    let file_in = fs::File::open(filename)?;
    let file_reader = BufReader::new(file_in);
    Ok(file_reader
        .lines()
        .filter_map(io::Result::ok)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

pub(crate) fn trace(l_step: &str, run: Instant, _run_elapsed: Duration) -> Duration {
    log::trace!("TIME | Total={:.2?} | {}={:.2?}", run.elapsed(), l_step, run.elapsed() - _run_elapsed);
    run.elapsed()
}
