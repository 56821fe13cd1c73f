use eyre::WrapErr;
use log::debug;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};
use structopt::StructOpt;
use wordfreq::{count_words, init_logger, print_top_k, Result, WordCount, TOPK};

/// Prints the most frequent words across FILES, case-insensitively.
#[derive(StructOpt, Debug)]
#[structopt(name = "topk_words")]
struct Opt {
    /// How many words to report [default: 10]
    #[structopt(short, long = "top")]
    k: Option<usize>,
    #[structopt(parse(from_os_str), required = true, min_values = 1)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    init_logger();

    let opt = Opt::from_args();

    let start = Instant::now();

    let mut counter = WordCount::new();
    for path in &opt.files {
        let file = File::open(path)
            .wrap_err_with(|| format!("failed to open file `{}`", path.display()))?;
        let tokens = count_words(file, &mut counter)
            .wrap_err_with(|| format!("failed to read file `{}`", path.display()))?;
        debug!(
            "{}: {} tokens, {} distinct words so far",
            path.display(),
            tokens,
            counter.len()
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print_top_k(&mut out, &counter, opt.k.unwrap_or(TOPK))?;
    writeln!(out, "Elapsed time is {} us", start.elapsed().as_micros())?;
    out.flush()?;

    Ok(())
}
