use anyhow::{Context, Result};
use console::style;
use femira::Options;
use femira_source::Source;
use std::{env, fs, io, process};

/// Compiles and runs the script, adding the source location to located errors.
fn run(path: &str, content: &str, options: &Options) -> Result<()> {
    let stdout = io::stdout();
    let source = Source::new(path, content);
    femira::interpret(source.content, options, stdout.lock()).map_err(|err| {
        let location = err.offset().map(|offset| source.location(offset));
        let err = anyhow::Error::new(err);
        match location {
            Some(location) => err.context(format!("{}:{}", source.name, location)),
            None => err.context(source.name.to_string()),
        }
    })?;
    Ok(())
}

fn main() {
    let mut args = env::args().skip(1);

    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("{} usage: femira <script> [yes]", style("error:").red().bold());
            process::exit(1);
        }
    };
    let options = Options::from_trace_arg(args.next().as_deref());

    let result = fs::read_to_string(&path)
        .with_context(|| format!("Cannot run the script {}", path))
        .and_then(|content| run(&path, &content, &options));

    if let Err(err) = result {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        process::exit(1);
    }
}
