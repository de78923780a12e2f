use {{crate_name}}::part2::process;
use miette::{miette, Context, IntoDiagnostic};
use tracing_subscriber::{filter::Directive, fmt::format::FmtSpan, EnvFilter};

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init()?;

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/input2.txt");
    let file = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("read input file {path}"))?;
    let result = process(file.trim()).context("process part 2")?;
    println!("{}", result);
    Ok(())
}

fn init() -> miette::Result<()> {
    let directive: Directive = "{{crate_name}}=info".parse().into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| miette!("install tracing subscriber: {err}"))
}
