use crate::reports;
use clap::Args;
use fred_navigator::error::NavResult;
use fred_navigator::navigator::Navigator;
use fred_navigator::report;

#[derive(Args, Debug, Clone)]
pub struct SeriesArgs {
    /// Key exactly as written in RESULTS/KEY, e.g. R0=1.5
    #[arg(short, long)]
    pub key: String,

    /// Report variable code (S, E, I, R, C, Cs, AR, ARs, P)
    #[arg(short, long)]
    pub variable: String,

    #[arg(short, long)]
    pub label: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SeriesArgs, navigator: &Navigator) -> NavResult<()> {
    let job = navigator.index().lookup(&args.key)?;
    let mut series = report::load(navigator.root(), job.as_str(), &args.variable)?;
    if let Some(label) = args.label {
        series = series.with_label(label);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    } else {
        println!("\n📈 {} ({}, job {})", series.label, args.key, job);
        reports::print_points(&series);
    }
    Ok(())
}
