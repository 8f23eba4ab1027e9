use crate::reports;
use clap::Args;
use fred_navigator::charts::ChartTab;
use fred_navigator::error::NavResult;
use fred_navigator::navigator::Navigator;
use fred_navigator::params::{Selection, Topic};

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[arg(short, long, value_enum, default_value_t = Topic::Transmission)]
    pub topic: Topic,

    #[arg(long)]
    pub r0: Option<f64>,

    /// Immunization rate as a fraction (immunization topic only)
    #[arg(short, long)]
    pub immunization: Option<f64>,

    #[arg(long, value_enum, default_value_t = ChartTab::Seir)]
    pub tab: ChartTab,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ChartArgs, navigator: &Navigator) -> NavResult<()> {
    let mut selection = Selection::default_for(args.topic);
    if let Some(r0) = args.r0 {
        selection = selection.with_r0(r0)?;
    }
    if let Some(rate) = args.immunization {
        selection = selection.with_immunization(rate)?;
    }

    let chart = navigator.chart(&selection, args.tab)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        reports::print_chart_summary(&selection, &chart);
    }
    Ok(())
}
