use crate::reports;
use clap::Args;
use fred_navigator::error::NavResult;
use fred_navigator::navigator::Navigator;

#[derive(Args, Debug, Clone)]
pub struct KeysArgs {
    /// Only keys containing this text
    #[arg(short, long)]
    pub filter: Option<String>,
}

pub fn run(args: KeysArgs, navigator: &Navigator) -> NavResult<()> {
    let entries: Vec<_> = navigator
        .index()
        .iter()
        .filter(|(key, _)| match &args.filter {
            Some(f) => key.as_str().contains(f.as_str()),
            None => true,
        })
        .collect();

    if entries.is_empty() {
        println!("No keys found matching criteria.");
        return Ok(());
    }

    reports::print_key_table(&entries);
    Ok(())
}
