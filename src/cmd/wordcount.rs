use clap::Args;

use lego::api::{self, ReportSet};
use lego::config::LoadedText;
use lego::error::LegoResult;

use super::{load_input, InputArgs};
use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct WordcountArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: &WordcountArgs) -> LegoResult<()> {
    let results = match load_input(&args.input)? {
        LoadedText::Single(corpus) => ReportSet::Single(api::wordcount_report(&corpus)),
        LoadedText::Many(corpora) => ReportSet::Many(api::wordcount_reports(&corpora)),
    };

    match &args.input.save {
        Some(path) => reports::save_wordcount(path, &results),
        None => {
            reports::print_wordcount(results.items());
            Ok(())
        }
    }
}
