use clap::Args;

use lego::api::{self, ReportSet, ZipfOptions};
use lego::config::LoadedText;
use lego::error::LegoResult;

use super::{load_input, InputArgs};
use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct ZipfArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Include the predicted and actual proportions of each rank (must be
    /// saved to a file)
    #[arg(long, requires = "save")]
    pub proportions: bool,

    /// Exclude hapax, dis, tris, and tetrakis legomena from the fit
    #[arg(long)]
    pub exclude_legomena: bool,

    /// The Zipf exponent
    #[arg(long, default_value_t = 1.0)]
    pub zipf_const: f64,
}

pub fn run(args: &ZipfArgs) -> LegoResult<()> {
    let opts = ZipfOptions {
        s: args.zipf_const,
        exclude_legomena: args.exclude_legomena,
        proportions: args.proportions,
    };

    let results = match load_input(&args.input)? {
        LoadedText::Single(corpus) => ReportSet::Single(api::zipf_report(&corpus, &opts)?),
        LoadedText::Many(corpora) => ReportSet::Many(api::zipf_reports(&corpora, &opts)?),
    };

    match &args.input.save {
        Some(path) => reports::save_zipf(path, &results),
        None => {
            reports::print_zipf(results.items());
            Ok(())
        }
    }
}
