use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use fudgeroll_lib::solver::Options;
use fudgeroll_lib::solver::DEFAULT_MAX_TERMS;

const FUDGEROLL_AUTHOR: &str = crate_authors!();
const FUDGEROLL_VERSION: &str = crate_version!();
const FUDGEROLL_ABOUT: &str = crate_description!();
const FUDGEROLL_FLAG_D_SHORT: char = 'd';
const FUDGEROLL_FLAG_D_HELP: &str = "Enable Debug logging";
const FUDGEROLL_FLAG_S_SHORT: char = 's';
const FUDGEROLL_FLAG_S_HELP: &str = "Only accept single digit dice counts, e.g. `4f` but not `12f`";
const FUDGEROLL_FLAG_M_SHORT: char = 'm';
const FUDGEROLL_FLAG_M_HELP: &str = "Maximum number of terms chained with `+` or `-`";

#[derive(Parser, Debug)]
#[command(author = FUDGEROLL_AUTHOR, version = FUDGEROLL_VERSION, about = FUDGEROLL_ABOUT)]
pub struct Args {
    #[arg(short = FUDGEROLL_FLAG_D_SHORT, long, help = FUDGEROLL_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(short = FUDGEROLL_FLAG_S_SHORT, long, help = FUDGEROLL_FLAG_S_HELP, action)]
    pub single_digit: bool,
    #[arg(short = FUDGEROLL_FLAG_M_SHORT, long, help = FUDGEROLL_FLAG_M_HELP, default_value_t = DEFAULT_MAX_TERMS)]
    pub max_terms: usize,
}

impl Args {
    pub fn solver_options(&self) -> Options {
        Options {
            single_digit_count: self.single_digit,
            max_terms: self.max_terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["fudgeroll-discord"]);
        assert!(!args.debug);
        assert_eq!(Options::default(), args.solver_options());
    }

    #[test]
    fn flags() {
        let args = Args::parse_from(["fudgeroll-discord", "-d", "-s", "--max-terms", "8"]);
        assert!(args.debug);
        assert_eq!(
            Options {
                single_digit_count: true,
                max_terms: 8,
            },
            args.solver_options()
        );
    }
}
