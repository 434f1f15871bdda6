use std::ffi::OsString;

use clap::{ArgAction, CommandFactory, Parser, error::ErrorKind};

use crate::app::Options;

const EXAMPLES: &str = "\
Examples:
  slice-repo --init              Set up the repository structure
  slice-repo --update            Check that the framework files are in place
  slice-repo --commit            Stage and commit all changes
  slice-repo --push              Push the current branch to origin
  slice-repo --all               Run init, update, commit and push in order
  slice-repo --commit --push     Commit, then push";

/// slice-repo command-line interface
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "slice-repo",
    version,
    about = "Manage the git repository of the slice management framework",
    long_about = None,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Initialize the git repository, directories and .gitignore
    #[arg(long)]
    pub init: bool,

    /// Check that the framework files have been copied in
    #[arg(long)]
    pub update: bool,

    /// Stage and commit all changes
    #[arg(long)]
    pub commit: bool,

    /// Push the current branch to origin
    #[arg(long)]
    pub push: bool,

    /// Run init, update, commit and push in that order
    #[arg(long)]
    pub all: bool,

    /// Increase verbosity (-v, -vv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Steps requested by the flags; `--all` enables every step.
    pub const fn options(&self) -> Options {
        if self.all {
            return Options::all();
        }
        Options {
            init: self.init,
            update: self.update,
            commit: self.commit,
            push: self.push,
        }
    }
}

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum Parsed {
    /// At least one step was requested.
    Run(Cli),
    /// `-h`/`--help` given, or no step requested; print usage and exit 0.
    Usage,
    /// `--version`; exit 0.
    Info(clap::Error),
    /// Unknown flag or stray argument; print the error and usage, exit 1.
    Invalid(clap::Error),
}

/// Classify the raw argument list (program name first). `-h`/`--help`
/// anywhere wins over every other argument, valid or not.
pub fn parse_from<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args
        .iter()
        .skip(1)
        .take_while(|a| *a != "--")
        .any(|a| a == "-h" || a == "--help")
    {
        return Parsed::Usage;
    }

    match Cli::try_parse_from(args) {
        Ok(cli) if cli.options().is_empty() => Parsed::Usage,
        Ok(cli) => Parsed::Run(cli),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Parsed::Info(e),
            _ => Parsed::Invalid(e),
        },
    }
}

/// Usage text printed for no arguments, `-h`, `--help` and invalid flags.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

pub fn print_usage() {
    let text = usage();
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Cli {
        match parse_from(std::iter::once("slice-repo").chain(args.iter().copied())) {
            Parsed::Run(cli) => cli,
            other => panic!("expected Run for {args:?}, got {other:?}"),
        }
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_usage() {
        assert!(matches!(parse_from(["slice-repo"]), Parsed::Usage));
    }

    #[test]
    fn verbosity_alone_is_usage() {
        assert!(matches!(parse_from(["slice-repo", "-vv"]), Parsed::Usage));
    }

    #[test]
    fn help_flags_short_circuit() {
        for flag in ["--help", "-h"] {
            assert!(matches!(
                parse_from(["slice-repo", "--init", flag]),
                Parsed::Usage
            ));
        }
    }

    #[test]
    fn help_wins_over_unknown_flags() {
        for args in [
            ["slice-repo", "--bogus", "--help"],
            ["slice-repo", "-h", "--bogus"],
            ["slice-repo", "stray", "-h"],
        ] {
            assert!(matches!(parse_from(args), Parsed::Usage), "{args:?}");
        }
    }

    #[test]
    fn version_is_info() {
        match parse_from(["slice-repo", "--version"]) {
            Parsed::Info(e) => assert_eq!(e.kind(), ErrorKind::DisplayVersion),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_flag_is_invalid() {
        match parse_from(["slice-repo", "--bogus"]) {
            Parsed::Invalid(e) => assert_eq!(e.kind(), ErrorKind::UnknownArgument),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse_from(["slice-repo", "--init", "stray"]),
            Parsed::Invalid(_)
        ));
    }

    #[test]
    fn flags_are_independent() {
        let opts = run(&["--push", "--init"]).options();
        assert_eq!(
            opts,
            Options {
                init: true,
                push: true,
                ..Options::default()
            }
        );
    }

    #[test]
    fn all_enables_everything() {
        assert_eq!(run(&["--all"]).options(), Options::all());
        assert_eq!(run(&["--all", "--commit", "-v"]).options(), Options::all());
    }

    #[test]
    fn usage_lists_every_flag_and_examples() {
        let text = usage();
        for flag in ["--init", "--update", "--commit", "--push", "--all", "--help"] {
            assert!(text.contains(flag), "{flag} missing from usage");
        }
        assert!(text.contains("Examples:"));
    }
}
