use console::{Style, style};

/// Colored status lines for the operator.
///
/// Informational lines go to stdout, errors to stderr. `console` drops the
/// colors automatically when the stream is not a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reporter;

impl Reporter {
    pub fn heading(self, title: &str) {
        println!();
        println!("{}", style(format!("== {title} ==")).bold());
    }

    pub fn info(self, msg: &str) {
        println!("{} {msg}", Style::new().blue().apply_to("[INFO]"));
    }

    pub fn success(self, msg: &str) {
        println!("{} {msg}", Style::new().green().apply_to("[SUCCESS]"));
    }

    pub fn warning(self, msg: &str) {
        println!("{} {msg}", Style::new().yellow().apply_to("[WARNING]"));
    }

    pub fn error(self, msg: &str) {
        eprintln!(
            "{} {msg}",
            Style::new().red().bold().for_stderr().apply_to("[ERROR]")
        );
    }

    /// Indented detail line under a previous status message.
    pub fn item(self, msg: &str) {
        println!("  {msg}");
    }
}
