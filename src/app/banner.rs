//! Startup banner.

use crate::config::OutputFormat;

const LOGO: &str = r"
 _  _  ____  ____  ____      ____  __   _  _  ____  ____  ____
/ )( \(  __)(  _ \(  _ \ ___(_  _)/ _\ ( \/ )(  _ \(  __)(  _ \
\ \/ / ) _)  )   / ) _ ((___) )( /    \/ \/ \ ) __/ ) _)  )   /
 \__/ (____)(__\_)(____/     (__)\_/\_/\_)(_/(__)  (____)(__\_)";

/// Column header printed above plain-text results.
pub const PLAIN_COLUMN_HEADER: &str = "Code\tLength\tMethod\t\t target";

/// Builds the banner. Plain output also gets the column header line.
pub fn banner_text(format: OutputFormat) -> String {
    let mut text = format!("{LOGO} v{}\n", env!("CARGO_PKG_VERSION"));
    if format == OutputFormat::Plain {
        text.push('\n');
        text.push_str(PLAIN_COLUMN_HEADER);
        text.push('\n');
    }
    text
}

/// Prints the banner to stderr so stdout stays machine-readable.
pub fn print_banner(format: OutputFormat) {
    eprint!("{}", banner_text(format));
}
