use clap::arg;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

// --link and --content are checked by the handler rather than clap so that a
// missing one exits with status 1 and a usage line.
pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("wgrep")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("wgrep")
        .about(
            "Follow links from a root page and print the lines of each page that match a \
            pattern.",
        )
        .styles(CLAP_STYLING)
        .arg(
            arg!(-l --"link" <LINK>)
                .required(false)
                .help("The page to start from"),
        )
        .arg(
            arg!(-u --"urls" <REGEX>)
                .required(false)
                .help("Only follow links whose absolute URL matches this pattern")
                .default_value(".*"),
        )
        .arg(
            arg!(-c --"content" <REGEX>)
                .required(false)
                .help("Pattern to look for in each page's text (case-insensitive)"),
        )
        .arg(
            arg!(-d --"depth" <DEPTH>)
                .required(false)
                .help("How many links away from the root page to search")
                .value_parser(clap::value_parser!(usize))
                .default_value("2"),
        )
        .arg(
            arg!(-n --"negate")
                .required(false)
                .help("Report pages that do NOT match the content pattern")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(-s --"stream")
                .required(false)
                .help("Print each result as soon as it is found instead of at the end")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Output format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            arg!(-v --"verbose")
                .required(false)
                .help("Log progress to stderr (repeat for more detail)")
                .action(clap::ArgAction::Count),
        )
        .arg(arg!(-q --"quiet" "Suppress the progress spinner and summary").required(false))
}
