use wgrep::commands::command_argument_builder;
use wgrep::handlers::{handle_search, init_tracing, print_error, search_options_from_matches};

#[tokio::main]
async fn main() {
    let mut cmd = command_argument_builder();
    let matches = cmd.clone().get_matches();
    let quiet = matches.get_flag("quiet");

    init_tracing(matches.get_count("verbose"));

    let options = match search_options_from_matches(&matches) {
        Ok(options) => options,
        Err(e) => {
            print_error(&e);
            eprintln!("\n{}", cmd.render_usage());
            std::process::exit(1);
        }
    };

    if let Err(e) = handle_search(options, quiet).await {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
