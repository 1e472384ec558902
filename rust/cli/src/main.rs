use std::io::{stderr, stdout};

fn main() {
    notty_cli::logging::init_logging();
    let code = notty_cli::run(std::env::args(), &mut stdout(), &mut stderr());
    std::process::exit(code);
}
