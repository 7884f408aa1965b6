use intake_core::cli::{output, run_cli};

fn main() {
    if let Err(err) = run_cli() {
        output::error(err.to_string());
        std::process::exit(1);
    }
}
