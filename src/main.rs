mod cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("combinations failed: {err:#}");
        std::process::exit(1);
    }
}
