use cowsay_rs::cli;

fn main() {
    pretty_env_logger::init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
