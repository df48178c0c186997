fn main() {
    if let Err(e) = valdr_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
