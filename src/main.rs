fn main() {
    if let Err(e) = txp::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
