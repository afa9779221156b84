fn main() {
    if let Err(err) = ecomap::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
