fn main() {
    if let Err(err) = java_locator::run() {
        eprintln!("java-locator: {err}");
        std::process::exit(1);
    }
}
