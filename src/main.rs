fn main() {
    if let Err(e) = spl2java::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
