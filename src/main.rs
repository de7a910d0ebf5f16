fn main() {
    if let Err(e) = cyanlib::run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
