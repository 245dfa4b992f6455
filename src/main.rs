fn main() {
    if let Err(e) = progresslog_lib::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
