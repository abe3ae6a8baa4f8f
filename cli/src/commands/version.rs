//! Version command

/// Run the version command.
pub fn run() {
    println!("hub-provision {}", env!("CARGO_PKG_VERSION"));
}
