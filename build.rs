/// Expose the compilation target triple as an environment variable at build time.
///
/// The `version` subcommand reports it via `constants::TARGET`.
fn main() {
    println!(
        "cargo:rustc-env=TARGET={}",
        std::env::var("TARGET").unwrap()
    );
}
