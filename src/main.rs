fn main() {
    msforge::app::cli::run();
}
