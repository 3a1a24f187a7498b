fn main() {
    strata::cli::run();
}
