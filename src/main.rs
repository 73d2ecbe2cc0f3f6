fn main() {
    xpandr::run_main();
}
