fn main() {
    seaport_decoder::start(std::env::args());
}
