mod app;
mod effects;
mod logging;
mod render;

fn main() {
    logging::initialize(logging::LogDestination::File);
    app::run();
}
