use log::error;

fn main() {
    env_logger::init();

    if let Err(e) = vessel_gen::get_arg().and_then(vessel_gen::run) {
        error!("{e:#}");
        std::process::exit(-1);
    }
}
