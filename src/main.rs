use swiftstatus::{config, logging, runner};

fn main() {
    logging::init_logging();

    let config = config::load_config();

    if let Err(err) = runner::run(&config) {
        tracing::error!(error = %err, "status loop stopped");
        std::process::exit(1);
    }
}
