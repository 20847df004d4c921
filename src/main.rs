use skyburst::simulation::FireworksConfig;
use skyburst::window::FireworksShow;

fn main() {
    let config = FireworksConfig {
        debug: true,
        ..Default::default()
    };

    if let Err(e) = FireworksShow::with_config(config).run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
