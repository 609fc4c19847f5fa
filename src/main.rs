use tracing_subscriber::EnvFilter;

use rankrate::configuration::Configuration;
use rankrate::rate::preview::preview;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config_path = std::env::args()
        .nth(1)
        .expect("usage: rankrate <saves.json>");

    let configuration = Configuration::new();
    configuration.from_reader(&config_path).unwrap();

    let success_rate_manager = configuration.success_rate_manager();
    let save = success_rate_manager
        .current()
        .expect("no current success rate save in the loaded file");

    println!("current success rate save: {}", save.name());
    for row in preview(save.config()) {
        println!("rank {:>5}: {}", row.rank(), row.value());
    }

    let gold_rate_manager = configuration.gold_rate_manager();
    if let Some(save) = gold_rate_manager.current() {
        println!("current gold rate save: {}", save.name());
        for row in preview(save.config()) {
            println!("rank {:>5}: {}", row.rank(), row.value());
        }
    }
}
