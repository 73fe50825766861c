use colored::Colorize;
use fourier_plotter::config::{load_config, save_config, AppConfig};
use fourier_plotter::visualization::window::PlotterWindow;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let config = match args.get(1).map(String::as_str) {
        None => AppConfig::default(),
        Some("--write-default-config") => {
            let Some(path) = args.get(2) else {
                eprintln!("{}", "Please specify a path to write the config to".red());
                std::process::exit(2);
            };
            match save_config(&AppConfig::default(), path) {
                Ok(()) => println!("{}", format!("Wrote default config to {}", path).green()),
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    std::process::exit(1);
                }
            }
            return;
        }
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", format!("Could not load {}: {}", path, e).red());
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = PlotterWindow::run(config) {
        eprintln!("{}", format!("Window error: {}", e).red());
        std::process::exit(1);
    }
}
