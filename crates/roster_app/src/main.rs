mod effects;
mod logging;
mod shell;

fn main() {
    logging::initialize_from_env();

    let base_url = match shell::base_url_from_args() {
        Ok(url) => url,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if let Err(err) = shell::run(base_url) {
        eprintln!("failed to start engine: {err}");
        std::process::exit(1);
    }
}
