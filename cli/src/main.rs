mod cli;
mod telemetry;

fn main() {
    telemetry::init_telemetry();
    cli::Cli::execute();
}
