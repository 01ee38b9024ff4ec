mod command;
mod logging;
mod schema;
mod util;
mod view;

fn main() -> anyhow::Result<()> {
    logging::init();
    command::run()
}
