use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = tmpgen::cli::parse();
    app::run(args)
}
