use crate::cmd::{App, Cmd};
use anyhow::Result;
use clap::Parser;

mod cmd;
mod logs;
mod ui;

fn main() -> Result<()> {
	let app: App = App::parse();
	app.run()
}
