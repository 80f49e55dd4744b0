#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "protoform", about = "Descriptor-driven protobuf form tools")]
struct Cli {
	/// Log debug events to stderr (overridden by PROTOFORM_LOG).
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the fields of a message type and how each one renders.
	Fields {
		descriptor_set: PathBuf,
		#[arg(long)]
		message: String,
		#[arg(long)]
		json: bool,
	},
	/// Run one scripted render pass and print the widgets and resulting message.
	Render(cmd::render::Args),
}

fn main() {
	let cli = Cli::parse();
	cmd::logging::init(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> protoform::form::Result<()> {
	match command {
		Commands::Fields {
			descriptor_set,
			message,
			json,
		} => cmd::fields::run(descriptor_set, message, json),
		Commands::Render(args) => cmd::render::run(args),
	}
}
