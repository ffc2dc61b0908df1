use std::{
	io::Write,
	path::Path,
	process,
};

use structopt::{
	clap::ErrorKind,
	StructOpt,
};
use pg_model_gen::{
	error::{error_chain, OUTPUT_EXIT_CODE, USAGE_EXIT_CODE},
	logging::init_logging,
	usage,
	Opt,
};

fn main() {
	let args : Vec<_> = std::env::args_os().collect();
	let program = args.first()
		.and_then(|arg0| Path::new(arg0).file_name())
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_else(|| String::from("pg_model_gen"));

	let opt = match Opt::from_iter_safe(&args) {
		Ok(opt) => opt,
		Err(e) if e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed => e.exit(),
		Err(e) => {
			if e.kind != ErrorKind::MissingRequiredArgument {
				eprintln!("{}\n", e.message);
			}
			eprint!("{}", usage(&program));
			process::exit(USAGE_EXIT_CODE);
		},
	};

	init_logging(opt.verbose);

	match opt.run() {
		Ok(source) => {
			let mut stdout = std::io::stdout().lock();
			if let Err(e) = stdout.write_all(source.as_bytes()).and_then(|_| stdout.flush()) {
				eprintln!("error: failed to write output: {}", e);
				process::exit(OUTPUT_EXIT_CODE);
			}
		},
		Err(e) => {
			eprintln!("error: {}", error_chain(&e));
			process::exit(e.exit_code());
		},
	}
}
