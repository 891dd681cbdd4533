use clap::Parser;
use lj2hugo::application::{ConvertOptions, ConvertService};
use lj2hugo::cli::{format_conversion, Cli};
use lj2hugo::error::Lj2HugoError;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), Lj2HugoError> {
    let options = ConvertOptions {
        include_comments: !cli.skip_comments,
        show_spam: cli.spam,
        show_banned: cli.banned,
        show_deleted: cli.deleted,
    };
    let service = ConvertService::new(options);

    // Paths convert independently and in order; the first failure
    // aborts the run.
    for path in &cli.paths {
        let out_path = service.execute(path)?;
        println!("{}", format_conversion(path, &out_path));
    }

    Ok(())
}
