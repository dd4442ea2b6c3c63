use std::{env, process};

use expense_core::{
    cli::{commands, output},
    init,
    ledger::Category,
    storage::JsonStore,
    store::Store,
};

fn main() {
    init();

    if let Err(err) = run() {
        output::error(err.to_string());
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = match args.first() {
        Some(command) => command.as_str(),
        None => {
            print_usage();
            process::exit(1);
        }
    };
    let rest = &args[1..];

    let backend = JsonStore::new(None)?;
    let mut store = Store::open(Box::new(backend))?;

    match command {
        "add" => commands::add(&mut store, rest)?,
        "list" => commands::list(&store, rest)?,
        "summary" => commands::summary(&store),
        "breakdown" => commands::breakdown(&store),
        "export" => commands::export(&store, rest)?,
        "import" => commands::import(&mut store, rest)?,
        "delete" => commands::delete(&mut store, rest)?,
        "report" => commands::report(&store, rest)?,
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    let known = Category::KNOWN;
    let categories: Vec<&str> = known.iter().map(|c| c.keyword()).collect();
    eprintln!(
        "Usage: expense_core_cli <command>\n\
         Commands:\n  \
         add <title> <amount> <income|expense> <category> [YYYY-MM-DD] [description]\n  \
         list [all|income|expense] [all|<category>]\n  \
         summary\n  \
         breakdown\n  \
         export [file.json]\n  \
         import <file.json>\n  \
         delete <id>\n  \
         report <YYYY-MM>\n\
         Categories: {}",
        categories.join(", ")
    );
}
