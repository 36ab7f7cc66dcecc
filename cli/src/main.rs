use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use litetable_core::{StoreConfig, Value};
use litetable_sqlite::Store;

#[derive(Debug, Parser)]
#[command(name = "litetable")]
#[command(about = "Validated CRUD over a local SQLite database file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Initialize a database from a YAML configuration.
    Init(InitArgs),
    /// List the tables in a database.
    Tables(TablesArgs),
    /// Print a table's contents.
    Dump(DumpArgs),
    /// Insert one row into a table.
    Insert(InsertArgs),
    /// Delete rows by primary-key value.
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct InitArgs {
    /// Path to the YAML configuration (database path, tables, seeds).
    #[arg(long)]
    config: PathBuf,
}

#[derive(Debug, Args)]
struct TablesArgs {
    /// Database file path.
    #[arg(long)]
    db: PathBuf,
}

#[derive(Debug, Args)]
struct DumpArgs {
    /// Database file path.
    #[arg(long)]
    db: PathBuf,
    /// Table to print.
    table: String,
}

#[derive(Debug, Args)]
struct InsertArgs {
    /// Database file path.
    #[arg(long)]
    db: PathBuf,
    /// Table to insert into.
    table: String,
    /// Row values in column order; each is read as integer, real, or text.
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Database file path.
    #[arg(long)]
    db: PathBuf,
    /// Table to delete from.
    table: String,
    /// Primary-key values of the rows to delete.
    #[arg(required = true)]
    keys: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Init(args) => run_init(args),
        Command::Tables(args) => run_tables(args),
        Command::Dump(args) => run_dump(args),
        Command::Insert(args) => run_insert(args),
        Command::Delete(args) => run_delete(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_init(args: InitArgs) -> Result<(), String> {
    let config = StoreConfig::load(&args.config)
        .map_err(|e| format!("Failed to load config '{}': {e}", args.config.display()))?;
    let mut store =
        Store::initialize(&config).map_err(|e| format!("Initialization failed: {e}"))?;

    let tables = store.tables().map_err(|e| e.to_string())?;
    println!(
        "Initialized '{}' with {} table(s).",
        config.database_path.display(),
        tables.len()
    );
    for table in &tables {
        let rs = store.select_all(table).map_err(|e| e.to_string())?;
        println!("{}", rs.render_text());
    }
    Ok(())
}

fn run_tables(args: TablesArgs) -> Result<(), String> {
    let mut store = Store::attach(&args.db).map_err(|e| e.to_string())?;
    for table in store.tables().map_err(|e| e.to_string())? {
        println!("{table}");
    }
    Ok(())
}

fn run_dump(args: DumpArgs) -> Result<(), String> {
    let mut store = Store::attach(&args.db).map_err(|e| e.to_string())?;
    let rs = store.select_all(&args.table).map_err(|e| e.to_string())?;
    println!("{}", rs.render_text());
    Ok(())
}

fn run_insert(args: InsertArgs) -> Result<(), String> {
    let mut store = Store::attach(&args.db).map_err(|e| e.to_string())?;
    let values = parse_values(&args.values);
    let rs = store
        .insert_row(&args.table, &values)
        .map_err(|e| format!("Insert failed: {e}"))?;
    println!("Inserted 1 row into '{}' ({} total).", args.table, rs.len());
    Ok(())
}

fn run_delete(args: DeleteArgs) -> Result<(), String> {
    let mut store = Store::attach(&args.db).map_err(|e| e.to_string())?;
    let keys = parse_values(&args.keys);
    let deleted = keys.len();
    let rs = store
        .delete_rows(&args.table, &keys)
        .map_err(|e| format!("Delete failed: {e}"))?;
    println!(
        "Deleted {deleted} row(s) from '{}' ({} remaining).",
        args.table,
        rs.len()
    );
    Ok(())
}

fn parse_values(raw: &[String]) -> Vec<Value> {
    raw.iter().map(|text| Value::infer(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::parse_values;
    use litetable_core::Value;

    #[test]
    fn test_parse_values_infers_types() {
        let parsed = parse_values(&["7".to_string(), "2.5".to_string(), "bob".to_string()]);
        assert_eq!(
            parsed,
            vec![Value::Integer(7), Value::Real(2.5), Value::Text("bob".into())]
        );
    }
}
