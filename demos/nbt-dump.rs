use std::process::ExitCode;

use pocketnbt::{load_path, Value};

//
// Dumps the tag tree of an uncompressed save file. Bedrock level.dat and
// entities.dat headers are handled; gzipped Java files need inflating first.
//
// Usage: nbt-dump <file>
//

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: nbt-dump <file>");
        return ExitCode::FAILURE;
    };

    match load_path(&path) {
        Ok(root) => {
            print_value(&root.name, &root.value, 0);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", path, e);
            ExitCode::FAILURE
        }
    }
}

fn print_value(name: &str, value: &Value, indent: usize) {
    match value {
        Value::Compound(fields) => {
            println!("{:indent$}{:?}: Compound", "", name, indent = indent);
            for (member, v) in fields {
                print_value(member, v, indent + 4);
            }
        }
        Value::List(element, items) => {
            println!(
                "{:indent$}{:?}: List of {:?} ({})",
                "",
                name,
                element,
                items.len(),
                indent = indent
            );
            for v in items {
                print_value("", v, indent + 4);
            }
        }
        _ => println!("{:indent$}{:?}: {:?}", "", name, value, indent = indent),
    }
}
