use clap::{Arg, Command};
use ensutil::{
    EXTENDED_TEXT_KEYS, STANDARD_TEXT_KEYS, check_address, namehash, validate_address,
    validate_name,
};

fn display_name(value: &str, output_format: &str, debug_mode: bool) {
    if debug_mode {
        println!("=== DEBUG MODE ===");
        println!("Raw input: {}", value);
        println!("Length: {} bytes, {} chars", value.len(), value.chars().count());
        println!("Labels: {}", value.split('.').count());
        println!("==================");
        println!();
    }

    let result = validate_name(value);
    match output_format {
        "json" => {
            if let Ok(json_output) = serde_json::to_string_pretty(&result) {
                println!("{json_output}");
            } else {
                eprintln!("Error: Failed to serialize output as JSON");
            }
        }
        "text" => {
            println!("{result:#?}");
        }
        _ => {
            eprintln!("Error: Unsupported output format '{output_format}'");
        }
    }
}

fn display_address(value: &str, output_format: &str, debug_mode: bool) {
    if debug_mode {
        println!("=== DEBUG MODE ===");
        println!("Raw input: {}", value);
        if let Ok(addr) = check_address(value) {
            println!("Bytes: [{}]", hex::encode(addr.as_slice()));
            println!("Checksummed: {}", addr.to_checksum(None));
        } else {
            println!("Failed to parse as a 20-byte address");
        }
        println!("==================");
        println!();
    }

    let result = validate_address(value);
    match output_format {
        "json" => {
            if let Ok(json_output) = serde_json::to_string_pretty(&result) {
                println!("{json_output}");
            } else {
                eprintln!("Error: Failed to serialize output as JSON");
            }
        }
        "text" => {
            println!("{result:#?}");
        }
        _ => {
            eprintln!("Error: Unsupported output format '{output_format}'");
        }
    }
}

fn display_namehash(value: &str, output_format: &str) {
    match namehash(value) {
        Some(node) => match output_format {
            "json" => {
                let json_output = serde_json::json!({
                    "name": value,
                    "namehash": format!("{node}"),
                });
                println!("{:#}", json_output);
            }
            _ => println!("{node}"),
        },
        None => {
            eprintln!("Error: {:?} does not normalize to a valid ENS name", value);
        }
    }
}

fn display_keys(extended: bool, output_format: &str) {
    let keys: Vec<&str> = if extended {
        EXTENDED_TEXT_KEYS.clone()
    } else {
        STANDARD_TEXT_KEYS.to_vec()
    };

    match output_format {
        "json" => {
            if let Ok(json_output) = serde_json::to_string_pretty(&keys) {
                println!("{json_output}");
            }
        }
        _ => {
            for key in keys {
                println!("{key}");
            }
        }
    }
}

/// app cli
pub struct Cli;
impl Cli {
    /// start the validator cli
    ///
    /// # Panics
    ///
    /// Executes the CLI application, parsing command line arguments and
    /// validating the given name or address
    pub fn execute() {
        let matches = Command::new("ensutil")
            .version("1.0")
            .about("Validates and normalizes ENS names and Ethereum addresses")
            .arg(
                Arg::new("check")
                    .short('c')
                    .long("check")
                    .value_name("CHECK")
                    .help("What to check (name, address, namehash, keys)")
                    .value_parser(["name", "address", "namehash", "keys"])
                    .required(true),
            )
            .arg(
                Arg::new("value")
                    .short('v')
                    .long("value")
                    .value_name("VALUE")
                    .help("ENS name or Ethereum address to check")
                    .default_value(""),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .value_name("FORMAT")
                    .help("Output format")
                    .value_parser(["text", "json"])
                    .default_value("text"),
            )
            .arg(
                Arg::new("extended")
                    .short('e')
                    .long("extended")
                    .help("List the extended text-record keys instead of the standard set")
                    .action(clap::ArgAction::SetTrue),
            )
            .arg(
                Arg::new("debug")
                    .short('d')
                    .long("debug")
                    .help("Show low-level debug information about the raw input")
                    .action(clap::ArgAction::SetTrue),
            )
            .get_matches();

        let check = matches.get_one::<String>("check").expect("Check is required");
        let value = matches
            .get_one::<String>("value")
            .expect("Value has default value");
        let output_format = matches
            .get_one::<String>("output")
            .expect("Output format has default value");
        let extended = matches.get_flag("extended");
        let debug_mode = matches.get_flag("debug");

        match check.as_str() {
            "name" => display_name(value, output_format, debug_mode),
            "address" => display_address(value, output_format, debug_mode),
            "namehash" => display_namehash(value, output_format),
            "keys" => display_keys(extended, output_format),
            _ => unreachable!("clap restricts the check values"),
        }
    }
}
