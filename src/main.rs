#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "json2avro", about = "Convert JSON Schema to Avro Schema")]
struct Cli {
    /// Path to the JSON Schema input
    #[arg(value_name = "JSONSCHEMA")]
    input: String,

    /// Path to the Avro schema output file
    #[arg(value_name = "AVRO")]
    output: String,
}

#[cfg(feature = "cli")]
fn run(input: &str, output: &str) -> Result<(), String> {
    let content = std::fs::read_to_string(input)
        .map_err(|e| format!("Failed to read schema file: {e}"))?;

    let json_schema: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| format!("Invalid JSON schema: {e}"))?;

    let avro = json2avro::convert(&json_schema).map_err(|e| e.to_string())?;

    let rendered = serde_json::to_string_pretty(&avro)
        .map_err(|e| format!("Failed to render Avro schema: {e}"))?;
    std::fs::write(output, rendered).map_err(|e| format!("Failed to write {output}: {e}"))?;

    Ok(())
}

#[cfg(feature = "cli")]
fn main() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli.input, &cli.output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}
