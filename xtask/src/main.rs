//! Developer tasks (schema generation, schema drift checks, report conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(incguard_types::IncguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(incguard_settings::IncguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "incguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "incguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Fail when the committed schemas differ from what the types generate.
fn check_schemas(dir: &Path) -> anyhow::Result<()> {
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    for name in &missing {
        eprintln!("missing schema: {name}");
    }
    for name in &mismatched {
        eprintln!("schema out of date: {name}");
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Validate an emitted report file against the generated report schema.
fn conform(report_path: &Path) -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("schema to json")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {e}"))?;

    let text = fs::read_to_string(report_path)
        .with_context(|| format!("Failed to read {}", report_path.display()))?;
    let report: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", report_path.display()))?;

    if report.get("schema").and_then(|v| v.as_str()) != Some(incguard_types::SCHEMA_REPORT_V1) {
        bail!(
            "{} is not an {} report",
            report_path.display(),
            incguard_types::SCHEMA_REPORT_V1
        );
    }

    let errors: Vec<String> = validator
        .iter_errors(&report)
        .map(|e| e.to_string())
        .collect();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("{} schema violations", errors.len());
    }

    println!("{} conforms to {}", report_path.display(), incguard_types::SCHEMA_REPORT_V1);
    Ok(())
}

fn explain_coverage() -> anyhow::Result<()> {
    use incguard_types::explain;

    let mut errors = Vec::new();
    for id in explain::all_check_ids().iter().chain(explain::all_codes()) {
        match explain::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() || exp.description.is_empty() || exp.remediation.is_empty()
                {
                    errors.push(format!("'{id}' has an incomplete explanation"));
                }
            }
            None => errors.push(format!("'{id}' has no explanation")),
        }
    }

    if errors.is_empty() {
        println!(
            "{} check IDs and {} codes have explanations",
            explain::all_check_ids().len(),
            explain::all_codes().len()
        );
        return Ok(());
    }

    for error in &errors {
        eprintln!("  - {error}");
    }
    bail!("Explain coverage failed with {} errors", errors.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help               Show this message");
    eprintln!("  emit-schemas [dir] Generate JSON schemas from Rust types (default: schemas/)");
    eprintln!("  check-schemas [dir] Check that committed schemas match generated output");
    eprintln!("  conform <report>   Validate an emitted report against the report schema");
    eprintln!("  explain-coverage   Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(String::as_str).unwrap_or("help");
    let dir_arg = || args.get(2).map(PathBuf::from).unwrap_or_else(schemas_dir);

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(&dir_arg()),
        "check-schemas" => check_schemas(&dir_arg()),
        "conform" => match args.get(2) {
            Some(path) => conform(Path::new(path)),
            None => bail!("conform requires a report path"),
        },
        "explain-coverage" => explain_coverage(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
