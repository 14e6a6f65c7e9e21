//! Info command implementation

use serde::Serialize;

use crate::cli::args::{InfoArgs, OutputFormat};
use crate::cli::logging::{log, LogLevel};
use crate::schema::{BaselineKind, Domain};
use crate::store::{DataSource, Dataset};

#[derive(Serialize)]
struct DatasetInfo {
    source: String,
    families: Vec<FamilyInfo>,
}

#[derive(Serialize)]
struct FamilyInfo {
    id: String,
    records: usize,
    tags: Vec<String>,
    has_base: bool,
    has_instruct: bool,
    task_domains: Vec<Domain>,
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let loaded = Dataset::load_or_fallback(&args.data);
    let info = dataset_info(&loaded.dataset, &loaded.source);

    match args.format {
        OutputFormat::Text | OutputFormat::Markdown => {
            if let DataSource::Fallback { error } = &loaded.source {
                log(level, LogLevel::Normal, &format!("Warning: {error}"));
            }
            println!("Source: {}", info.source);
            println!("Families: {}", info.families.len());
            for family in &info.families {
                println!();
                println!("  {} ({} records)", family.id, family.records);
                println!("    Tags: {}", family.tags.join(", "));
                println!(
                    "    Baselines: base={}, instruct={}",
                    family.has_base, family.has_instruct
                );
                if !family.task_domains.is_empty() {
                    let domains: Vec<&str> =
                        family.task_domains.iter().map(|d| d.as_str()).collect();
                    println!("    Task details: {}", domains.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&info)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn dataset_info(dataset: &Dataset, source: &DataSource) -> DatasetInfo {
    let source = match source {
        DataSource::File(path) => path.display().to_string(),
        DataSource::Fallback { .. } => "generated placeholder".to_string(),
    };

    let families = dataset
        .family_ids()
        .map(String::from)
        .collect::<Vec<_>>()
        .into_iter()
        .map(|id| {
            let records = dataset.family(&id);
            let mut tags: Vec<String> = records
                .iter()
                .filter(|r| !r.is_baseline())
                .flat_map(|r| r.tags.iter().cloned())
                .collect();
            tags.sort();
            tags.dedup();

            FamilyInfo {
                records: records.len(),
                tags,
                has_base: records.iter().any(|r| r.baseline == Some(BaselineKind::Base)),
                has_instruct: records
                    .iter()
                    .any(|r| r.baseline == Some(BaselineKind::Instruct)),
                task_domains: Domain::ALL
                    .into_iter()
                    .filter(|d| records.iter().any(|r| !r.tasks_for(*d).is_empty()))
                    .collect(),
                id,
            }
        })
        .collect();

    DatasetInfo { source, families }
}
