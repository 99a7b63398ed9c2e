use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use chartkit_cli::summary::{
    NO_DATA, prepared_line, render_json, series_table, stats_table, views_table,
};
use chartkit_cli::types::ChartOutput;
use chartkit_ingest::{IngestOptions, read_csv_rows};
use chartkit_model::{DatasetSchema, ViewKind};
use chartkit_transform::{Prepared, ViewTable, describe, prepare_with_stats, select_series};

use crate::cli::{ChartArgs, DescribeArgs, OutputFormatArg};

pub fn run_views(schema: &DatasetSchema) -> Result<()> {
    let views = ViewTable::from_schema(schema);
    println!("{}", views_table(&views));
    Ok(())
}

pub fn run_chart(args: &ChartArgs, schema: &DatasetSchema) -> Result<()> {
    let prepared = load_prepared(&args.csv)?;
    let views = ViewTable::from_schema(schema);
    let kinds: Vec<ViewKind> = if args.views.is_empty() {
        ViewKind::ALL.to_vec()
    } else {
        args.views.iter().map(|&arg| ViewKind::from(arg)).collect()
    };

    let mut outputs = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let span = info_span!("view", view = %kind);
        let _guard = span.enter();
        let start = Instant::now();
        let points = select_series(&prepared.records, kind, &views)
            .with_context(|| format!("compute view {kind}"))?;
        info!(points = points.len(), "view computed");
        debug!(elapsed_ms = start.elapsed().as_millis(), "view timing");
        let title = views
            .policy(kind)
            .map(|policy| policy.title())
            .unwrap_or_else(|| kind.to_string());
        outputs.push(ChartOutput {
            view: kind,
            title,
            points,
        });
    }

    match args.format {
        OutputFormatArg::Json => {
            println!("{}", render_json(&outputs).context("serialize series")?);
        }
        OutputFormatArg::Table => {
            for output in &outputs {
                println!("{}", output.title);
                match views.policy(output.view) {
                    Some(policy) if !output.is_empty() => {
                        println!("{}", series_table(policy, &output.points));
                    }
                    _ => println!("{NO_DATA}"),
                }
                println!();
            }
        }
    }
    Ok(())
}

pub fn run_describe(args: &DescribeArgs) -> Result<()> {
    let prepared = load_prepared(&args.csv)?;
    println!("{}", prepared_line(&prepared.stats));
    let stats = describe(&prepared.records, &prepared.columns);
    if stats.is_empty() {
        println!("{NO_DATA}");
    } else {
        println!("{}", stats_table(&stats));
    }
    Ok(())
}

fn load_prepared(path: &Path) -> Result<Prepared> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_csv_rows(path, &IngestOptions::default())
        .with_context(|| format!("load {}", path.display()))?;
    let prepared = prepare_with_stats(&table)
        .with_context(|| format!("prepare records from {}", path.display()))?;
    info!(
        raw_rows = prepared.stats.raw_rows,
        kept_rows = prepared.stats.kept_rows,
        numeric_cells = prepared.stats.numeric_cells,
        "records prepared"
    );
    debug!(elapsed_ms = start.elapsed().as_millis(), "load timing");
    Ok(prepared)
}
