use std::path::Path;
use std::sync::Arc;

use wordgauge::Segmenter;
use wordgauge::config::TokenizerConfig;
use wordgauge::data::{load_corpus, load_gold_records, load_lexical_records};
use wordgauge::errors::WGResult;
use wordgauge::metrics::{
    DEFAULT_RENYI_POWER, LexicalRecord, cognitive_scores, entropy_score,
    fertility, segmentation_diff,
};
use wordgauge::scoring::{GoldRecord, segmentation_coverage};

use crate::logging::LogArgs;
use crate::stats::pearson;

/// Args for the eval command.
#[derive(clap::Args, Debug)]
pub struct EvalArgs {
    /// A text file listing tokenizer config paths, one per line.
    #[arg(long, default_value = "tokenizers.txt")]
    tokenizers: String,

    /// Corpus file for the static metrics.
    #[arg(long)]
    corpus: String,

    /// Combined gold-standard morphology CSV.
    #[arg(long)]
    gold: String,

    /// Lexical-decision measurements CSV.
    #[arg(long)]
    lexical: String,

    /// Log segmentation diffs against the first tokenizer.
    #[arg(long)]
    compare: bool,

    /// Output metrics table path.
    #[arg(long, default_value = "output.csv")]
    output: String,

    #[clap(flatten)]
    pub logging: LogArgs,
}

/// One evaluated tokenizer: its report name, metric columns, and the
/// segmenter itself (retained for the comparison pass).
struct EvalRow {
    name: String,
    columns: Vec<(String, String)>,
    segmenter: Arc<dyn Segmenter>,
}

impl EvalArgs {
    /// Run the eval command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let paths: Vec<String> = std::fs::read_to_string(&self.tokenizers)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let corpus = load_corpus(&self.corpus)?;
        let gold = load_gold_records(&self.gold)?;
        let lexical = load_lexical_records(&self.lexical)?;

        let mut rows: Vec<EvalRow> = Vec::new();
        for path in &paths {
            match evaluate_config(path, &corpus, &gold, &lexical) {
                Ok(row) => rows.push(row),
                Err(err) => {
                    log::error!("evaluation failed for {path}: {err}");
                }
            }
        }

        if self.compare {
            self.log_segmentation_diffs(&rows, &corpus);
        }

        self.write_report(&rows)?;
        log::info!("wrote {} tokenizer rows to {}", rows.len(), self.output);

        Ok(())
    }

    /// Compare every tokenizer's segmentations against the first one's.
    fn log_segmentation_diffs(
        &self,
        rows: &[EvalRow],
        corpus: &[String],
    ) {
        let Some((reference, others)) = rows.split_first() else {
            return;
        };

        for row in others {
            match segmentation_diff(
                reference.segmenter.as_ref(),
                row.segmenter.as_ref(),
                corpus,
            ) {
                Ok(diff) => log::info!(
                    "segmentation diff {} vs {}: {diff:.4}",
                    reference.name,
                    row.name
                ),
                Err(err) => log::error!(
                    "segmentation diff failed for {}: {err}",
                    row.name
                ),
            }
        }
    }

    /// Write the metrics table; the header is taken from the first row.
    fn write_report(
        &self,
        rows: &[EvalRow],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = csv::Writer::from_path(&self.output)?;

        let header: Vec<String> = match rows.first() {
            Some(row) => {
                row.columns.iter().map(|(key, _)| key.clone()).collect()
            }
            None => Vec::new(),
        };

        let mut record = vec!["tokenizer".to_string()];
        record.extend(header.iter().cloned());
        writer.write_record(&record)?;

        for row in rows {
            let mut record = vec![row.name.clone()];
            for key in &header {
                let value = row
                    .columns
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.clone())
                    .unwrap_or_default();
                record.push(value);
            }
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// The tokenizer's report name: its config file stem.
fn report_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

fn evaluate_config(
    path: &str,
    corpus: &[String],
    gold: &[GoldRecord],
    lexical: &[LexicalRecord],
) -> WGResult<EvalRow> {
    let config = TokenizerConfig::from_path(path)?;
    let segmenter = config.build_segmenter()?;

    let fixed = |value: f64| format!("{value:.4}");
    let mut columns: Vec<(String, String)> =
        vec![("type".to_string(), config.model.kind.clone())];

    columns.push((
        "fertility".to_string(),
        fixed(fertility(segmenter.as_ref(), corpus)?),
    ));
    columns.push((
        "entropy_score".to_string(),
        fixed(entropy_score(
            segmenter.as_ref(),
            corpus,
            DEFAULT_RENYI_POWER,
        )?),
    ));

    let coverage = segmentation_coverage(segmenter.as_ref(), gold)?;
    for origin in &coverage.per_origin {
        columns.push((format!("{}_f1", origin.origin), fixed(origin.f1)));
    }
    columns.push(("avg_f1".to_string(), fixed(coverage.avg_f1)));

    let cognitive = cognitive_scores(segmenter.as_ref(), lexical, pearson)?;
    for category in &cognitive.per_category {
        columns.push((
            format!("{}_chunkability_rts", category.category),
            fixed(category.rt_correlation),
        ));
        columns.push((
            format!("{}_chunkability_accs", category.category),
            fixed(category.accuracy_correlation),
        ));
    }
    columns.push(("cog_score".to_string(), fixed(cognitive.score)));

    Ok(EvalRow {
        name: report_name(path),
        columns,
        segmenter,
    })
}
