use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lexsense::similarity::{concept, dataset, sense, AnnotatedPair, GlossTable, RatedPair};
use lexsense::wsd::{self, LeskCase};
use lexsense::{
    summarize_batch, Granularity, Lexicon, SenseEmbeddings, SenseInventory, Summarizer,
    SummaryConfig, Taxonomy,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize documents by lexical cohesion
    Summarize {
        /// Sense feature resource (`id;lemma;feature_weight...` lines)
        #[arg(short, long)]
        resource: PathBuf,

        /// Documents to summarize
        #[arg(required = true)]
        documents: Vec<PathBuf>,

        /// JSON summary configuration; flags override its fields
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fraction of units to keep, in (0, 1]
        #[arg(short, long)]
        percentage: Option<f64>,

        /// `paragraph` or `sentence`
        #[arg(short, long)]
        granularity: Option<Granularity>,

        /// Stopword language code
        #[arg(short, long)]
        language: Option<String>,

        /// Additional stopword (repeatable)
        #[arg(long = "stopword")]
        stopwords: Vec<String>,

        /// Write each summary to this directory instead of stdout
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Score a rated word-pair dataset with taxonomy similarity measures
    Concept {
        /// Taxonomy JSON
        #[arg(short, long)]
        taxonomy: PathBuf,

        /// CSV with `Word 1`, `Word 2` and `Human` columns
        #[arg(short, long)]
        dataset: PathBuf,

        /// Write the scored rows as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Pick best sense pairs by embedded-vector cosine and print their glosses
    Senses {
        /// Embedded vectors (`id__lemma<TAB>v1<TAB>v2...`)
        #[arg(long)]
        vectors: PathBuf,

        /// Sense inventory (`#word` blocks of sense ids)
        #[arg(short, long)]
        inventory: PathBuf,

        /// CSV with `Word1`, `Word2`, `Val1` and `Val2` columns
        #[arg(short, long)]
        dataset: PathBuf,

        /// Glosses (`id<TAB>gloss`); glosses are left empty without it
        #[arg(short, long)]
        glosses: Option<PathBuf>,

        /// Write `Term: ...; Gloss: ...` lines here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fraction of judgement lines starting with `1`
    Accuracy {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Disambiguate the `**word**` of each sentence with simplified Lesk
    Lesk {
        /// Taxonomy JSON
        #[arg(short, long)]
        taxonomy: PathBuf,

        /// One marked sentence per line
        sentences: PathBuf,
    },

    /// Measure Lesk accuracy on `sentence<TAB>word<TAB>gold` cases
    LeskEval {
        /// Taxonomy JSON
        #[arg(short, long)]
        taxonomy: PathBuf,

        cases: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lexsense=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(
    path: Option<&Path>,
    percentage: Option<f64>,
    granularity: Option<Granularity>,
    language: Option<String>,
    stopwords: Vec<String>,
) -> anyhow::Result<SummaryConfig> {
    let mut config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SummaryConfig::from_json(&json)?
        }
        None => SummaryConfig::new(),
    };
    if let Some(percentage) = percentage {
        config = config.with_percentage(percentage);
    }
    if let Some(granularity) = granularity {
        config = config.with_granularity(granularity);
    }
    if let Some(language) = language {
        config = config.with_language(language);
    }
    config.extra_stopwords.extend(stopwords);
    config.validate()?;
    Ok(config)
}

fn print_correlation(name: &str, correlation: &lexsense::similarity::Correlation) {
    let show = |v: Option<f64>| v.map_or_else(|| "undefined".to_string(), |v| format!("{v:.4}"));
    println!(
        "{name}: pearson {} spearman {}",
        show(correlation.pearson),
        show(correlation.spearman)
    );
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    match args.command {
        Command::Summarize {
            resource,
            documents,
            config,
            percentage,
            granularity,
            language,
            stopwords,
            output_dir,
        } => {
            let config = load_config(config.as_deref(), percentage, granularity, language, stopwords)?;
            let lexicon = Lexicon::from_path(&resource)?;
            let mut summarizer = Summarizer::new(lexicon);

            let outcomes = summarize_batch(&mut summarizer, &documents, &config, output_dir.as_deref());
            let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
            if output_dir.is_none() {
                for outcome in &outcomes {
                    if let Ok(summary) = &outcome.result {
                        if documents.len() > 1 {
                            println!("==> {} <==", outcome.document.display());
                        }
                        println!("{summary}");
                    }
                }
            }
            if failed > 0 {
                bail!("{failed} of {} documents failed", outcomes.len());
            }
        }

        Command::Concept {
            taxonomy,
            dataset: dataset_path,
            output,
        } => {
            let taxonomy = Taxonomy::from_path(&taxonomy)?;
            let pairs: Vec<RatedPair> = dataset::read_records(&dataset_path)?;
            let report = concept::score_dataset(&taxonomy, &pairs)?;

            println!("max depth: {}", report.max_depth);
            print_correlation("wu-palmer", &report.wu_palmer);
            print_correlation("shortest path", &report.shortest_path);
            print_correlation("leacock-chodorow", &report.leacock_chodorow);
            if let Some(output) = output {
                report.write_csv(&output)?;
                tracing::info!(path = %output.display(), rows = report.rows.len(), "wrote scores");
            }
        }

        Command::Senses {
            vectors,
            inventory,
            dataset: dataset_path,
            glosses,
            output,
        } => {
            let embeddings = SenseEmbeddings::from_path(&vectors)?;
            let inventory = SenseInventory::from_path(&inventory)?;
            let gloss_table = match glosses {
                Some(path) => GlossTable::from_path(path)?,
                None => GlossTable::default(),
            };
            let pairs: Vec<AnnotatedPair> = dataset::read_records(&dataset_path)?;

            let agreement = sense::annotator_agreement(&pairs)?;
            println!("first annotator mean: {:.4}", agreement.first_mean);
            println!("second annotator mean: {:.4}", agreement.second_mean);
            print_correlation("agreement", &agreement.correlation);

            let found = sense::best_sense_glosses(&pairs, &embeddings, &inventory, &gloss_table);
            match output {
                Some(path) => {
                    let file = fs::File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    sense::write_glosses(file, &found)?;
                }
                None => sense::write_glosses(io::stdout().lock(), &found)?,
            }
        }

        Command::Accuracy { files } => {
            for file in files {
                let accuracy = sense::annotation_accuracy_file(&file)?;
                println!("{}: {accuracy:.4}", file.display());
            }
        }

        Command::Lesk {
            taxonomy,
            sentences,
        } => {
            let taxonomy = Taxonomy::from_path(&taxonomy)?;
            for result in wsd::disambiguate_file(&taxonomy, &sentences)? {
                println!("{result}\n");
            }
        }

        Command::LeskEval { taxonomy, cases } => {
            let taxonomy = Taxonomy::from_path(&taxonomy)?;
            let cases = LeskCase::from_path(&cases)?;
            let report = wsd::evaluate(&taxonomy, &cases)?;
            for miss in &report.misses {
                println!("{} : {}", miss.predicted.as_deref().unwrap_or("-"), miss.gold);
            }
            println!(
                "accuracy: {:.4} ({}/{})",
                report.accuracy, report.correct, report.total
            );
        }
    }

    Ok(())
}
